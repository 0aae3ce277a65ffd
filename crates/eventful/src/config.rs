use std::{env, time::Duration};

use eventful_client::client::DEFAULT_ENDPOINT;
use eventful_core::pagination::{FIRST_PAGE_SIZE, PAGE_SIZE};

use crate::repository::{CachedSnapshot, RepositoryConfig};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// GraphQL endpoint (default: "http://localhost:8000/graphql")
    pub endpoint: String,
    /// Path to SQLite database file (default: "eventful.db")
    pub sqlite_path: String,
    /// Events requested by the first-page fetch (default: 10)
    pub first_page_size: u32,
    /// Events requested by each "load more" fetch (default: 20)
    pub page_size: u32,
    /// State used for cached snapshots (default: loading)
    pub snapshot: CachedSnapshot,
    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTFUL_ENDPOINT` - GraphQL endpoint (default: "http://localhost:8000/graphql")
    /// - `EVENTFUL_SQLITE_PATH` - SQLite database path (default: "eventful.db")
    /// - `EVENTFUL_FIRST_PAGE_SIZE` - First page size (default: 10)
    /// - `EVENTFUL_PAGE_SIZE` - Load-more page size (default: 20)
    /// - `EVENTFUL_SNAPSHOT` - `loading` or `success` (default: loading)
    /// - `EVENTFUL_REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 30)
    ///
    /// Unparseable values and zero page sizes fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("EVENTFUL_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            sqlite_path: env::var("EVENTFUL_SQLITE_PATH")
                .unwrap_or_else(|_| "eventful.db".to_string()),
            first_page_size: env::var("EVENTFUL_FIRST_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|size| *size > 0)
                .unwrap_or(FIRST_PAGE_SIZE),
            page_size: env::var("EVENTFUL_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|size| *size > 0)
                .unwrap_or(PAGE_SIZE),
            snapshot: env::var("EVENTFUL_SNAPSHOT")
                .ok()
                .and_then(|v| v.parse::<CachedSnapshot>().ok())
                .unwrap_or_default(),
            request_timeout_seconds: env::var("EVENTFUL_REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Repository settings derived from this configuration.
    pub fn repository(&self) -> RepositoryConfig {
        RepositoryConfig {
            first_page_size: self.first_page_size,
            snapshot: self.snapshot,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
