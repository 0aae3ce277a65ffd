use thiserror::Error;

/// Errors that can occur during local cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid cached data: {0}")]
    InvalidData(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
