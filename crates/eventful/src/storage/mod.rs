//! Cache backend implementations.
//!
//! This module provides concrete implementations of the `EventCache` trait
//! defined in `eventful_core::storage`. Backends are compiled in via feature
//! flags and selected at runtime from configuration.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): persistent cache using `rusqlite` and `tokio-rusqlite`
//! - `inmemory` (default): process-local cache, also used by the tests

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No cache backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p eventful --features sqlite"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryCache;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteCache;
