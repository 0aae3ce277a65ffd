//! SQLite cache backend implementation.
//!
//! This module provides a SQLite-based implementation of `EventCache`
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.

mod cache;
mod conversions;
mod error;
mod schema;

pub use cache::SqliteCache;
