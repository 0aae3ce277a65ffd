//! In-memory cache backend.
//!
//! Stores events in a `Vec` wrapped in `Arc<RwLock<_>>`. Nothing is persisted;
//! the snapshot lives as long as the cache value and its clones.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventful::storage::inmemory::InMemoryCache;
//!
//! let cache = InMemoryCache::new();
//! cache.upsert_all(&events).await?;
//! ```

mod cache;

pub use cache::InMemoryCache;
