//! eventful - local event browsing over a stale-while-revalidate cache.

pub mod cli;
pub mod config;
pub mod feed;
pub mod output;
pub mod repository;
pub mod storage;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use feed::EventFeed;
pub use repository::{CachedSnapshot, EventRepository, RepositoryConfig};
