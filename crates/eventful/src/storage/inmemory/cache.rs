//! In-memory cache implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventful_core::event::Event;
use eventful_core::storage::{EventCache, Result};

/// In-memory event cache.
///
/// Rows keep their first-insertion position; upserting an existing ID swaps
/// the row in place. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache pre-populated with `events` (later duplicates win).
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut rows = Vec::new();
        for event in events {
            upsert_row(&mut rows, event);
        }
        Self {
            events: Arc::new(RwLock::new(rows)),
        }
    }
}

fn upsert_row(rows: &mut Vec<Event>, event: Event) {
    match rows.iter_mut().find(|row| row.id == event.id) {
        Some(row) => *row = event,
        None => rows.push(event),
    }
}

#[async_trait]
impl EventCache for InMemoryCache {
    async fn read_all(&self) -> Result<Vec<Event>> {
        Ok(self.events.read().await.clone())
    }

    async fn read_by_id(&self, id: &str) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn upsert_all(&self, events: &[Event]) -> Result<()> {
        let mut rows = self.events.write().await;
        for event in events {
            upsert_row(&mut rows, event.clone());
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.events.write().await.clear();
        Ok(())
    }

    async fn replace_all(&self, events: &[Event]) -> Result<()> {
        let mut rows = self.events.write().await;
        rows.clear();
        for event in events {
            upsert_row(&mut rows, event.clone());
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.events.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, title: &str) -> Event {
        Event::new(id, title)
    }

    #[tokio::test]
    async fn test_empty_cache() {
        let cache = InMemoryCache::new();
        assert!(cache.read_all().await.unwrap().is_empty());
        assert_eq!(cache.count().await.unwrap(), 0);
        assert!(cache.read_by_id("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_and_read() {
        let cache = InMemoryCache::new();
        cache
            .upsert_all(&[event("1", "A"), event("2", "B")])
            .await
            .unwrap();

        assert_eq!(
            cache.read_all().await.unwrap(),
            vec![event("1", "A"), event("2", "B")]
        );
        assert_eq!(cache.read_by_id("2").await.unwrap(), Some(event("2", "B")));
    }

    #[tokio::test]
    async fn test_upsert_replaces_whole_row_in_place() {
        let cache = InMemoryCache::new();
        let original = event("1", "Old").with_description("kept?");
        cache
            .upsert_all(&[original, event("2", "B")])
            .await
            .unwrap();

        cache.upsert_all(&[event("1", "New")]).await.unwrap();

        let rows = cache.read_all().await.unwrap();
        assert_eq!(rows, vec![event("1", "New"), event("2", "B")]);
        assert!(rows[0].description.is_none());
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let cache = InMemoryCache::new();
        let e = event("1", "A");
        cache.upsert_all(&[e.clone()]).await.unwrap();
        let once = cache.read_all().await.unwrap();
        cache.upsert_all(&[e]).await.unwrap();
        assert_eq!(cache.read_all().await.unwrap(), once);
    }

    #[tokio::test]
    async fn test_duplicate_ids_in_one_batch_keep_last() {
        let cache = InMemoryCache::new();
        cache
            .upsert_all(&[event("1", "First"), event("1", "Second")])
            .await
            .unwrap();
        assert_eq!(cache.read_all().await.unwrap(), vec![event("1", "Second")]);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = InMemoryCache::with_events(vec![event("1", "A")]);
        cache.clear().await.unwrap();
        assert_eq!(cache.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_replace_all_leaves_no_residue() {
        let cache = InMemoryCache::with_events(vec![event("1", "A"), event("2", "B")]);
        cache.replace_all(&[event("3", "C")]).await.unwrap();
        assert_eq!(cache.read_all().await.unwrap(), vec![event("3", "C")]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let cache = InMemoryCache::new();
        let other = cache.clone();
        cache.upsert_all(&[event("1", "A")]).await.unwrap();
        assert_eq!(other.count().await.unwrap(), 1);
    }
}
