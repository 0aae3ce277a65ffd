use async_trait::async_trait;

use crate::event::Event;

use super::Result;

/// Local snapshot of events keyed by event ID.
///
/// Implementations hold at most one row per ID. Reads return rows in
/// first-insertion order; upserting an existing ID replaces the whole row in
/// place.
#[async_trait]
pub trait EventCache: Send + Sync {
    /// Reads every cached event.
    async fn read_all(&self) -> Result<Vec<Event>>;

    /// Reads a single event by its ID.
    async fn read_by_id(&self, id: &str) -> Result<Option<Event>>;

    /// Inserts or wholly replaces each event by ID.
    async fn upsert_all(&self, events: &[Event]) -> Result<()>;

    /// Removes every cached event.
    async fn clear(&self) -> Result<()>;

    /// Replaces the cache contents with `events`.
    ///
    /// Backends that can do so apply the clear and the upsert as one unit.
    async fn replace_all(&self, events: &[Event]) -> Result<()> {
        self.clear().await?;
        self.upsert_all(events).await
    }

    /// Number of cached events.
    async fn count(&self) -> Result<usize> {
        Ok(self.read_all().await?.len())
    }
}
