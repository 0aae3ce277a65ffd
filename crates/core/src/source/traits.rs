use async_trait::async_trait;

use crate::event::Event;

use super::Result;

/// Remote origin of events (the GraphQL service in production).
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetches one page of events.
    async fn fetch_events(&self, limit: u32, offset: u32) -> Result<Vec<Event>>;

    /// Fetches a single event. `Ok(None)` means the service has no such event.
    async fn fetch_event_by_id(&self, id: &str) -> Result<Option<Event>>;
}
