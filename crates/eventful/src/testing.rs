//! Hand-written fakes for repository and feed tests.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use eventful_core::event::Event;
use eventful_core::source::{self, EventSource, SourceError};
use eventful_core::storage::{self, CacheError, EventCache};

use crate::storage::InMemoryCache;

/// A call received by [`FakeSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    Events { limit: u32, offset: u32 },
    EventById(String),
}

/// Scripted remote serving windows of a fixed catalog.
#[derive(Default)]
pub struct FakeSource {
    catalog: Mutex<Vec<Event>>,
    failure: Mutex<Option<SourceError>>,
    calls: Mutex<Vec<SourceCall>>,
}

impl FakeSource {
    pub fn with_catalog(events: Vec<Event>) -> Self {
        Self {
            catalog: Mutex::new(events),
            ..Self::default()
        }
    }

    pub fn failing(error: SourceError) -> Self {
        let source = Self::default();
        source.fail_with(error);
        source
    }

    pub fn fail_with(&self, error: SourceError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn set_catalog(&self, events: Vec<Event>) {
        *self.catalog.lock().unwrap() = events;
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check_failure(&self) -> source::Result<()> {
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EventSource for FakeSource {
    async fn fetch_events(&self, limit: u32, offset: u32) -> source::Result<Vec<Event>> {
        self.calls
            .lock()
            .unwrap()
            .push(SourceCall::Events { limit, offset });
        tokio::task::yield_now().await;
        self.check_failure()?;

        let catalog = self.catalog.lock().unwrap();
        Ok(catalog
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn fetch_event_by_id(&self, id: &str) -> source::Result<Option<Event>> {
        self.calls
            .lock()
            .unwrap()
            .push(SourceCall::EventById(id.to_string()));
        tokio::task::yield_now().await;
        self.check_failure()?;

        let catalog = self.catalog.lock().unwrap();
        Ok(catalog.iter().find(|e| e.id == id).cloned())
    }
}

/// Cache whose every operation fails.
pub struct FailingCache;

fn broken() -> CacheError {
    CacheError::QueryFailed("disk I/O error".to_string())
}

#[async_trait]
impl EventCache for FailingCache {
    async fn read_all(&self) -> storage::Result<Vec<Event>> {
        Err(broken())
    }

    async fn read_by_id(&self, _id: &str) -> storage::Result<Option<Event>> {
        Err(broken())
    }

    async fn upsert_all(&self, _events: &[Event]) -> storage::Result<()> {
        Err(broken())
    }

    async fn clear(&self) -> storage::Result<()> {
        Err(broken())
    }
}

/// Cache that keeps the default two-step `replace_all` and parks inside it.
///
/// Every `clear` signals [`cleared`](Self::cleared) and then waits for
/// [`resume`](Self::resume) before returning.
#[derive(Default)]
pub struct GatedCache {
    inner: InMemoryCache,
    cleared: Notify,
    resume: Notify,
}

impl GatedCache {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            inner: InMemoryCache::with_events(events),
            ..Self::default()
        }
    }

    /// Waits until a `clear` has emptied the cache.
    pub async fn cleared(&self) {
        self.cleared.notified().await;
    }

    /// Lets a parked `clear` return.
    pub fn resume(&self) {
        self.resume.notify_one();
    }
}

#[async_trait]
impl EventCache for GatedCache {
    async fn read_all(&self) -> storage::Result<Vec<Event>> {
        self.inner.read_all().await
    }

    async fn read_by_id(&self, id: &str) -> storage::Result<Option<Event>> {
        self.inner.read_by_id(id).await
    }

    async fn upsert_all(&self, events: &[Event]) -> storage::Result<()> {
        self.inner.upsert_all(events).await
    }

    async fn clear(&self) -> storage::Result<()> {
        self.inner.clear().await?;
        self.cleared.notify_one();
        self.resume.notified().await;
        Ok(())
    }
}

/// `count` numbered events titled after their position.
pub fn numbered_events(start: usize, count: usize) -> Vec<Event> {
    (start..start + count)
        .map(|n| Event::new(n.to_string(), format!("Event {n}")))
        .collect()
}
