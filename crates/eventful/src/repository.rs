//! Stale-while-revalidate event repository.
//!
//! Every operation returns a lazily started stream of [`Resource`] states:
//! `Loading` first, then (where the operation reads the cache) a cached
//! snapshot, then exactly one terminal `Success` or `Error`. A remote failure
//! never hides data that was already served from the cache.

use std::str::FromStr;
use std::sync::Arc;

use async_stream::stream;
use tokio::sync::Mutex;
use tokio_stream::Stream;

use eventful_core::event::Event;
use eventful_core::pagination::FIRST_PAGE_SIZE;
use eventful_core::source::EventSource;
use eventful_core::storage::EventCache;
use eventful_core::Resource;

/// Terminal message when neither the remote nor the cache knows an event.
pub const EVENT_NOT_FOUND: &str = "Event not found";

pub const INVALID_LIMIT: &str = "limit must be greater than zero";

pub const EMPTY_EVENT_ID: &str = "Event id must not be empty";

/// State used to emit cached data before the remote answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachedSnapshot {
    /// `Loading { data: Some(cached) }`
    #[default]
    Loading,
    /// `Success { data: cached }`, followed by the remote result.
    Success,
}

impl CachedSnapshot {
    fn emit<T>(self, data: T) -> Resource<T> {
        match self {
            CachedSnapshot::Loading => Resource::loading_with(data),
            CachedSnapshot::Success => Resource::success(data),
        }
    }
}

impl FromStr for CachedSnapshot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loading" => Ok(CachedSnapshot::Loading),
            "success" => Ok(CachedSnapshot::Success),
            other => Err(format!(
                "invalid snapshot mode '{other}', expected 'loading' or 'success'"
            )),
        }
    }
}

/// Repository tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Window size of the `get_events` fetch.
    pub first_page_size: u32,
    pub snapshot: CachedSnapshot,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            first_page_size: FIRST_PAGE_SIZE,
            snapshot: CachedSnapshot::default(),
        }
    }
}

/// Repository combining a local cache with a remote event source.
///
/// Clones share the source, the cache and the writer lock, so every cache
/// mutation issued through any clone is serialised.
///
/// # Type Parameters
///
/// * `S` - The remote event source
/// * `C` - The local cache
pub struct EventRepository<S, C> {
    source: Arc<S>,
    cache: Arc<C>,
    config: RepositoryConfig,
    writer: Arc<Mutex<()>>,
}

impl<S, C> Clone for EventRepository<S, C> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cache: Arc::clone(&self.cache),
            config: self.config,
            writer: Arc::clone(&self.writer),
        }
    }
}

impl<S, C> EventRepository<S, C>
where
    S: EventSource + 'static,
    C: EventCache + 'static,
{
    /// Creates a repository with the default configuration.
    pub fn new(source: Arc<S>, cache: Arc<C>) -> Self {
        Self::with_config(source, cache, RepositoryConfig::default())
    }

    pub fn with_config(source: Arc<S>, cache: Arc<C>, config: RepositoryConfig) -> Self {
        Self {
            source,
            cache,
            config,
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Serves the cached list, then refreshes the first page from the remote.
    ///
    /// On success the cache is replaced by the fetched page. On failure the
    /// cache is left untouched and the terminal `Error` carries the cached list
    /// when one was served.
    pub fn get_events(&self) -> impl Stream<Item = Resource<Vec<Event>>> + Send + 'static {
        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        let writer = Arc::clone(&self.writer);
        let RepositoryConfig {
            first_page_size,
            snapshot,
        } = self.config;

        stream! {
            yield Resource::loading();

            let cached = match cache.read_all().await {
                Ok(events) if !events.is_empty() => Some(events),
                Ok(_) => None,
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to read cached events");
                    None
                }
            };

            if let Some(events) = &cached {
                tracing::debug!(count = events.len(), "Serving cached events");
                yield snapshot.emit(events.clone());
            }

            if first_page_size == 0 {
                yield Resource::error(INVALID_LIMIT, cached);
                return;
            }

            match source.fetch_events(first_page_size, 0).await {
                Ok(events) => {
                    {
                        let _guard = writer.lock().await;
                        if let Err(err) = cache.replace_all(&events).await {
                            tracing::warn!(error = %err, "Failed to replace cached events");
                        }
                    }
                    tracing::debug!(count = events.len(), "Fetched first page");
                    yield Resource::success(events);
                }
                Err(err) => {
                    tracing::warn!(
                        error = ?err,
                        stale = cached.is_some(),
                        "Failed to fetch first page"
                    );
                    yield Resource::error(err.to_string(), cached);
                }
            }
        }
    }

    /// Fetches one more window from the remote and adds it to the cache.
    ///
    /// Never reads the cache; failures carry no data.
    pub fn load_more_events(
        &self,
        offset: u32,
        limit: u32,
    ) -> impl Stream<Item = Resource<Vec<Event>>> + Send + 'static {
        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        let writer = Arc::clone(&self.writer);

        stream! {
            yield Resource::loading();

            if limit == 0 {
                yield Resource::error(INVALID_LIMIT, None);
                return;
            }

            match source.fetch_events(limit, offset).await {
                Ok(events) => {
                    {
                        let _guard = writer.lock().await;
                        if let Err(err) = cache.upsert_all(&events).await {
                            tracing::warn!(offset, limit, error = %err, "Failed to cache page");
                        }
                    }
                    tracing::debug!(offset, limit, count = events.len(), "Fetched page");
                    yield Resource::success(events);
                }
                Err(err) => {
                    tracing::warn!(offset, limit, error = ?err, "Failed to fetch page");
                    yield Resource::error(err.to_string(), None);
                }
            }
        }
    }

    /// Serves the cached event, then refreshes it from the remote.
    pub fn get_event_by_id(
        &self,
        id: impl Into<String>,
    ) -> impl Stream<Item = Resource<Event>> + Send + 'static {
        let id: String = id.into();
        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        let writer = Arc::clone(&self.writer);
        let snapshot = self.config.snapshot;

        stream! {
            yield Resource::loading();

            if id.trim().is_empty() {
                yield Resource::error(EMPTY_EVENT_ID, None);
                return;
            }

            let cached = match cache.read_by_id(&id).await {
                Ok(event) => event,
                Err(err) => {
                    tracing::warn!(event_id = %id, error = %err, "Failed to read cached event");
                    None
                }
            };

            if let Some(event) = &cached {
                tracing::debug!(event_id = %id, "Serving cached event");
                yield snapshot.emit(event.clone());
            }

            match source.fetch_event_by_id(&id).await {
                Ok(Some(event)) => {
                    {
                        let _guard = writer.lock().await;
                        if let Err(err) = cache.upsert_all(std::slice::from_ref(&event)).await {
                            tracing::warn!(event_id = %id, error = %err, "Failed to cache event");
                        }
                    }
                    yield Resource::success(event);
                }
                Ok(None) => {
                    tracing::debug!(event_id = %id, "Event not found remotely");
                    yield Resource::error(EVENT_NOT_FOUND, cached);
                }
                Err(err) => {
                    tracing::warn!(event_id = %id, error = ?err, "Failed to fetch event");
                    yield Resource::error(err.to_string(), cached);
                }
            }
        }
    }

    /// Empties the local cache.
    pub async fn clear_cache(&self) -> eventful_core::storage::Result<()> {
        let _guard = self.writer.lock().await;
        self.cache.clear().await
    }
}
