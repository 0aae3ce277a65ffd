//! SQLite cache implementation.
//!
//! Implements `EventCache` from `eventful_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use eventful_core::event::Event;
use eventful_core::storage::{CacheError, EventCache, Result};

use super::conversions::{row_to_event, upsert_event};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed event cache.
///
/// Multi-row writes run inside a single transaction.
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    /// Opens (or creates) a file-based cache.
    ///
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite event cache");
        Ok(Self { conn })
    }

    /// Creates a cache backed by an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    /// Runs `clear` (optionally) and upserts `events` in one transaction.
    async fn write(&self, events: &[Event], clear_first: bool) -> Result<()> {
        let events = events.to_vec();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                if clear_first {
                    tx.execute(schema::DELETE_ALL_EVENTS, [])
                        .map_err(wrap_err)?;
                }
                for event in &events {
                    upsert_event(&tx, event).map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl EventCache for SqliteCache {
    async fn read_all(&self) -> Result<Vec<Event>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(&schema::select_all_events())
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_event).map_err(wrap_err)?;

                let mut events = Vec::new();
                for row_result in rows {
                    events.push(row_result.map_err(wrap_err)?);
                }
                Ok(events)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn read_by_id(&self, id: &str) -> Result<Option<Event>> {
        let id = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(&schema::select_event_by_id())
                    .map_err(wrap_err)?;
                match stmt.query_row([&id], row_to_event) {
                    Ok(event) => Ok(Some(event)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn upsert_all(&self, events: &[Event]) -> Result<()> {
        self.write(events, false).await
    }

    async fn clear(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute(schema::DELETE_ALL_EVENTS, [])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn replace_all(&self, events: &[Event]) -> Result<()> {
        self.write(events, true).await
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .call(|conn| {
                conn.query_row(schema::COUNT_EVENTS, [], |row| row.get(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        usize::try_from(count).map_err(|e| CacheError::InvalidData(e.to_string()))
    }
}
