//! Event queries.

use async_trait::async_trait;
use eventful_core::event::Event;
use eventful_core::source::{self, EventSource, SourceError};
use serde_json::json;

use super::GraphQlClient;
use crate::error::{ClientError, Result};
use crate::wire::{AllEventsData, EventByIdData, EVENT_FIELDS};

fn all_events_query() -> String {
    format!(
        "query AllEvents($limit: Int, $offset: Int) {{ allEvents(limit: $limit, offset: $offset) {{ {EVENT_FIELDS} }} }}"
    )
}

fn event_by_id_query() -> String {
    format!("query EventDetails($id: ID!) {{ eventById(id: $id) {{ {EVENT_FIELDS} }} }}")
}

impl GraphQlClient {
    /// List one page of events. Null items in the list are skipped.
    pub async fn all_events(&self, limit: u32, offset: u32) -> Result<Vec<Event>> {
        let data: AllEventsData = self
            .execute(
                &all_events_query(),
                json!({ "limit": limit, "offset": offset }),
            )
            .await?;

        let items = data.all_events.ok_or(ClientError::MissingData)?;
        Ok(items.into_iter().flatten().map(Event::from).collect())
    }

    /// Get a single event by ID.
    pub async fn event_by_id(&self, id: &str) -> Result<Option<Event>> {
        let data: EventByIdData = self
            .execute(&event_by_id_query(), json!({ "id": id }))
            .await?;
        Ok(data.event_by_id.map(Event::from))
    }
}

#[async_trait]
impl EventSource for GraphQlClient {
    async fn fetch_events(&self, limit: u32, offset: u32) -> source::Result<Vec<Event>> {
        self.all_events(limit, offset).await.map_err(|err| {
            tracing::debug!(limit, offset, error = %err, "allEvents query failed");
            SourceError::from(err)
        })
    }

    async fn fetch_event_by_id(&self, id: &str) -> source::Result<Option<Event>> {
        self.event_by_id(id).await.map_err(|err| {
            tracing::debug!(event_id = %id, error = %err, "eventById query failed");
            SourceError::from(err)
        })
    }
}
