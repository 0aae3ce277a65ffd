//! Caller-side list state folded from repository emissions.

use chrono::{DateTime, Utc};
use serde::Serialize;

use eventful_core::event::{Event, EventFilter};
use eventful_core::pagination::{PageRequest, Pagination, PAGE_SIZE};
use eventful_core::Resource;

/// A paged list of events as a screen would render it.
#[derive(Debug, Clone, Serialize)]
pub struct EventFeed {
    events: Vec<Event>,
    is_loading: bool,
    is_loading_more: bool,
    error: Option<String>,
    pagination: Pagination,
}

impl Default for EventFeed {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl EventFeed {
    /// Creates an empty feed that loads more in windows of `page_size`.
    pub fn new(page_size: u32) -> Self {
        Self {
            events: Vec::new(),
            is_loading: false,
            is_loading_more: false,
            error: None,
            pagination: Pagination::new(page_size),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }

    pub fn current_offset(&self) -> u32 {
        self.pagination.current_offset()
    }

    /// Folds one emission of `get_events`.
    pub fn apply_first_page(&mut self, resource: &Resource<Vec<Event>>) {
        match resource {
            Resource::Loading { data } => {
                self.is_loading = true;
                if let Some(events) = data {
                    self.events = events.clone();
                }
            }
            Resource::Success { data } => {
                self.is_loading = false;
                self.error = None;
                self.events = data.clone();
                self.pagination.reset(data.len());
            }
            Resource::Error { message, data } => {
                self.is_loading = false;
                self.error = Some(message.clone());
                if let Some(events) = data {
                    self.events = events.clone();
                }
            }
        }
    }

    /// Folds one emission of `load_more_events`.
    pub fn apply_more(&mut self, resource: &Resource<Vec<Event>>) {
        match resource {
            Resource::Loading { .. } => self.is_loading_more = true,
            Resource::Success { data } => {
                self.is_loading_more = false;
                self.error = None;
                self.events.extend(data.iter().cloned());
                self.pagination.record_page(data.len());
            }
            Resource::Error { message, .. } => {
                self.is_loading_more = false;
                self.error = Some(message.clone());
            }
        }
    }

    /// The next window to request, if any.
    pub fn next_page(&self) -> Option<PageRequest> {
        if self.is_loading_more {
            return None;
        }
        self.pagination.next_request()
    }

    /// Events passing `filter`, in feed order.
    pub fn visible(&self, filter: &EventFilter, now: DateTime<Utc>) -> Vec<Event> {
        filter.apply(&self.events, now)
    }
}
