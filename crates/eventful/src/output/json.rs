//! JSON output formatting.

use serde::Serialize;

use eventful_core::event::Event;

use crate::feed::EventFeed;

/// Format a value as JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[derive(Serialize)]
struct FeedView<'a> {
    events: &'a [Event],
    loaded: usize,
    has_more: bool,
    error: Option<&'a str>,
}

/// Format a browsed feed as JSON.
pub fn format_feed(feed: &EventFeed, visible: &[Event]) -> String {
    format_json(&FeedView {
        events: visible,
        loaded: feed.events().len(),
        has_more: feed.has_more(),
        error: feed.error(),
    })
}
