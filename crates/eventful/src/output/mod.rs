//! Output formatting functions.

pub mod json;
pub mod pretty;

use eventful_core::event::Event;
use eventful_core::Resource;
use tokio_stream::{Stream, StreamExt};

use crate::cli::OutputFormat;
use crate::feed::EventFeed;

/// Format a list emission for output.
pub fn format_events_resource(resource: &Resource<Vec<Event>>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(resource),
        OutputFormat::Pretty => {
            pretty::format_resource(resource, |events| pretty::format_events(events))
        }
    }
}

/// Format a single-event emission for output.
pub fn format_event_resource(resource: &Resource<Event>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(resource),
        OutputFormat::Pretty => pretty::format_resource(resource, pretty::format_event_detail),
    }
}

/// Format the visible part of a browsed feed.
pub fn format_feed(feed: &EventFeed, visible: &[Event], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_feed(feed, visible),
        OutputFormat::Pretty => pretty::format_feed(feed, visible),
    }
}

/// Drains `stream`, handing emissions to `print`, and returns the last one.
///
/// When `quiet`, only the final emission is printed, after the stream ends.
/// A cached snapshot emitted as `Success` is therefore never printed on its own.
pub async fn print_emissions<T>(
    stream: impl Stream<Item = Resource<T>>,
    quiet: bool,
    mut print: impl FnMut(&Resource<T>),
) -> Option<Resource<T>> {
    tokio::pin!(stream);

    let mut last = None;
    while let Some(resource) = stream.next().await {
        if !quiet {
            print(&resource);
        }
        last = Some(resource);
    }

    if quiet {
        if let Some(resource) = &last {
            print(resource);
        }
    }
    last
}
