//! Pretty output formatting.

use eventful_core::event::Event;
use eventful_core::Resource;

use crate::feed::EventFeed;

/// Format any emission, rendering carried data with `render`.
pub fn format_resource<T>(resource: &Resource<T>, render: impl Fn(&T) -> String) -> String {
    match resource {
        Resource::Loading { data: None } => "Loading...".to_string(),
        Resource::Loading { data: Some(data) } => {
            format!("Cached (refreshing...)\n{}", render(data))
        }
        Resource::Success { data } => render(data),
        Resource::Error {
            message,
            data: None,
        } => format!("Error: {}", message),
        Resource::Error {
            message,
            data: Some(data),
        } => format!("Error: {}\nShowing cached data:\n{}", message, render(data)),
    }
}

fn location(event: &Event) -> Option<String> {
    match (&event.location_name, &event.city) {
        (Some(name), Some(city)) => Some(format!("{}, {}", name, city)),
        (Some(name), None) => Some(name.clone()),
        (None, Some(city)) => Some(city.clone()),
        (None, None) => None,
    }
}

fn price(event: &Event) -> Option<String> {
    match (event.is_free, &event.price_info) {
        (Some(true), _) => Some("Free".to_string()),
        (_, Some(info)) => Some(info.clone()),
        _ => None,
    }
}

/// Format an event summary for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  When: {}",
        event.title,
        event.id,
        event.start_time_or_tbd()
    );
    if let Some(place) = location(event) {
        output.push_str(&format!("\n  Where: {}", place));
    }
    if let Some(category) = &event.category {
        output.push_str(&format!("\n  Category: {}", category));
    }
    if let Some(price) = price(event) {
        output.push_str(&format!("\n  Price: {}", price));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

/// Format every known field of an event.
pub fn format_event_detail(event: &Event) -> String {
    let mut output = format_event(event);
    if let Some(end) = &event.end_time {
        output.push_str(&format!("\n  Ends: {}", end));
    }

    let address: Vec<&str> = [
        &event.address,
        &event.state_province,
        &event.zip_code,
        &event.country,
    ]
    .into_iter()
    .filter_map(|part| part.as_deref())
    .collect();
    if !address.is_empty() {
        output.push_str(&format!("\n  Address: {}", address.join(", ")));
    }

    if let Some(geom) = &event.geom {
        if let (Some(lat), Some(lon)) = (geom.latitude(), geom.longitude()) {
            output.push_str(&format!("\n  Coordinates: {:.5}, {:.5}", lat, lon));
        }
    }

    let details = [
        ("Organizer", &event.organizer),
        ("Contact", &event.contact_info),
        ("URL", &event.event_url),
        ("Status", &event.status),
        ("Source", &event.source_name),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            output.push_str(&format!("\n  {}: {}", label, value));
        }
    }

    if let Some(description) = &event.description {
        output.push_str(&format!("\n\n{}", description));
    }
    output
}

/// Format a browsed feed for display.
pub fn format_feed(feed: &EventFeed, visible: &[Event]) -> String {
    let mut output = format_events(visible);
    output.push_str(&format!(
        "\nShowing {} of {} loaded events{}",
        visible.len(),
        feed.events().len(),
        if feed.has_more() {
            " (more available)"
        } else {
            ""
        }
    ));
    if let Some(error) = feed.error() {
        output.push_str(&format!("\nError: {}", error));
    }
    output
}

#[cfg(test)]
mod tests {
    use eventful_core::event::Geometry;

    use super::*;

    fn jazz() -> Event {
        Event::new("evt-1", "Jazz in the Park")
            .with_start_time("2024-06-01T18:00:00Z")
            .with_location("Julia Davis Park", "Boise")
            .with_category("Music")
            .with_price(Some(true), None)
    }

    #[test]
    fn test_format_event() {
        assert_eq!(
            format_event(&jazz()),
            "Jazz in the Park\n  ID: evt-1\n  When: 2024-06-01T18:00:00Z\n  \
             Where: Julia Davis Park, Boise\n  Category: Music\n  Price: Free"
        );
    }

    #[test]
    fn test_missing_start_time_is_tbd() {
        let output = format_event(&Event::new("1", "Pop-up"));
        assert_eq!(output, "Pop-up\n  ID: 1\n  When: TBD");
    }

    #[test]
    fn test_format_events_empty() {
        assert_eq!(format_events(&[]), "No events found.");
    }

    #[test]
    fn test_format_event_detail() {
        let event = jazz()
            .with_description("Live music all evening")
            .with_geom(Geometry::point(-116.2, 43.6));
        let output = format_event_detail(&event);
        assert!(output.contains("Coordinates: 43.60000, -116.20000"));
        assert!(output.ends_with("\n\nLive music all evening"));
    }

    #[test]
    fn test_format_resource_states() {
        let render = |n: &u32| format!("<{}>", n);
        assert_eq!(format_resource(&Resource::loading(), render), "Loading...");
        assert_eq!(
            format_resource(&Resource::loading_with(1), render),
            "Cached (refreshing...)\n<1>"
        );
        assert_eq!(format_resource(&Resource::success(2), render), "<2>");
        assert_eq!(
            format_resource(&Resource::error("offline", None), render),
            "Error: offline"
        );
        assert_eq!(
            format_resource(&Resource::error("offline", Some(3)), render),
            "Error: offline\nShowing cached data:\n<3>"
        );
    }
}
