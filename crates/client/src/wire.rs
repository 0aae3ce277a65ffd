//! GraphQL wire types and their mapping into domain events.

use eventful_core::event::{Event, Geometry};
use eventful_core::serde::{
    deserialize_optional_bool, deserialize_optional_geometry, deserialize_optional_text,
};
use serde::{Deserialize, Serialize};

/// Fields requested for every event.
pub const EVENT_FIELDS: &str = "id sourceId sourceName title description startTime endTime \
locationName address city stateProvince zipCode country geom organizer contactInfo eventUrl \
imageUrl category isFree priceInfo status createdAt updatedAt";

/// GraphQL request body.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: Option<String>,
}

/// `data` of the `allEvents` query.
#[derive(Debug, Deserialize)]
pub struct AllEventsData {
    #[serde(rename = "allEvents")]
    pub all_events: Option<Vec<Option<EventDto>>>,
}

/// `data` of the `eventById` query.
#[derive(Debug, Deserialize)]
pub struct EventByIdData {
    #[serde(rename = "eventById")]
    pub event_by_id: Option<EventDto>,
}

/// An event as the service sends it.
///
/// Optional scalars are loosely typed upstream, so each one goes through a
/// lenient deserializer that also drops the `"nan"` sentinel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub source_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub source_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub location_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub state_province: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_geometry")]
    pub geom: Option<Geometry>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub organizer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub contact_info: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub event_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub is_free: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub price_info: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub updated_at: Option<String>,
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Event {
            id: dto.id,
            title: dto.title,
            start_time: dto.start_time,
            end_time: dto.end_time,
            description: dto.description,
            location_name: dto.location_name,
            address: dto.address,
            city: dto.city,
            state_province: dto.state_province,
            zip_code: dto.zip_code,
            country: dto.country,
            geom: dto.geom,
            organizer: dto.organizer,
            contact_info: dto.contact_info,
            event_url: dto.event_url,
            image_url: dto.image_url,
            category: dto.category,
            is_free: dto.is_free,
            price_info: dto.price_info,
            status: dto.status,
            source_id: dto.source_id,
            source_name: dto.source_name,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> Event {
        let dto: EventDto = serde_json::from_value(value).unwrap();
        dto.into()
    }

    #[test]
    fn test_minimal_event() {
        let event = map(json!({"id": "1", "title": "A", "startTime": "2024-01-01T10:00:00Z"}));
        assert_eq!(event.id, "1");
        assert_eq!(event.title, "A");
        assert_eq!(event.start_time.as_deref(), Some("2024-01-01T10:00:00Z"));
        assert!(event.description.is_none());
    }

    #[test]
    fn test_nan_description_maps_to_none() {
        let event = map(json!({"id": "1", "title": "A", "description": "nan"}));
        assert_eq!(event.description, None);
    }

    #[test]
    fn test_every_sentinel_field_is_normalized() {
        let event = map(json!({
            "id": "1",
            "title": "A",
            "locationName": "nan",
            "address": "nan",
            "city": "nan",
            "stateProvince": "nan",
            "zipCode": "nan",
            "country": "nan",
            "organizer": "nan",
            "contactInfo": "nan",
            "eventUrl": "nan",
            "imageUrl": "nan",
            "category": "nan",
            "priceInfo": "nan",
            "status": "nan"
        }));
        assert_eq!(event, Event::new("1", "A"));
    }

    #[test]
    fn test_full_event() {
        let event = map(json!({
            "id": "evt-42",
            "sourceId": "src-1",
            "sourceName": "City Calendar",
            "title": "Jazz in the Park",
            "description": "Live music",
            "startTime": "2024-06-01T18:00:00Z",
            "endTime": "2024-06-01T21:00:00Z",
            "locationName": "Julia Davis Park",
            "city": "Boise",
            "geom": {"type": "Point", "coordinates": [-116.2, 43.6]},
            "isFree": true,
            "category": "Music"
        }));
        assert_eq!(event.source_name.as_deref(), Some("City Calendar"));
        assert_eq!(event.geom, Some(Geometry::point(-116.2, 43.6)));
        assert_eq!(event.is_free, Some(true));
        assert_eq!(event.category.as_deref(), Some("Music"));
    }

    #[test]
    fn test_loosely_typed_scalars() {
        let event = map(json!({
            "id": "1",
            "title": "A",
            "isFree": "nan",
            "zipCode": 83702,
            "geom": "POINT(-116.2 43.6)"
        }));
        assert_eq!(event.is_free, None);
        assert_eq!(event.zip_code, None);
        assert_eq!(event.geom, Some(Geometry::point(-116.2, 43.6)));
    }

    #[test]
    fn test_all_events_envelope_skips_null_items() {
        let body = json!({"data": {"allEvents": [{"id": "1", "title": "A"}, null]}});
        let response: GraphQlResponse<AllEventsData> = serde_json::from_value(body).unwrap();
        let items = response.data.unwrap().all_events.unwrap();
        let events: Vec<Event> = items.into_iter().flatten().map(Event::from).collect();
        assert_eq!(events, vec![Event::new("1", "A")]);
    }

    #[test]
    fn test_request_body_shape() {
        let body = GraphQlRequest {
            query: "query { x }",
            variables: json!({"limit": 10}),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"query": "query { x }", "variables": {"limit": 10}})
        );
    }
}
