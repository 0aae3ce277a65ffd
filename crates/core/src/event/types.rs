use serde::{Deserialize, Serialize};

/// Placeholder shown when an event has no start time.
pub const START_TIME_TBD: &str = "TBD";

/// A single occurrence published by the events service.
///
/// Events are values: the cache never edits one in place, it replaces the
/// whole row keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// ISO-8601 start time. Degraded upstream rows may omit it.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub location_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub geom: Option<Geometry>,
    pub organizer: Option<String>,
    pub contact_info: Option<String>,
    pub event_url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub is_free: Option<bool>,
    pub price_info: Option<String>,
    pub status: Option<String>,
    pub source_id: Option<String>,
    pub source_name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Event {
    /// Creates an event with only the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_time: None,
            end_time: None,
            description: None,
            location_name: None,
            address: None,
            city: None,
            state_province: None,
            zip_code: None,
            country: None,
            geom: None,
            organizer: None,
            contact_info: None,
            event_url: None,
            image_url: None,
            category: None,
            is_free: None,
            price_info: None,
            status: None,
            source_id: None,
            source_name: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the start time.
    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the venue name and city.
    pub fn with_location(mut self, location_name: impl Into<String>, city: impl Into<String>) -> Self {
        self.location_name = Some(location_name.into());
        self.city = Some(city.into());
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the price information.
    pub fn with_price(mut self, is_free: Option<bool>, price_info: Option<&str>) -> Self {
        self.is_free = is_free;
        self.price_info = price_info.map(str::to_string);
        self
    }

    /// Sets the geometry.
    pub fn with_geom(mut self, geom: Geometry) -> Self {
        self.geom = Some(geom);
        self
    }

    /// Start time for display, `"TBD"` when missing.
    pub fn start_time_or_tbd(&self) -> &str {
        self.start_time.as_deref().unwrap_or(START_TIME_TBD)
    }
}

/// GeoJSON-like geometry attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// Ordered components: longitude first, then latitude.
    pub coordinates: Vec<f64>,
}

impl Geometry {
    /// Creates a `Point` geometry from a longitude/latitude pair.
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: vec![longitude, latitude],
        }
    }

    pub fn longitude(&self) -> Option<f64> {
        if self.coordinates.len() >= 2 {
            Some(self.coordinates[0])
        } else {
            None
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        if self.coordinates.len() >= 2 {
            Some(self.coordinates[1])
        } else {
            None
        }
    }

    /// Compact storage form, e.g. `Point:-116.2,43.6`.
    pub fn to_compact(&self) -> String {
        let coords: Vec<String> = self.coordinates.iter().map(|c| c.to_string()).collect();
        format!("{}:{}", self.kind, coords.join(","))
    }
}
