//! Search and filter criteria over a list of events.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

use super::Event;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Date window an event must start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    Any,
    Today,
    /// Monday through Sunday of the current week.
    ThisWeek,
    ThisMonth,
    On(NaiveDate),
}

/// Price band an event must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    Any,
    Free,
    Under25,
    Under100,
}

/// Filter criteria for the search screen.
///
/// The default value matches every event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventFilter {
    pub query: String,
    pub categories: BTreeSet<String>,
    pub date: DateFilter,
    pub price: PriceFilter,
    /// Search radius around `origin`, in kilometres.
    pub radius_km: Option<f64>,
    /// `(latitude, longitude)` the radius is measured from.
    pub origin: Option<(f64, f64)>,
}

impl EventFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Adds a category, or removes it when already selected.
    pub fn toggle_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn with_date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }

    pub fn with_price(mut self, price: PriceFilter) -> Self {
        self.price = price;
        self
    }

    pub fn within(mut self, radius_km: f64, latitude: f64, longitude: f64) -> Self {
        self.radius_km = Some(radius_km);
        self.origin = Some((latitude, longitude));
        self
    }

    /// Returns the matching events in input order.
    pub fn apply(&self, events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
        events
            .iter()
            .filter(|e| self.matches(e, now))
            .cloned()
            .collect()
    }

    pub fn matches(&self, event: &Event, now: DateTime<Utc>) -> bool {
        self.matches_query(event)
            && self.matches_category(event)
            && self.matches_date(event, now)
            && self.matches_price(event)
            && self.matches_radius(event)
    }

    fn matches_query(&self, event: &Event) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        std::iter::once(Some(&event.title))
            .chain([
                event.description.as_ref(),
                event.location_name.as_ref(),
                event.city.as_ref(),
                event.organizer.as_ref(),
                event.category.as_ref(),
            ])
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_category(&self, event: &Event) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        event.category.as_ref().is_some_and(|category| {
            self.categories
                .iter()
                .any(|selected| selected.eq_ignore_ascii_case(category))
        })
    }

    fn matches_date(&self, event: &Event, now: DateTime<Utc>) -> bool {
        if self.date == DateFilter::Any {
            return true;
        }
        let Some(start) = event.start_time.as_deref().and_then(parse_start_date) else {
            return false;
        };
        let today = now.date_naive();
        match self.date {
            DateFilter::Any => true,
            DateFilter::Today => start == today,
            DateFilter::ThisWeek => {
                let monday =
                    today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                let sunday = monday + Duration::days(6);
                start >= monday && start <= sunday
            }
            DateFilter::ThisMonth => start.year() == today.year() && start.month() == today.month(),
            DateFilter::On(date) => start == date,
        }
    }

    fn matches_price(&self, event: &Event) -> bool {
        let ceiling = match self.price {
            PriceFilter::Any => return true,
            PriceFilter::Free => return is_free(event),
            PriceFilter::Under25 => 25.0,
            PriceFilter::Under100 => 100.0,
        };
        if is_free(event) {
            return true;
        }
        event
            .price_info
            .as_deref()
            .and_then(first_amount)
            .is_some_and(|amount| amount < ceiling)
    }

    fn matches_radius(&self, event: &Event) -> bool {
        let (Some(radius), Some((lat, lon))) = (self.radius_km, self.origin) else {
            return true;
        };
        let Some(geom) = &event.geom else {
            return false;
        };
        match (geom.latitude(), geom.longitude()) {
            (Some(event_lat), Some(event_lon)) => {
                haversine_km(lat, lon, event_lat, event_lon) <= radius
            }
            _ => false,
        }
    }
}

fn is_free(event: &Event) -> bool {
    event.is_free == Some(true)
        || event
            .price_info
            .as_deref()
            .is_some_and(|p| p.to_lowercase().contains("free"))
}

/// Local calendar date of an ISO-8601 start time (RFC 3339, naive datetime, or date).
fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// First decimal number in a free-form price string, e.g. `"$15 - $20"` -> 15.
fn first_amount(raw: &str) -> Option<f64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let rest = &raw[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    rest[..end].trim_end_matches('.').parse().ok()
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
