//! Wire-to-domain normalisation.
//!
//! Pure functions that clean up upstream data quality artifacts before values
//! reach the domain model.

use serde_json::Value;

use super::Geometry;

/// Upstream marker for a missing value.
pub const NAN_SENTINEL: &str = "nan";

/// Drops the `"nan"` sentinel, keeping any other value as-is.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value.filter(|s| s != NAN_SENTINEL)
}

/// Parses a geometry from a JSON value.
///
/// Accepts an object `{"type": .., "coordinates": [..]}` or a string in either
/// the compact `Type:lon,lat` form or WKT `POINT(lon lat)`. Returns `None` for
/// anything with fewer than two numeric coordinates.
pub fn parse_geometry_value(value: &Value) -> Option<Geometry> {
    match value {
        Value::Object(map) => {
            let kind = map.get("type")?.as_str()?;
            let coordinates: Vec<f64> = map
                .get("coordinates")?
                .as_array()?
                .iter()
                .filter_map(Value::as_f64)
                .collect();
            build(kind, coordinates)
        }
        Value::String(s) => parse_geometry_str(s),
        _ => None,
    }
}

/// Parses a geometry from its string form.
pub fn parse_geometry_str(raw: &str) -> Option<Geometry> {
    let raw = raw.trim();
    if let Some((kind, coords)) = raw.split_once(':') {
        let coordinates: Vec<f64> = coords
            .split(',')
            .filter_map(|c| c.trim().parse().ok())
            .collect();
        return build(kind, coordinates);
    }
    parse_wkt_point(raw)
}

fn parse_wkt_point(raw: &str) -> Option<Geometry> {
    let prefix = raw.get(..5)?;
    if !prefix.eq_ignore_ascii_case("POINT") {
        return None;
    }
    let body = raw[5..].trim_start().strip_prefix('(')?;
    let body = &body[..body.find(')')?];
    let mut parts = body.split_whitespace();
    let longitude: f64 = parts.next()?.parse().ok()?;
    let latitude: f64 = parts.next()?.parse().ok()?;
    Some(Geometry::point(longitude, latitude))
}

fn build(kind: &str, coordinates: Vec<f64>) -> Option<Geometry> {
    if coordinates.len() < 2 {
        return None;
    }
    Some(Geometry {
        kind: kind.to_string(),
        coordinates,
    })
}
