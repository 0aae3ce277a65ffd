//! Serde helper functions for wire deserialization.
//!
//! The events service is loosely typed: optional fields may arrive as
//! `null`, as the `"nan"` sentinel, or with an unexpected JSON type. These
//! helpers map all of those to `None` instead of failing the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::event::{normalize_text, parse_geometry_value, Geometry};

/// Deserialize an optional string, treating the `"nan"` sentinel and
/// non-string values as None.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(normalize_text(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        _ => None,
    })))
}

/// Deserialize an optional boolean, treating non-boolean values as None.
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()))
}

/// Deserialize an optional geometry from an object, compact string or WKT.
pub fn deserialize_optional_geometry<'de, D>(
    deserializer: D,
) -> Result<Option<Geometry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_geometry_value))
}
