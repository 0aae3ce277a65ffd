//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain events.

use eventful_core::event::{parse_geometry_str, Event, Geometry};
use rusqlite::{Connection, Row};

use super::schema;

/// Convert a SQLite row to an Event.
///
/// Expected columns: the order of `schema::EVENT_COLUMNS`.
pub fn row_to_event(row: &Row) -> rusqlite::Result<Event> {
    let geom: Option<String> = row.get(11)?;

    Ok(Event {
        id: row.get(0)?,
        title: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        description: row.get(4)?,
        location_name: row.get(5)?,
        address: row.get(6)?,
        city: row.get(7)?,
        state_province: row.get(8)?,
        zip_code: row.get(9)?,
        country: row.get(10)?,
        geom: geom.as_deref().and_then(parse_geometry_str),
        organizer: row.get(12)?,
        contact_info: row.get(13)?,
        event_url: row.get(14)?,
        image_url: row.get(15)?,
        category: row.get(16)?,
        is_free: row.get(17)?,
        price_info: row.get(18)?,
        status: row.get(19)?,
        source_id: row.get(20)?,
        source_name: row.get(21)?,
        created_at: row.get(22)?,
        updated_at: row.get(23)?,
    })
}

/// Writes one event with `schema::UPSERT_EVENT`.
pub fn upsert_event(conn: &Connection, event: &Event) -> rusqlite::Result<()> {
    let geom = event.geom.as_ref().map(Geometry::to_compact);
    conn.execute(
        schema::UPSERT_EVENT,
        rusqlite::params![
            event.id,
            event.title,
            event.start_time,
            event.end_time,
            event.description,
            event.location_name,
            event.address,
            event.city,
            event.state_province,
            event.zip_code,
            event.country,
            geom,
            event.organizer,
            event.contact_info,
            event.event_url,
            event.image_url,
            event.category,
            event.is_free,
            event.price_info,
            event.status,
            event.source_id,
            event.source_name,
            event.created_at,
            event.updated_at
        ],
    )?;
    Ok(())
}
