//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Cached events, one row per event id
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    start_time TEXT,
    end_time TEXT,
    description TEXT,
    location_name TEXT,
    address TEXT,
    city TEXT,
    state_province TEXT,
    zip_code TEXT,
    country TEXT,
    geom TEXT,
    organizer TEXT,
    contact_info TEXT,
    event_url TEXT,
    image_url TEXT,
    category TEXT,
    is_free INTEGER,
    price_info TEXT,
    status TEXT,
    source_id TEXT,
    source_name TEXT,
    created_at TEXT,
    updated_at TEXT
);
"#;

/// Inserts an event or overwrites every column of the existing row.
///
/// `ON CONFLICT DO UPDATE` keeps the original rowid, so a re-fetched event
/// keeps its position in `select_all_events`.
pub const UPSERT_EVENT: &str = r#"
INSERT INTO events (
    id, title, start_time, end_time, description, location_name, address, city,
    state_province, zip_code, country, geom, organizer, contact_info, event_url,
    image_url, category, is_free, price_info, status, source_id, source_name,
    created_at, updated_at
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24)
ON CONFLICT(id) DO UPDATE SET
    title = excluded.title,
    start_time = excluded.start_time,
    end_time = excluded.end_time,
    description = excluded.description,
    location_name = excluded.location_name,
    address = excluded.address,
    city = excluded.city,
    state_province = excluded.state_province,
    zip_code = excluded.zip_code,
    country = excluded.country,
    geom = excluded.geom,
    organizer = excluded.organizer,
    contact_info = excluded.contact_info,
    event_url = excluded.event_url,
    image_url = excluded.image_url,
    category = excluded.category,
    is_free = excluded.is_free,
    price_info = excluded.price_info,
    status = excluded.status,
    source_id = excluded.source_id,
    source_name = excluded.source_name,
    created_at = excluded.created_at,
    updated_at = excluded.updated_at
"#;

const EVENT_COLUMNS: &str = "id, title, start_time, end_time, description, location_name, \
address, city, state_province, zip_code, country, geom, organizer, contact_info, event_url, \
image_url, category, is_free, price_info, status, source_id, source_name, created_at, updated_at";

pub fn select_all_events() -> String {
    format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY rowid ASC")
}

pub fn select_event_by_id() -> String {
    format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1")
}

pub const DELETE_ALL_EVENTS: &str = "DELETE FROM events";

pub const COUNT_EVENTS: &str = "SELECT COUNT(*) FROM events";
