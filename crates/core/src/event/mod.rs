mod filter;
mod normalize;
mod types;

pub use filter::{DateFilter, EventFilter, PriceFilter};
pub use normalize::{normalize_text, parse_geometry_str, parse_geometry_value, NAN_SENTINEL};
pub use types::{Event, Geometry, START_TIME_TBD};
