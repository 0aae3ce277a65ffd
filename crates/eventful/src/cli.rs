//! CLI command definitions.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use eventful_core::event::{DateFilter, EventFilter, PriceFilter};

use crate::config::Config;
use crate::repository::CachedSnapshot;

/// Browse local events with a stale-while-revalidate cache.
#[derive(Debug, Parser)]
#[command(name = "eventful")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GraphQL endpoint URL.
    #[arg(long, short, env = "EVENTFUL_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Local cache backend.
    #[arg(long, default_value = "sqlite", global = true)]
    pub cache: CacheBackend,

    /// SQLite database path (sqlite cache only).
    #[arg(long, env = "EVENTFUL_SQLITE_PATH", global = true)]
    pub sqlite_path: Option<String>,

    /// Emit cached snapshots as `loading` or `success`.
    #[arg(long, env = "EVENTFUL_SNAPSHOT", global = true)]
    pub snapshot: Option<CachedSnapshot>,

    /// Only print the final result of each command.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Layers command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(path) = &self.sqlite_path {
            config.sqlite_path = path.clone();
        }
        if let Some(snapshot) = self.snapshot {
            config.snapshot = snapshot;
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per emission.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Cache backend options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CacheBackend {
    /// Persistent SQLite file.
    #[default]
    Sqlite,
    /// Process-local cache, empty on every run.
    Memory,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show cached events, then refresh the first page.
    List,
    /// Fetch one more page of events.
    More {
        /// Number of events already loaded.
        #[arg(long)]
        offset: u32,
        /// Page size (defaults to EVENTFUL_PAGE_SIZE or 20).
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a single event.
    Show {
        /// Event ID.
        id: String,
    },
    /// Load several pages and print the filtered feed.
    Browse(BrowseArgs),
    /// Remove every cached event.
    ClearCache,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Maximum number of pages to load after the first one.
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    /// Case-insensitive text search.
    #[arg(long)]
    pub query: Option<String>,

    /// Only show these categories (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Only show events on `today`, `this-week`, `this-month` or a YYYY-MM-DD date.
    #[arg(long, value_parser = parse_date_filter)]
    pub date: Option<DateFilter>,

    /// Only show free events (same as `--price free`).
    #[arg(long, conflicts_with = "price")]
    pub free: bool,

    /// Price band: `any`, `free`, `under25` or `under100`.
    #[arg(long, value_parser = parse_price_filter)]
    pub price: Option<PriceFilter>,

    /// Origin for the radius filter, as `LAT,LON`.
    #[arg(long, value_parser = parse_coordinates, allow_hyphen_values = true, requires = "radius")]
    pub near: Option<(f64, f64)>,

    /// Only show events within this many kilometres of `--near`.
    #[arg(long, requires = "near")]
    pub radius: Option<f64>,
}

fn parse_date_filter(raw: &str) -> Result<DateFilter, String> {
    match raw {
        "today" => Ok(DateFilter::Today),
        "this-week" => Ok(DateFilter::ThisWeek),
        "this-month" => Ok(DateFilter::ThisMonth),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map(DateFilter::On)
            .map_err(|e| format!("invalid date '{other}': {e}")),
    }
}

fn parse_price_filter(raw: &str) -> Result<PriceFilter, String> {
    match raw.to_ascii_lowercase().as_str() {
        "any" => Ok(PriceFilter::Any),
        "free" => Ok(PriceFilter::Free),
        "under25" => Ok(PriceFilter::Under25),
        "under100" => Ok(PriceFilter::Under100),
        other => Err(format!(
            "invalid price '{other}': expected any, free, under25 or under100"
        )),
    }
}

fn parse_coordinates(raw: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("invalid coordinates '{raw}': expected LAT,LON"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude '{lon}': {e}"))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("coordinates out of range: {lat},{lon}"));
    }
    Ok((lat, lon))
}

impl BrowseArgs {
    pub fn filter(&self) -> EventFilter {
        let mut filter = EventFilter::default();
        if let Some(query) = &self.query {
            filter = filter.with_query(query.clone());
        }
        for category in &self.categories {
            filter.toggle_category(category.clone());
        }
        if let Some(date) = self.date {
            filter = filter.with_date(date);
        }
        if let Some(price) = self.price {
            filter = filter.with_price(price);
        }
        if self.free {
            filter = filter.with_price(PriceFilter::Free);
        }
        if let (Some((lat, lon)), Some(radius)) = (self.near, self.radius) {
            filter = filter.within(radius, lat, lon);
        }
        filter
    }
}
