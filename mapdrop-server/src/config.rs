//! Server configuration - environment loading
//!
//! Configuration is loaded from environment variables:
//! - `MAPDROP_BIND`: address to bind to (default: 127.0.0.1:8999)
//! - `DATABASE_URL`: Postgres connection string
//! - `MAPDROP_HIDE_THRESHOLD`: score at or below which a point is hidden (default: -5)
//! - `MAPDROP_MAX_POINT_AGE_HOURS`: listing recency window (default: 12)
//! - `MAPDROP_LIST_LIMIT`: listing row cap (default: 500)
//! - `MAPDROP_QUEUE_DEPTH`: moderation queue buffer size (default: 256)
//! - `MAPDROP_CORS_PERMISSIVE`: allow any origin (default: false)

use std::net::SocketAddr;

use chrono::Duration;
use mapdrop_core::moderation::DEFAULT_HIDE_THRESHOLD;
use tracing::warn;

const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 8999);
const DEFAULT_MAX_POINT_AGE_HOURS: i64 = 12;
const DEFAULT_LIST_LIMIT: i64 = 500;
const DEFAULT_QUEUE_DEPTH: usize = 256;

/// Application configuration, injected at construction.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    /// Postgres connection string
    pub database_url: String,

    /// Score at or below which a point is hidden
    pub hide_threshold: i64,

    /// Points older than this are excluded from listings
    pub max_point_age: Duration,

    /// Maximum rows returned by a listing
    pub list_limit: i64,

    /// Moderation queue buffer size
    pub moderation_queue_depth: usize,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl AppConfig {
    /// Load configuration from environment variables, with defaults.
    pub fn from_env() -> Self {
        Self {
            bind_addr: parse_var("MAPDROP_BIND", SocketAddr::from(DEFAULT_BIND)),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/mapdrop".to_string()),
            hide_threshold: parse_var("MAPDROP_HIDE_THRESHOLD", DEFAULT_HIDE_THRESHOLD),
            max_point_age: Duration::hours(parse_var(
                "MAPDROP_MAX_POINT_AGE_HOURS",
                DEFAULT_MAX_POINT_AGE_HOURS,
            )),
            list_limit: parse_var("MAPDROP_LIST_LIMIT", DEFAULT_LIST_LIMIT),
            moderation_queue_depth: parse_var("MAPDROP_QUEUE_DEPTH", DEFAULT_QUEUE_DEPTH),
            cors_permissive: parse_var("MAPDROP_CORS_PERMISSIVE", false),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND),
            database_url: "postgres://localhost/mapdrop".to_string(),
            hide_threshold: DEFAULT_HIDE_THRESHOLD,
            max_point_age: Duration::hours(DEFAULT_MAX_POINT_AGE_HOURS),
            list_limit: DEFAULT_LIST_LIMIT,
            moderation_queue_depth: DEFAULT_QUEUE_DEPTH,
            cors_permissive: false,
        }
    }
}

/// Parse an environment variable, falling back to the default when unset or
/// malformed.
fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Invalid {key} value {raw:?}, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr.port(), 8999);
        assert_eq!(config.hide_threshold, -5);
        assert_eq!(config.max_point_age, Duration::hours(12));
        assert_eq!(config.list_limit, 500);
        assert!(!config.cors_permissive);
    }
}
