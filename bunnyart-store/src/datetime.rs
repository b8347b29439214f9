//! Timestamp parsing for endpoint payloads.
//!
//! The backends serialize rows with a stringly default, so `created_at`
//! arrives either as RFC 3339 or as the space-separated form a
//! Postgres-backed service emits.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Accepted non-RFC 3339 timestamp layouts.
const FALLBACK_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a `created_at` value leniently.
///
/// Returns `None` when no accepted layout matches; timestamps without an
/// offset are interpreted as UTC.
pub fn parse_created_at(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}
