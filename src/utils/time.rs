//! Time utilities: parsing booking timestamps, formatting durations.

use crate::errors::{AppError, AppResult};
use crate::models::reference_zone::ReferenceZone;
use chrono::{DateTime, FixedOffset, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// RFC 3339 keeps its own offset; a wall-clock time without offset is
/// placed in `zone`.
pub fn parse_timestamp(s: &str, zone: ReferenceZone) -> AppResult<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?;

    zone.localize(naive)
}

pub fn parse_optional_timestamp(
    input: Option<&String>,
    zone: ReferenceZone,
) -> AppResult<Option<DateTime<FixedOffset>>> {
    input.map(|s| parse_timestamp(s, zone)).transpose()
}

/// `25_200_000` → `07h 00m`; seconds are dropped, sign kept.
pub fn ms2readable(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let mins = ms.abs() / 60_000;
    format!("{}{:02}h {:02}m", sign, mins / 60, mins % 60)
}
