//! Feed timestamp handling.
//!
//! The feed reports arrival instants as ISO 8601 strings with a UTC offset,
//! e.g. `2024-03-15T14:32:10-04:00`. ETAs are whole minutes, floored, so a
//! train 59 seconds out is "0" and a train one second gone is "-1".

use chrono::{DateTime, Utc};

/// Error returned when a feed timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid feed timestamp {value:?}: {reason}")]
pub struct TimestampError {
    value: String,
    reason: String,
}

/// Parse an ISO 8601 / RFC 3339 timestamp into an absolute instant.
///
/// # Examples
///
/// ```
/// use subway_board::domain::parse_feed_time;
///
/// let t = parse_feed_time("2024-03-15T14:32:10-04:00").unwrap();
/// assert_eq!(t.to_rfc3339(), "2024-03-15T18:32:10+00:00");
///
/// assert!(parse_feed_time("14:32").is_err());
/// ```
pub fn parse_feed_time(s: &str) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| TimestampError {
            value: s.to_string(),
            reason: e.to_string(),
        })
}

/// Whole minutes from `now` until `at`, rounded towards negative infinity.
pub fn eta_minutes(at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (at - now).num_milliseconds().div_euclid(60_000)
}
