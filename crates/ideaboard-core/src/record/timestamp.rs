//! Timestamp normalization.
//!
//! Idea records have been written by several generations of the app, so
//! `createdAt` and `updatedAt` show up as epoch milliseconds, ISO-8601
//! strings, or document-database timestamp objects. Everything is reduced to
//! epoch milliseconds before it is compared.
//!
//! Missing, zero, empty and unparseable values all normalize to the injected
//! `now`, so a record with an unknown date sorts as fresh rather than ancient.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Returns the current Unix timestamp in milliseconds.
///
/// Uses `instant::SystemTime` so the same code runs on WASM and native.
/// Returns 0 if the clock reads before UNIX_EPOCH.
pub fn current_timestamp_millis() -> i64 {
    instant::SystemTime::now()
        .duration_since(instant::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// A timestamp as stored on an idea record.
///
/// Deserializes from a JSON number, a string, or an object with `seconds`
/// and `nanoseconds` (the hosted database's native timestamp shape). Any
/// other JSON value is kept as [`Timestamp::Other`] so one odd field never
/// rejects the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Epoch milliseconds
    Millis(i64),
    /// Epoch milliseconds written as a float, truncated toward zero
    Number(f64),
    /// Calendar time as text (RFC 3339, RFC 2822, or a plain date)
    Text(String),
    /// Document-database timestamp object
    Object(TimestampObject),
    /// Unsupported shape, never parseable
    Other(serde_json::Value),
}

/// Seconds + nanoseconds timestamp, as exported by the hosted database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampObject {
    /// Whole seconds since UNIX_EPOCH
    #[serde(alias = "_seconds")]
    pub seconds: i64,
    /// Sub-second part
    #[serde(alias = "_nanoseconds", default)]
    pub nanoseconds: i64,
}

impl TimestampObject {
    /// Epoch milliseconds of this timestamp.
    pub fn to_millis(self) -> i64 {
        self.seconds
            .saturating_mul(1000)
            .saturating_add(self.nanoseconds / 1_000_000)
    }
}

impl Timestamp {
    /// Epoch milliseconds, or `None` when the value is falsy or unparseable.
    pub fn to_millis(&self) -> Option<i64> {
        match self {
            Timestamp::Millis(0) => None,
            Timestamp::Millis(ms) => Some(*ms),
            Timestamp::Number(ms) if !ms.is_finite() || *ms == 0.0 => None,
            Timestamp::Number(ms) => Some(*ms as i64),
            Timestamp::Object(object) => Some(object.to_millis()),
            Timestamp::Text(text) => parse_calendar_millis(text),
            Timestamp::Other(_) => None,
        }
    }

    /// Returns `true` for non-empty text that no supported format accepts,
    /// and for values of an unsupported shape.
    pub fn is_unparseable(&self) -> bool {
        match self {
            Timestamp::Text(text) => {
                !text.trim().is_empty() && parse_calendar_millis(text).is_none()
            }
            Timestamp::Number(ms) => !ms.is_finite(),
            Timestamp::Other(_) => true,
            _ => false,
        }
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Timestamp::Millis(ms)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp::Text(text.to_string())
    }
}

impl<Tz: chrono::TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(date: DateTime<Tz>) -> Self {
        Timestamp::Millis(date.timestamp_millis())
    }
}

/// Normalizes an optional timestamp to epoch milliseconds.
///
/// Absent, zero, empty and unparseable values yield `now_ms`.
pub fn normalize_timestamp(value: Option<&Timestamp>, now_ms: i64) -> i64 {
    let Some(value) = value else {
        return now_ms;
    };

    match value.to_millis() {
        Some(ms) => ms,
        None => {
            if value.is_unparseable() {
                debug!(?value, "Unparseable timestamp, treating as now");
            }
            now_ms
        }
    }
}

/// Effective freshness of a record in epoch milliseconds.
///
/// `updated_at` wins only when it is present and strictly after `created_at`.
pub fn freshness_millis(
    created_at: Option<&Timestamp>,
    updated_at: Option<&Timestamp>,
    now_ms: i64,
) -> i64 {
    let created = normalize_timestamp(created_at, now_ms);
    updated_at
        .and_then(Timestamp::to_millis)
        .filter(|updated| *updated > created)
        .unwrap_or(created)
}

/// Parses calendar text into epoch milliseconds.
///
/// Text without an offset is read as UTC.
pub fn parse_calendar_millis(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.timestamp_millis());
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(text) {
        return Some(date.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_absent_is_now() {
        assert_eq!(normalize_timestamp(None, NOW), NOW);
    }

    #[test]
    fn test_falsy_values_are_now() {
        assert_eq!(normalize_timestamp(Some(&Timestamp::Millis(0)), NOW), NOW);
        assert_eq!(normalize_timestamp(Some(&Timestamp::from("")), NOW), NOW);
        assert_eq!(normalize_timestamp(Some(&Timestamp::from("   ")), NOW), NOW);
    }

    #[test]
    fn test_millis_pass_through_unchanged() {
        assert_eq!(normalize_timestamp(Some(&Timestamp::Millis(42)), NOW), 42);
        // No range validation
        assert_eq!(normalize_timestamp(Some(&Timestamp::Millis(-5)), NOW), -5);
    }

    #[test]
    fn test_object_shape() {
        let ts = Timestamp::Object(TimestampObject {
            seconds: 1_700_000_000,
            nanoseconds: 250_000_000,
        });
        assert_eq!(normalize_timestamp(Some(&ts), 0), 1_700_000_000_250);
    }

    #[test]
    fn test_iso_strings() {
        let expected = Utc
            .with_ymd_and_hms(2024, 3, 15, 12, 30, 0)
            .unwrap()
            .timestamp_millis();

        for text in [
            "2024-03-15T12:30:00Z",
            "2024-03-15T12:30:00.000Z",
            "2024-03-15T14:30:00+02:00",
            "2024-03-15T12:30:00",
            "2024-03-15 12:30:00",
        ] {
            assert_eq!(
                normalize_timestamp(Some(&Timestamp::from(text)), NOW),
                expected,
                "failed to parse {text}"
            );
        }
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        let expected = Utc
            .with_ymd_and_hms(2024, 3, 15, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(
            normalize_timestamp(Some(&Timestamp::from("2024-03-15")), NOW),
            expected
        );
    }

    #[test]
    fn test_unparseable_string_is_now() {
        let ts = Timestamp::from("not a date");
        assert!(ts.is_unparseable());
        assert_eq!(ts.to_millis(), None);
        assert_eq!(normalize_timestamp(Some(&ts), NOW), NOW);
    }

    #[test]
    fn test_from_datetime() {
        let date = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            Timestamp::from(date),
            Timestamp::Millis(date.timestamp_millis())
        );
    }

    #[test]
    fn test_deserialize_shapes() {
        let ts: Timestamp = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(ts, Timestamp::Millis(1_700_000_000_000));

        let ts: Timestamp = serde_json::from_str("\"2024-01-01T00:00:00Z\"").unwrap();
        assert!(matches!(ts, Timestamp::Text(_)));

        let ts: Timestamp =
            serde_json::from_str(r#"{"_seconds": 10, "_nanoseconds": 5000000}"#).unwrap();
        assert_eq!(ts.to_millis(), Some(10_005));
    }

    #[test]
    fn test_freshness_prefers_later_update() {
        let created = Timestamp::Millis(1_000);
        let updated = Timestamp::Millis(5_000);
        assert_eq!(freshness_millis(Some(&created), Some(&updated), NOW), 5_000);
    }

    #[test]
    fn test_freshness_ignores_earlier_or_equal_update() {
        let created = Timestamp::Millis(5_000);
        assert_eq!(
            freshness_millis(Some(&created), Some(&Timestamp::Millis(1_000)), NOW),
            5_000
        );
        assert_eq!(
            freshness_millis(Some(&created), Some(&Timestamp::Millis(5_000)), NOW),
            5_000
        );
    }

    #[test]
    fn test_freshness_ignores_falsy_update() {
        let created = Timestamp::Millis(5_000);
        assert_eq!(freshness_millis(Some(&created), None, NOW), 5_000);
        assert_eq!(
            freshness_millis(Some(&created), Some(&Timestamp::from("garbage")), NOW),
            5_000
        );
        assert_eq!(
            freshness_millis(Some(&created), Some(&Timestamp::Millis(0)), NOW),
            5_000
        );
    }

    #[test]
    fn test_float_millis_are_truncated() {
        let ts: Timestamp = serde_json::from_str("1710201600000.0").unwrap();
        assert_eq!(ts, Timestamp::Number(1_710_201_600_000.0));
        assert_eq!(normalize_timestamp(Some(&ts), NOW), 1_710_201_600_000);

        let ts: Timestamp = serde_json::from_str("1710201600000.9").unwrap();
        assert_eq!(ts.to_millis(), Some(1_710_201_600_000));

        assert_eq!(normalize_timestamp(Some(&Timestamp::Number(0.0)), NOW), NOW);
        assert!(!Timestamp::Number(12.5).is_unparseable());
    }

    #[test]
    fn test_unsupported_shapes_are_kept_as_other() {
        for json in ["true", "[1, 2]", r#"{"when": "tomorrow"}"#] {
            let ts: Timestamp = serde_json::from_str(json).unwrap();
            assert!(matches!(ts, Timestamp::Other(_)), "{json} decoded as {ts:?}");
            assert!(ts.is_unparseable());
            assert_eq!(normalize_timestamp(Some(&ts), NOW), NOW);
        }
    }

    #[test]
    fn test_current_timestamp_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(current_timestamp_millis() > 1_577_836_800_000);
    }
}
