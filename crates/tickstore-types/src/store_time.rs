//! Time literals exchanged with the tick store.
//!
//! The store speaks naive, second-precision timestamps of the form
//! `YYYY-MM-DD HH:MM:SS`. Sub-second components are dropped when a bound is
//! rendered, never rounded.

use chrono::{NaiveDateTime, Timelike};

use crate::TickstoreError;

/// `strftime` pattern of a store time literal.
pub const STORE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a timestamp as a store time literal.
#[must_use]
pub fn format_store_time(dt: NaiveDateTime) -> String {
    dt.format(STORE_TIME_FORMAT).to_string()
}

/// Parses a store time literal returned in a result row.
///
/// # Errors
///
/// Returns [`TickstoreError::Scan`] if the value is not a valid literal.
pub fn parse_store_time(value: &str) -> Result<NaiveDateTime, TickstoreError> {
    NaiveDateTime::parse_from_str(value, STORE_TIME_FORMAT)
        .map_err(|e| TickstoreError::Scan(format!("invalid timestamp {value:?}: {e}")))
}

/// Drops the sub-second component of a timestamp.
#[must_use]
pub fn truncate_to_second(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(h: u32, m: u32, s: u32, milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 8)
            .unwrap()
            .and_hms_milli_opt(h, m, s, milli)
            .unwrap()
    }

    #[test]
    fn test_format_drops_subseconds() {
        assert_eq!(format_store_time(dt(19, 30, 0, 999)), "2024-04-08 19:30:00");
    }

    #[test]
    fn test_parse_roundtrip() {
        let parsed = parse_store_time("2024-04-08 19:33:00").unwrap();
        assert_eq!(parsed, dt(19, 33, 0, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_store_time("19:33").unwrap_err();
        assert!(err.is_scan());
    }

    #[test]
    fn test_truncate_to_second() {
        assert_eq!(truncate_to_second(dt(10, 0, 5, 250)), dt(10, 0, 5, 0));
    }
}
