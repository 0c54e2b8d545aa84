//! Inclusive time ranges for candle queries.

use chrono::{NaiveDateTime, TimeDelta};

use crate::{TimeRangeError, format_store_time, truncate_to_second};

/// A closed time interval `[start, end]`.
///
/// Both ends are inclusive. The store only sees second precision, so the
/// bounds used for filtering drop any sub-second component; the original
/// `start` is kept for stamping single-window candles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeRange {
    /// Creates a new time range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TimeRangeError> {
        if start > end {
            return Err(TimeRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the range `[start, start + minutes]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the end does not fit in the calendar.
    pub fn minutes(start: NaiveDateTime, minutes: u32) -> Result<Self, TimeRangeError> {
        let end = start
            .checked_add_signed(TimeDelta::minutes(i64::from(minutes)))
            .ok_or(TimeRangeError::Overflow { start })?;
        Ok(Self { start, end })
    }

    /// Returns the requested start time.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the requested end time.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Lower filter bound at second precision.
    #[must_use]
    pub fn start_bound(&self) -> NaiveDateTime {
        truncate_to_second(self.start)
    }

    /// Upper filter bound at second precision.
    #[must_use]
    pub fn end_bound(&self) -> NaiveDateTime {
        truncate_to_second(self.end)
    }

    /// Start bound rendered as a store time literal.
    #[must_use]
    pub fn start_literal(&self) -> String {
        format_store_time(self.start)
    }

    /// End bound rendered as a store time literal.
    #[must_use]
    pub fn end_literal(&self) -> String {
        format_store_time(self.end)
    }

    /// Returns true if `ts` falls within the filter bounds (both inclusive).
    #[must_use]
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        ts >= self.start_bound() && ts <= self.end_bound()
    }

    /// Returns the span between start and end.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start_literal(), self.end_literal())
    }
}
