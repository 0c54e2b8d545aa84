//! Error types for tickstore.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type alias for tickstore operations.
pub type Result<T> = std::result::Result<T, TickstoreError>;

/// Errors that can occur while fetching candles.
#[derive(Error, Debug)]
pub enum TickstoreError {
    /// The store could not be reached, or rejected the query.
    #[error("Query error: {0}")]
    Query(String),

    /// A result row could not be decoded into the expected field types.
    #[error("Scan error: {0}")]
    Scan(String),

    /// Instrument tokens must be positive.
    #[error("Invalid instrument token: {0}")]
    InvalidInstrument(u32),

    /// Instrument token text is not an unsigned integer.
    #[error("Invalid instrument token: {0:?} is not a number")]
    UnparsableInstrument(String),

    /// Invalid time range.
    #[error(transparent)]
    TimeRange(#[from] TimeRangeError),
}

impl TickstoreError {
    /// Returns true for store or query failures.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    /// Returns true for row decoding failures.
    #[must_use]
    pub const fn is_scan(&self) -> bool {
        matches!(self, Self::Scan(_))
    }
}

/// Error for invalid time ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    /// Start time is after end time.
    #[error("Invalid time range: {start} > {end}")]
    InvalidRange {
        /// The start time.
        start: NaiveDateTime,
        /// The end time.
        end: NaiveDateTime,
    },

    /// Window end does not fit in the calendar.
    #[error("Time range starting at {start} overflows")]
    Overflow {
        /// The start time.
        start: NaiveDateTime,
    },
}
