//! Aggregation statements issued against the tick table.
//!
//! Both statements take the same four bound parameters, in order:
//!
//! 1. the tick table, bound as an identifier
//! 2. `instrument_token` (`UInt32`)
//! 3. range start as a `YYYY-MM-DD HH:MM:SS` literal
//! 4. range end as a `YYYY-MM-DD HH:MM:SS` literal
//!
//! Both range bounds are inclusive. `open` and `close` are chosen by
//! `argMin`/`argMax` over the tick timestamp so they never depend on scan
//! order.
//!
//! # Example
//!
//! ```
//! use tickstore_query::sql::{MINUTE_CANDLES, placeholder_count};
//!
//! assert!(MINUTE_CANDLES.contains("toStartOfMinute(timestamp)"));
//! assert_eq!(placeholder_count(MINUTE_CANDLES), 4);
//! ```

/// One row per non-empty calendar minute, ascending by minute.
///
/// Row shape: [`MinuteCandleRow`](crate::MinuteCandleRow).
pub const MINUTE_CANDLES: &str = "\
SELECT
    instrument_token,
    toString(bucket) AS time_minute,
    argMin(price, timestamp) AS open,
    max(price) AS high,
    min(price) AS low,
    argMax(price, timestamp) AS close,
    count() AS tick_count
FROM
(
    SELECT
        instrument_token,
        toStartOfMinute(timestamp) AS bucket,
        timestamp,
        price
    FROM ?
    WHERE (instrument_token = ?)
      AND (timestamp >= toDateTime(?))
      AND (timestamp <= toDateTime(?))
)
GROUP BY instrument_token, bucket
ORDER BY bucket ASC";

/// A single aggregate over the whole range, read after the latest-version
/// merge (`FINAL`).
///
/// Always yields exactly one row; `tick_count` is zero when nothing matched.
/// Row shape: [`WindowCandleRow`](crate::WindowCandleRow).
pub const WINDOW_CANDLE: &str = "\
SELECT
    argMin(price, timestamp) AS open,
    max(price) AS high,
    min(price) AS low,
    argMax(price, timestamp) AS close,
    count() AS tick_count
FROM ? FINAL
WHERE (instrument_token = ?)
  AND (timestamp >= toDateTime(?))
  AND (timestamp <= toDateTime(?))";

/// Counts the `?` bind placeholders in a statement.
#[must_use]
pub fn placeholder_count(statement: &str) -> usize {
    statement.matches('?').count()
}
