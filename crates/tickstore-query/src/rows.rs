//! Result rows of the aggregation statements.

use chrono::NaiveDateTime;
use clickhouse::Row;
use serde::{Deserialize, Serialize};
use tickstore_aggregate::Candle;
use tickstore_types::{InstrumentToken, Result, TickstoreError, format_store_time, parse_store_time};

/// One row of [`MINUTE_CANDLES`](crate::sql::MINUTE_CANDLES).
#[derive(Debug, Clone, PartialEq, Row, Serialize, Deserialize)]
pub struct MinuteCandleRow {
    /// Instrument token column.
    pub instrument_token: u32,
    /// Minute bucket as a `YYYY-MM-DD HH:MM:SS` literal.
    pub time_minute: String,
    /// Price of the earliest tick.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Price of the latest tick.
    pub close: f64,
    /// Number of ticks in the bucket.
    pub tick_count: u64,
}

impl MinuteCandleRow {
    /// Decodes the row into a candle.
    ///
    /// # Errors
    ///
    /// Returns [`TickstoreError::Scan`] if the bucket literal or the
    /// instrument token cannot be decoded.
    pub fn into_candle(self) -> Result<Candle> {
        let instrument_token = InstrumentToken::new(self.instrument_token).map_err(|_| {
            TickstoreError::Scan(format!("invalid instrument_token {}", self.instrument_token))
        })?;
        let bucket_start = parse_store_time(&self.time_minute)?;

        Ok(Candle::new(
            instrument_token,
            bucket_start,
            self.open,
            self.high,
            self.low,
            self.close,
            self.tick_count,
        ))
    }
}

impl From<&Candle> for MinuteCandleRow {
    fn from(candle: &Candle) -> Self {
        Self {
            instrument_token: candle.instrument_token.get(),
            time_minute: format_store_time(candle.bucket_start),
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            tick_count: candle.tick_count,
        }
    }
}

/// The row of [`WINDOW_CANDLE`](crate::sql::WINDOW_CANDLE).
#[derive(Debug, Clone, Copy, PartialEq, Default, Row, Serialize, Deserialize)]
pub struct WindowCandleRow {
    /// Price of the earliest tick.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Price of the latest tick.
    pub close: f64,
    /// Number of ticks in the window.
    pub tick_count: u64,
}

impl WindowCandleRow {
    /// Builds the candle for `instrument_token` stamped with `bucket_start`.
    ///
    /// A row with no contributing ticks yields the zero-valued candle.
    #[must_use]
    pub const fn into_candle(self, instrument_token: InstrumentToken, bucket_start: NaiveDateTime) -> Candle {
        if self.tick_count == 0 {
            return Candle::empty(instrument_token, bucket_start);
        }
        Candle::new(
            instrument_token,
            bucket_start,
            self.open,
            self.high,
            self.low,
            self.close,
            self.tick_count,
        )
    }
}

impl From<&Candle> for WindowCandleRow {
    fn from(candle: &Candle) -> Self {
        Self {
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            tick_count: candle.tick_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 8)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn minute_row(time_minute: &str) -> MinuteCandleRow {
        MinuteCandleRow {
            instrument_token: 109_122_823,
            time_minute: time_minute.to_string(),
            open: 100.0,
            high: 105.0,
            low: 100.0,
            close: 105.0,
            tick_count: 2,
        }
    }

    #[test]
    fn test_minute_row_decodes() {
        let candle = minute_row("2024-04-08 10:00:00").into_candle().unwrap();

        assert_eq!(candle.instrument_token.get(), 109_122_823);
        assert_eq!(candle.bucket_start, at(10, 0, 0));
        assert_eq!(candle.close, 105.0);
    }

    #[test]
    fn test_minute_row_bad_timestamp_is_scan_error() {
        let err = minute_row("not a time").into_candle().unwrap_err();
        assert!(err.is_scan());
    }

    #[test]
    fn test_minute_row_zero_token_is_scan_error() {
        let mut row = minute_row("2024-04-08 10:00:00");
        row.instrument_token = 0;
        assert!(row.into_candle().unwrap_err().is_scan());
    }

    #[test]
    fn test_window_row_empty() {
        let token = InstrumentToken::new(5).unwrap();
        let candle = WindowCandleRow::default().into_candle(token, at(19, 30, 0));

        assert!(candle.is_empty());
        assert_eq!(candle.bucket_start, at(19, 30, 0));
    }

    #[test]
    fn test_window_row_uses_given_start() {
        let token = InstrumentToken::new(5).unwrap();
        let row = WindowCandleRow {
            open: 1.0,
            high: 3.0,
            low: 0.5,
            close: 2.0,
            tick_count: 4,
        };

        let candle = row.into_candle(token, at(19, 30, 0));
        assert_eq!(candle.bucket_start, at(19, 30, 0));
        assert_eq!(candle.tick_count, 4);
    }
}
