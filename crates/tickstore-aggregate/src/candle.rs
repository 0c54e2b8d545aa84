//! OHLC candle data structures.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tickstore_types::InstrumentToken;

/// OHLC summary of the ticks in one bucket.
///
/// For any candle built from at least one tick,
/// `low <= min(open, close) <= max(open, close) <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Instrument the candle summarises.
    pub instrument_token: InstrumentToken,
    /// Start of the aggregation window (not a tick timestamp).
    pub bucket_start: NaiveDateTime,
    /// Price of the earliest tick in the bucket.
    pub open: f64,
    /// Highest price in the bucket.
    pub high: f64,
    /// Lowest price in the bucket.
    pub low: f64,
    /// Price of the latest tick in the bucket.
    pub close: f64,
    /// Number of ticks in the bucket.
    pub tick_count: u64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        instrument_token: InstrumentToken,
        bucket_start: NaiveDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        tick_count: u64,
    ) -> Self {
        Self {
            instrument_token,
            bucket_start,
            open,
            high,
            low,
            close,
            tick_count,
        }
    }

    /// Creates the zero-valued candle reported for a window with no ticks.
    #[must_use]
    pub const fn empty(instrument_token: InstrumentToken, bucket_start: NaiveDateTime) -> Self {
        Self::new(instrument_token, bucket_start, 0.0, 0.0, 0.0, 0.0, 0)
    }

    /// Returns true if no tick contributed to this candle.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tick_count == 0
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) candle.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) candle.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the typical price ((high + low + close) / 3).
    #[must_use]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// Candles for one instrument, ascending by bucket start.
///
/// Empty buckets are absent rather than zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    instrument_token: InstrumentToken,
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Creates an empty series.
    #[must_use]
    pub const fn new(instrument_token: InstrumentToken) -> Self {
        Self {
            instrument_token,
            candles: Vec::new(),
        }
    }

    /// Returns the instrument of the series.
    #[must_use]
    pub const fn instrument_token(&self) -> InstrumentToken {
        self.instrument_token
    }

    /// Appends a candle. Callers push in ascending bucket order.
    pub fn push(&mut self, candle: Candle) {
        debug_assert!(
            self.candles
                .last()
                .is_none_or(|last| last.bucket_start < candle.bucket_start),
            "candles must be pushed in ascending bucket order"
        );
        self.candles.push(candle);
    }

    /// Returns the number of candles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.candles.len()
    }

    /// Returns true if the series has no candles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Returns the candles as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Candle] {
        &self.candles
    }

    /// Returns an iterator over the candles.
    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }

    /// Returns the earliest candle.
    #[must_use]
    pub fn first(&self) -> Option<&Candle> {
        self.candles.first()
    }

    /// Returns the latest candle.
    #[must_use]
    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Consumes the series, returning the candles.
    #[must_use]
    pub fn into_vec(self) -> Vec<Candle> {
        self.candles
    }
}

impl IntoIterator for CandleSeries {
    type Item = Candle;
    type IntoIter = std::vec::IntoIter<Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandleSeries {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}
