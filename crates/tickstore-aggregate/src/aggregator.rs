//! Streaming tick-to-candle aggregation over calendar minutes.

use chrono::{NaiveDateTime, Timelike};
use tickstore_types::{InstrumentToken, Tick};

use crate::Candle;

/// Streaming calendar-minute aggregator.
///
/// Ticks must be fed grouped by instrument and ascending by timestamp within
/// each instrument. A tick for another minute or another instrument than the
/// bar in progress completes that bar.
#[derive(Debug, Default)]
pub struct MinuteAggregator {
    current_bar: Option<CandleBuilder>,
}

impl MinuteAggregator {
    /// Creates a new aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self { current_bar: None }
    }

    /// Processes a tick, potentially emitting a completed candle.
    ///
    /// Returns `Some(candle)` when a candle is completed by this tick,
    /// `None` otherwise.
    pub fn process(&mut self, tick: &Tick) -> Option<Candle> {
        let bucket_start = truncate_to_minute(tick.timestamp);

        match self.current_bar.take() {
            Some(mut builder)
                if builder.bucket_start == bucket_start
                    && builder.instrument_token == tick.instrument_token =>
            {
                builder.update(tick);
                self.current_bar = Some(builder);
                None
            }
            Some(builder) => {
                let completed = builder.finish();
                self.current_bar = Some(CandleBuilder::new(bucket_start, tick));
                Some(completed)
            }
            None => {
                self.current_bar = Some(CandleBuilder::new(bucket_start, tick));
                None
            }
        }
    }

    /// Finishes aggregation, returning any remaining partial candle.
    #[must_use]
    pub fn finish(self) -> Option<Candle> {
        self.current_bar.map(CandleBuilder::finish)
    }
}

/// Aggregates ticks into one candle per instrument and non-empty calendar
/// minute.
///
/// Ticks are stably sorted by `(instrument_token, timestamp)` first, so ticks
/// sharing both keep their input order. The result is grouped by instrument
/// and ascending by bucket start within each instrument.
#[must_use]
pub fn minute_candles(ticks: &[Tick]) -> Vec<Candle> {
    let mut ordered = ticks.to_vec();
    ordered.sort_by_key(|tick| (tick.instrument_token, tick.timestamp));

    let mut aggregator = MinuteAggregator::new();
    let mut candles = Vec::new();

    for tick in &ordered {
        if let Some(candle) = aggregator.process(tick) {
            candles.push(candle);
        }
    }

    if let Some(candle) = aggregator.finish() {
        candles.push(candle);
    }

    candles
}

/// Truncates a timestamp to the start of its calendar minute.
#[must_use]
pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Builder for candles.
#[derive(Debug)]
pub(crate) struct CandleBuilder {
    instrument_token: InstrumentToken,
    bucket_start: NaiveDateTime,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    tick_count: u64,
}

impl CandleBuilder {
    /// Creates a new builder from the first tick.
    pub(crate) const fn new(bucket_start: NaiveDateTime, tick: &Tick) -> Self {
        Self {
            instrument_token: tick.instrument_token,
            bucket_start,
            open: tick.price,
            high: tick.price,
            low: tick.price,
            close: tick.price,
            tick_count: 1,
        }
    }

    /// Updates the builder with a later tick.
    pub(crate) fn update(&mut self, tick: &Tick) {
        self.high = self.high.max(tick.price);
        self.low = self.low.min(tick.price);
        self.close = tick.price;
        self.tick_count += 1;
    }

    /// Finishes building and returns the candle.
    pub(crate) const fn finish(self) -> Candle {
        Candle::new(
            self.instrument_token,
            self.bucket_start,
            self.open,
            self.high,
            self.low,
            self.close,
            self.tick_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn token() -> InstrumentToken {
        InstrumentToken::new(109_122_823).unwrap()
    }

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 8)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn make_tick(hour: u32, minute: u32, second: u32, price: f64) -> Tick {
        Tick::new(token(), at(hour, minute, second), price)
    }

    #[test]
    fn test_minute_aggregation() {
        let mut agg = MinuteAggregator::new();

        assert!(agg.process(&make_tick(10, 0, 5, 100.0)).is_none());
        assert!(agg.process(&make_tick(10, 0, 40, 105.0)).is_none());

        let candle = agg.process(&make_tick(10, 1, 10, 102.0)).unwrap();
        assert_eq!(candle.bucket_start, at(10, 0, 0));
        assert_eq!(candle.tick_count, 2);
        assert_eq!(candle.open, 100.0);
        assert_eq!(candle.high, 105.0);
        assert_eq!(candle.low, 100.0);
        assert_eq!(candle.close, 105.0);

        let last = agg.finish().unwrap();
        assert_eq!(last.bucket_start, at(10, 1, 0));
        assert_eq!(last.open, 102.0);
        assert_eq!(last.close, 102.0);
    }

    #[test]
    fn test_finish_empty() {
        assert!(MinuteAggregator::new().finish().is_none());
    }

    #[test]
    fn test_minute_candles_sorts_by_timestamp() {
        // Arrival order differs from timestamp order.
        let ticks = vec![
            make_tick(10, 0, 40, 105.0),
            make_tick(10, 1, 10, 102.0),
            make_tick(10, 0, 5, 100.0),
        ];

        let candles = minute_candles(&ticks);

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].open, 100.0);
        assert_eq!(candles[0].close, 105.0);
        assert_eq!(candles[1].bucket_start, at(10, 1, 0));
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let ticks = vec![
            make_tick(10, 0, 0, 50.0),
            make_tick(10, 0, 30, 40.0),
            make_tick(10, 0, 30, 45.0),
        ];

        let candles = minute_candles(&ticks);

        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].open, 50.0);
        assert_eq!(candles[0].close, 45.0);
        assert_eq!(candles[0].low, 40.0);
    }

    #[test]
    fn test_interleaved_instruments_share_minute() {
        let other = InstrumentToken::new(256_265).unwrap();
        let ticks = vec![
            make_tick(10, 0, 5, 100.0),
            Tick::new(other, at(10, 0, 10), 7.0),
            make_tick(10, 0, 20, 104.0),
        ];

        let candles = minute_candles(&ticks);

        assert_eq!(candles.len(), 2);
        let ours: Vec<_> = candles
            .iter()
            .filter(|c| c.instrument_token == token())
            .collect();
        assert_eq!(ours.len(), 1);
        assert_eq!(ours[0].tick_count, 2);
        assert_eq!((ours[0].open, ours[0].close), (100.0, 104.0));
        let theirs = candles.iter().find(|c| c.instrument_token == other).unwrap();
        assert_eq!(theirs.bucket_start, at(10, 0, 0));
        assert_eq!(theirs.tick_count, 1);
    }

    #[test]
    fn test_gaps_are_not_filled() {
        let ticks = vec![make_tick(10, 0, 1, 1.0), make_tick(10, 5, 1, 2.0)];

        let candles = minute_candles(&ticks);

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].bucket_start, at(10, 5, 0));
    }

    #[test]
    fn test_candle_bounds_hold() {
        let prices = [101.0, 99.5, 103.25, 100.0, 98.0, 104.0, 102.5];
        let ticks: Vec<_> = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                Tick::new(token(), at(9, 15, 0) + TimeDelta::seconds(i as i64 * 17), p)
            })
            .collect();

        for candle in minute_candles(&ticks) {
            assert!(candle.low <= candle.open.min(candle.close));
            assert!(candle.open.max(candle.close) <= candle.high);
            assert_eq!(candle.bucket_start, truncate_to_minute(candle.bucket_start));
        }
    }

    #[test]
    fn test_truncate_to_minute() {
        let dt = at(14, 37, 45) + TimeDelta::milliseconds(120);
        assert_eq!(truncate_to_minute(dt), at(14, 37, 0));
    }
}
