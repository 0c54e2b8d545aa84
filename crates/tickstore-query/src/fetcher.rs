//! Candle queries against an injected tick store.

use futures::TryStreamExt;
use tickstore_aggregate::{Candle, CandleSeries};
use tickstore_types::{InstrumentToken, Result, TickstoreError, TimeRange};
use tracing::{debug, trace, warn};

use crate::store::{RangeQuery, TickStore};

/// Fetches candles from a tick store.
///
/// Each call issues one query, consumes its rows to completion and keeps no
/// state between calls. Failures are returned as-is; nothing is retried.
#[derive(Debug, Clone)]
pub struct CandleFetcher<S> {
    store: S,
}

impl<S: TickStore> CandleFetcher<S> {
    /// Creates a fetcher over the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Fetches one candle per non-empty calendar minute in `range`.
    ///
    /// Both range ends are inclusive. Minutes without ticks are absent from
    /// the series; an empty range gives an empty series.
    ///
    /// # Errors
    ///
    /// Returns a query error if the store fails, or a scan error if a row
    /// cannot be decoded or its minute does not follow the previous row's.
    /// No partial series is returned on error.
    pub async fn fetch_candles(
        &self,
        instrument_token: InstrumentToken,
        range: &TimeRange,
    ) -> Result<CandleSeries> {
        let query = RangeQuery::new(instrument_token, *range);
        debug!(%instrument_token, %range, "fetching minute candles");

        let mut rows = self.store.minute_candles(&query).await?;
        let mut series = CandleSeries::new(instrument_token);
        while let Some(row) = rows.try_next().await? {
            let candle = row.into_candle()?;
            if let Some(last) = series.last()
                && candle.bucket_start <= last.bucket_start
            {
                warn!(
                    previous = %last.bucket_start,
                    bucket = %candle.bucket_start,
                    "minute rows out of order"
                );
                return Err(TickstoreError::Scan(format!(
                    "minute bucket {} does not follow {}",
                    candle.bucket_start, last.bucket_start
                )));
            }
            series.push(candle);
        }

        trace!(%instrument_token, candles = series.len(), "minute candles fetched");
        Ok(series)
    }

    /// Fetches a single candle covering all of `range`.
    ///
    /// Only the latest version of each tick contributes. The candle is
    /// stamped with `range.start()` whatever the time of the first tick. A
    /// range without ticks gives the zero-valued candle, not an error.
    ///
    /// # Errors
    ///
    /// Returns a query error if the store fails, or a scan error if the row
    /// cannot be decoded.
    pub async fn fetch_fixed_window_candle(
        &self,
        instrument_token: InstrumentToken,
        range: &TimeRange,
    ) -> Result<Candle> {
        let query = RangeQuery::new(instrument_token, *range);
        debug!(%instrument_token, %range, "fetching window candle");

        let first = {
            let mut rows = self.store.window_candle(&query).await?;
            rows.try_next().await?
        };

        let candle = first.map_or_else(
            || Candle::empty(instrument_token, range.start()),
            |row| row.into_candle(instrument_token, range.start()),
        );
        trace!(%instrument_token, ticks = candle.tick_count, "window candle fetched");
        Ok(candle)
    }
}
