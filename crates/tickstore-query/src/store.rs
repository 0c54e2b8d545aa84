//! Store abstraction returning aggregation results as row streams.

use async_trait::async_trait;
use futures::stream::BoxStream;
use std::sync::Arc;
use tickstore_types::{InstrumentToken, Result, TimeRange};

use crate::{MinuteCandleRow, WindowCandleRow};

/// Result rows in store order.
///
/// The stream owns the underlying result cursor. Dropping the stream, at any
/// point, releases the cursor.
pub type RowStream<'a, R> = BoxStream<'a, Result<R>>;

/// Parameters shared by both aggregation statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuery {
    /// Instrument to aggregate.
    pub instrument_token: InstrumentToken,
    /// Inclusive tick time range.
    pub range: TimeRange,
}

impl RangeQuery {
    /// Creates a new query.
    #[must_use]
    pub const fn new(instrument_token: InstrumentToken, range: TimeRange) -> Self {
        Self {
            instrument_token,
            range,
        }
    }
}

/// A time-series store able to run the two candle aggregations.
///
/// Implementations issue exactly one query per call and never retry.
#[async_trait]
pub trait TickStore: Send + Sync {
    /// Runs the calendar-minute aggregation.
    ///
    /// Rows arrive ascending by minute.
    ///
    /// # Errors
    ///
    /// Returns a query error if the store cannot be reached or rejects the
    /// statement; row errors surface through the stream.
    async fn minute_candles(&self, query: &RangeQuery) -> Result<RowStream<'_, MinuteCandleRow>>;

    /// Runs the single-window aggregation over latest-version ticks.
    ///
    /// # Errors
    ///
    /// Returns a query error if the store cannot be reached or rejects the
    /// statement; row errors surface through the stream.
    async fn window_candle(&self, query: &RangeQuery) -> Result<RowStream<'_, WindowCandleRow>>;
}

#[async_trait]
impl<S: TickStore + ?Sized> TickStore for Arc<S> {
    async fn minute_candles(&self, query: &RangeQuery) -> Result<RowStream<'_, MinuteCandleRow>> {
        (**self).minute_candles(query).await
    }

    async fn window_candle(&self, query: &RangeQuery) -> Result<RowStream<'_, WindowCandleRow>> {
        (**self).window_candle(query).await
    }
}
