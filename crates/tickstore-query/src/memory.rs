//! In-memory tick store.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tickstore_aggregate::{dedup_latest, minute_candles, window_candle};
use tickstore_types::{Result, Tick};
use tracing::trace;

use crate::store::{RangeQuery, RowStream, TickStore};
use crate::{MinuteCandleRow, WindowCandleRow};

/// Tick store holding its table in memory.
///
/// Ticks are kept in write order, which doubles as their version: a later
/// write of the same `(instrument_token, timestamp)` replaces an earlier one
/// for the window aggregation, as a replacing merge would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    ticks: Vec<Tick>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { ticks: Vec::new() }
    }

    /// Appends a tick.
    pub fn insert(&mut self, tick: Tick) {
        self.ticks.push(tick);
    }

    /// Returns the number of stored ticks, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Returns true if no ticks are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Ticks matching the query filter, in write order.
    fn select(&self, query: &RangeQuery) -> Vec<Tick> {
        self.ticks
            .iter()
            .filter(|tick| {
                tick.instrument_token == query.instrument_token
                    && query.range.contains(tick.timestamp)
            })
            .copied()
            .collect()
    }
}

impl Extend<Tick> for MemoryStore {
    fn extend<I: IntoIterator<Item = Tick>>(&mut self, iter: I) {
        self.ticks.extend(iter);
    }
}

impl FromIterator<Tick> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Tick>>(iter: I) -> Self {
        Self {
            ticks: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl TickStore for MemoryStore {
    async fn minute_candles(&self, query: &RangeQuery) -> Result<RowStream<'_, MinuteCandleRow>> {
        let selected = self.select(query);
        trace!(matched = selected.len(), "minute aggregation");

        let rows: Vec<_> = minute_candles(&selected)
            .iter()
            .map(MinuteCandleRow::from)
            .collect();
        Ok(stream::iter(rows.into_iter().map(Ok)).boxed())
    }

    async fn window_candle(&self, query: &RangeQuery) -> Result<RowStream<'_, WindowCandleRow>> {
        let selected = dedup_latest(&self.select(query));
        trace!(matched = selected.len(), "window aggregation");

        // An aggregate without grouping yields one row even for no input.
        let row = window_candle(&selected, query.range.start())
            .as_ref()
            .map(WindowCandleRow::from)
            .unwrap_or_default();
        Ok(stream::iter([Ok(row)]).boxed())
    }
}
