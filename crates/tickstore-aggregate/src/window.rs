//! Single-window aggregation and latest-write deduplication.

use chrono::NaiveDateTime;
use std::collections::HashMap;
use tickstore_types::Tick;

use crate::Candle;
use crate::aggregator::CandleBuilder;

/// Folds every tick into one candle stamped with `bucket_start`.
///
/// The bucket start is taken as given, whatever the timestamp of the first
/// tick. Returns `None` when there are no ticks.
#[must_use]
pub fn window_candle(ticks: &[Tick], bucket_start: NaiveDateTime) -> Option<Candle> {
    let mut ordered = ticks.to_vec();
    ordered.sort_by_key(|tick| tick.timestamp);

    let (first, rest) = ordered.split_first()?;
    let mut builder = CandleBuilder::new(bucket_start, first);
    for tick in rest {
        builder.update(tick);
    }
    Some(builder.finish())
}

/// Keeps only the last-written tick of each `(instrument_token, timestamp)`.
///
/// `ticks` is in write order. Survivors keep the position of their final
/// write.
#[must_use]
pub fn dedup_latest(ticks: &[Tick]) -> Vec<Tick> {
    let mut last_write = HashMap::with_capacity(ticks.len());
    for (index, tick) in ticks.iter().enumerate() {
        last_write.insert(tick.identity(), index);
    }

    ticks
        .iter()
        .enumerate()
        .filter(|(index, tick)| last_write.get(&tick.identity()) == Some(index))
        .map(|(_, tick)| *tick)
        .collect()
}
