//! Candles command implementation.
//!
//! Fetches one-minute candles over an inclusive range and writes them out.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tickstore_lib::prelude::*;
use tracing::info;

use crate::display::{parse_instrument, parse_timestamp, write_candles};

/// Fetch one-minute candles for an instrument.
pub(crate) async fn candles(
    config: StoreConfig,
    instrument: &str,
    start: &str,
    end: &str,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let token = parse_instrument(instrument)?;
    let range = TimeRange::new(parse_timestamp("start", start)?, parse_timestamp("end", end)?)?;

    let fetcher = CandleFetcher::new(ClickHouseStore::new(config));
    let series = fetcher
        .fetch_candles(token, &range)
        .await
        .with_context(|| format!("Failed to fetch candles for {token} ({range})"))?;

    info!(instrument_token = %token, candles = series.len(), "fetched minute candles");
    write_candles(series.as_slice(), output.as_deref(), format)
}
