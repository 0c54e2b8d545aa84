//! Window command implementation.
//!
//! Fetches a single candle spanning the whole requested range. The width is
//! whatever the caller asks for, either an explicit end or a minute count.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tickstore_lib::prelude::*;
use tracing::info;

use crate::display::{parse_instrument, parse_timestamp, write_candles};

/// Fetch a single candle covering the requested window.
pub(crate) async fn window(
    config: StoreConfig,
    instrument: &str,
    start: &str,
    end: Option<&str>,
    minutes: Option<u32>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let token = parse_instrument(instrument)?;
    let start = parse_timestamp("start", start)?;
    let range = match (end, minutes) {
        (Some(end), _) => TimeRange::new(start, parse_timestamp("end", end)?)?,
        (None, Some(minutes)) => TimeRange::minutes(start, minutes)?,
        (None, None) => bail!("Either --end or --minutes is required"),
    };

    let fetcher = CandleFetcher::new(ClickHouseStore::new(config));
    let candle = fetcher
        .fetch_fixed_window_candle(token, &range)
        .await
        .with_context(|| format!("Failed to fetch window candle for {token} ({range})"))?;

    if candle.is_empty() {
        info!(instrument_token = %token, %range, "no ticks in window");
    }
    write_candles(&[candle], output.as_deref(), format)
}
