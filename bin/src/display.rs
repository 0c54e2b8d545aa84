//! Display utilities and output formatting for the tickstore CLI.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tickstore_lib::prelude::*;
use tickstore_lib::STORE_TIME_FORMAT;

/// Parse a command-line timestamp (`YYYY-MM-DD HH:MM:SS`).
pub(crate) fn parse_timestamp(label: &str, value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), STORE_TIME_FORMAT)
        .with_context(|| format!("Invalid {label} time: {value} (expected YYYY-MM-DD HH:MM:SS)"))
}

/// Parse a command-line instrument token.
pub(crate) fn parse_instrument(value: &str) -> Result<InstrumentToken> {
    value
        .parse::<InstrumentToken>()
        .with_context(|| format!("Invalid instrument token: {value}"))
}

/// Write candles to a file, or to stdout when no path is given.
pub(crate) fn write_candles(candles: &[Candle], output: Option<&Path>, format: OutputFormat) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_with(candles, BufWriter::new(file), format)
        }
        None => write_with(candles, BufWriter::new(std::io::stdout()), format),
    }
}

fn write_with<W: Write + Send>(candles: &[Candle], writer: W, format: OutputFormat) -> Result<()> {
    format.write_candles(candles, writer)?;
    Ok(())
}
