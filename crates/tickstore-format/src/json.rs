//! JSON output format.

use serde::Serialize;
use std::io::Write;
use tickstore_aggregate::Candle;
use tickstore_types::format_store_time;

use crate::{FormatError, Formatter};

/// Layout of the JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One compact JSON array.
    #[default]
    Array,
    /// One indented JSON array.
    Pretty,
    /// One compact object per line (NDJSON).
    Ndjson,
}

/// JSON formatter.
///
/// Bucket starts are written in the store's `YYYY-MM-DD HH:MM:SS` form, the
/// same text the CSV output uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    style: JsonStyle,
}

/// Serialized shape of one candle.
#[derive(Serialize)]
struct CandleRecord {
    instrument_token: u32,
    bucket_start: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    tick_count: u64,
}

impl From<&Candle> for CandleRecord {
    fn from(candle: &Candle) -> Self {
        Self {
            instrument_token: candle.instrument_token.get(),
            bucket_start: format_store_time(candle.bucket_start),
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            tick_count: candle.tick_count,
        }
    }
}

impl JsonFormatter {
    /// Creates a formatter writing a compact array.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_style(JsonStyle::Array)
    }

    /// Creates a formatter writing one object per line.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self::with_style(JsonStyle::Ndjson)
    }

    /// Creates a formatter with the given layout.
    #[must_use]
    pub const fn with_style(style: JsonStyle) -> Self {
        Self { style }
    }

    /// Returns the layout.
    #[must_use]
    pub const fn style(&self) -> JsonStyle {
        self.style
    }
}

impl Formatter for JsonFormatter {
    fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let records = candles.iter().map(CandleRecord::from);

        match self.style {
            JsonStyle::Ndjson => {
                for record in records {
                    serde_json::to_writer(&mut writer, &record)?;
                    writeln!(writer)?;
                }
            }
            JsonStyle::Array | JsonStyle::Pretty => {
                let records: Vec<_> = records.collect();
                if self.style == JsonStyle::Pretty {
                    serde_json::to_writer_pretty(&mut writer, &records)?;
                } else {
                    serde_json::to_writer(&mut writer, &records)?;
                }
                writeln!(writer)?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Ndjson => "ndjson",
            JsonStyle::Array | JsonStyle::Pretty => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tickstore_types::InstrumentToken;

    fn candle(minute: u32) -> Candle {
        let bucket_start = NaiveDate::from_ymd_opt(2024, 4, 8)
            .unwrap()
            .and_hms_opt(19, minute, 0)
            .unwrap();
        let token = InstrumentToken::new(109_122_823).unwrap();
        Candle::new(token, bucket_start, 100.0, 105.5, 99.25, 102.0, 12)
    }

    fn render(formatter: JsonFormatter, candles: &[Candle]) -> String {
        let mut out = Vec::new();
        formatter.write_candles(candles, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_array_uses_store_time() {
        let out = render(JsonFormatter::new(), &[candle(30)]);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["instrument_token"], 109_122_823);
        assert_eq!(parsed[0]["bucket_start"], "2024-04-08 19:30:00");
        assert_eq!(parsed[0]["high"], 105.5);
        assert_eq!(parsed[0]["tick_count"], 12);
    }

    #[test]
    fn test_ndjson_line_per_candle() {
        let formatter = JsonFormatter::ndjson();
        let out = render(formatter, &[candle(30), candle(31)]);

        let minutes: Vec<String> = out
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["bucket_start"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(minutes, ["2024-04-08 19:30:00", "2024-04-08 19:31:00"]);
        assert_eq!(formatter.extension(), "ndjson");
    }

    #[test]
    fn test_pretty_is_indented_array() {
        let formatter = JsonFormatter::with_style(JsonStyle::Pretty);
        let out = render(formatter, &[candle(30)]);

        assert!(out.starts_with("[\n  {"));
        assert_eq!(formatter.extension(), "json");
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(render(JsonFormatter::new(), &[]), "[]\n");
        assert_eq!(render(JsonFormatter::ndjson(), &[]), "");
    }
}
