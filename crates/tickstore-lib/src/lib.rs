//! Rust library for fetching OHLC candles from a ClickHouse tick table.
//!
//! This is a facade crate that re-exports functionality from the tickstore
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use tickstore_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ClickHouseStore::new(StoreConfig::default());
//!     let fetcher = CandleFetcher::new(store);
//!
//!     let start = chrono::NaiveDate::from_ymd_opt(2024, 4, 8)
//!         .unwrap()
//!         .and_hms_opt(19, 30, 0)
//!         .unwrap();
//!     let range = TimeRange::minutes(start, 3)?;
//!     let token = InstrumentToken::new(109_122_823)?;
//!
//!     for candle in &fetcher.fetch_candles(token, &range).await? {
//!         println!("{} o={} c={}", candle.bucket_start, candle.open, candle.close);
//!     }
//!
//!     let window = fetcher.fetch_fixed_window_candle(token, &range).await?;
//!     println!("window high={} low={}", window.high, window.low);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickstore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tickstore_types::*;

// Re-export aggregation
pub use tickstore_aggregate::{
    Candle, CandleSeries, MinuteAggregator, dedup_latest, minute_candles, truncate_to_minute,
    window_candle,
};

// Re-export store access
#[cfg(feature = "query")]
pub use tickstore_query::{
    CandleFetcher, ClickHouseStore, MemoryStore, MinuteCandleRow, RangeQuery, RowStream,
    StoreConfig, TickStore, WindowCandleRow, sql,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use tickstore_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};

/// Prelude module for convenient imports.
///
/// ```
/// use tickstore_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickstore_types::{
        InstrumentToken, Result, Tick, TickstoreError, TimeRange, TimeRangeError,
    };

    pub use tickstore_aggregate::{Candle, CandleSeries};

    #[cfg(feature = "query")]
    pub use tickstore_query::{CandleFetcher, ClickHouseStore, MemoryStore, StoreConfig, TickStore};

    #[cfg(feature = "format")]
    pub use tickstore_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
