//! OHLC aggregation for the tickstore candle query library.
//!
//! This crate provides the candle model and the reference aggregation rules:
//!
//! - [`Candle`] - OHLC summary of one bucket
//! - [`CandleSeries`] - Ascending candles for one instrument
//! - [`MinuteAggregator`] - Streaming calendar-minute aggregator
//! - [`minute_candles`], [`window_candle`], [`dedup_latest`] - Batch helpers
//!
//! `open` and `close` follow timestamp order, never input order: every batch
//! helper sorts before aggregating.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickstore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod candle;
mod window;

pub use aggregator::{MinuteAggregator, minute_candles, truncate_to_minute};
pub use candle::{Candle, CandleSeries};
pub use window::{dedup_latest, window_candle};
