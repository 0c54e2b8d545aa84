//! Core types for the tickstore candle query library.
//!
//! This crate provides the fundamental data structures used throughout tickstore:
//!
//! - [`Tick`] - A single trade price observed for an instrument
//! - [`InstrumentToken`] - Positive integer identifier of a tradable instrument
//! - [`TimeRange`] - Inclusive query range with second precision
//! - [`TickstoreError`] - Query and scan failures surfaced to callers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickstore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod instrument;
mod store_time;
mod tick;
mod time_range;

pub use error::{Result, TickstoreError, TimeRangeError};
pub use instrument::InstrumentToken;
pub use store_time::{STORE_TIME_FORMAT, format_store_time, parse_store_time, truncate_to_second};
pub use tick::Tick;
pub use time_range::TimeRange;
