//! Candle queries over a ClickHouse tick table.
//!
//! This crate provides the query pipeline:
//!
//! - [`sql`] - The two aggregation statements
//! - [`StoreConfig`] - Connection settings for the store
//! - [`TickStore`] - Store seam returning result rows as streams
//! - [`ClickHouseStore`] - ClickHouse-backed store
//! - [`MemoryStore`] - In-memory store with identical semantics
//! - [`CandleFetcher`] - Fixed-minute series and fixed-window candle queries

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickstore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod fetcher;
mod memory;
mod rows;
mod store;
pub mod sql;

pub use client::ClickHouseStore;
pub use config::StoreConfig;
pub use fetcher::CandleFetcher;
pub use memory::MemoryStore;
pub use rows::{MinuteCandleRow, WindowCandleRow};
pub use store::{RangeQuery, RowStream, TickStore};
