//! Tick data representation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::InstrumentToken;

/// A single observed trade price.
///
/// Ticks are written by an external feed and are read-only here. Several ticks
/// may share a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Instrument the price belongs to.
    pub instrument_token: InstrumentToken,
    /// Time the price was observed (naive, store-local).
    pub timestamp: NaiveDateTime,
    /// Traded price.
    pub price: f64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(instrument_token: InstrumentToken, timestamp: NaiveDateTime, price: f64) -> Self {
        Self {
            instrument_token,
            timestamp,
            price,
        }
    }

    /// Returns the identity under which later writes replace earlier ones.
    #[must_use]
    pub const fn identity(&self) -> (InstrumentToken, NaiveDateTime) {
        (self.instrument_token, self.timestamp)
    }
}
