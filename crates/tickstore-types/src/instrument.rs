//! Instrument identifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TickstoreError;

/// Integer identifier of a tradable instrument.
///
/// Tokens are always positive; `0` is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct InstrumentToken(u32);

impl InstrumentToken {
    /// Creates a token, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`TickstoreError::InvalidInstrument`] if `token` is zero.
    pub const fn new(token: u32) -> Result<Self, TickstoreError> {
        if token == 0 {
            return Err(TickstoreError::InvalidInstrument(token));
        }
        Ok(Self(token))
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for InstrumentToken {
    type Error = TickstoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InstrumentToken> for u32 {
    fn from(token: InstrumentToken) -> Self {
        token.0
    }
}

impl std::fmt::Display for InstrumentToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InstrumentToken {
    type Err = TickstoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .trim()
            .parse()
            .map_err(|_| TickstoreError::UnparsableInstrument(s.to_string()))?;
        Self::new(raw)
    }
}
