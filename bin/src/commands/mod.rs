//! CLI command implementations.

pub(crate) mod candles;
pub(crate) mod window;
