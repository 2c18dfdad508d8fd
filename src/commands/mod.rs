//! Sub-command implementations, one module per `cli::Commands` variant.

pub mod migrate;
pub mod serve;
