//! Startup configuration.
//!
//! `Config` is read from the environment once; `constants` holds the
//! fixed limits and defaults it falls back to.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
