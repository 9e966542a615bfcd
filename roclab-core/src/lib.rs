//! RocLab Core — streaming rate-of-change momentum oscillator.
//!
//! This crate contains:
//! - The sliding ROC calculator, backed by a bounded FIFO window, with a
//!   committing `advance` step and a side-effect-free `probe` step
//! - The `StreamingIndicator` trait that external feeds and consumers use
//! - TOML configuration and the crate error type

pub mod components;
pub mod config;
pub mod error;
pub mod indicators;
mod window;

pub use components::StreamingIndicator;
pub use config::RocConfig;
pub use error::RocError;
pub use indicators::{as_percent, RocCalculator, DEFAULT_PERIOD};
