//! # Signal Derivation
//!
//! The windowed statistic and the binary indicator derived from it. This is
//! a pure logic crate: both operations are total functions of their inputs
//! with no I/O, no shared state, and no failure modes.

pub mod generator;
pub mod rolling;

// Re-export the key components to create a clean, public-facing API.
pub use generator::generate_signals;
pub use rolling::rolling_mean;
