//! # Run Analytics
//!
//! Reduces the signal series plus run metadata into the single summary
//! record the pipeline emits. It acts as the final, stateless calculation
//! step of the run.
//!
//! ## Architectural Principles
//!
//! - **Stateless Calculation:** the `MetricsAggregator` takes the series
//!   and metadata as input and produces a `MetricsRecord` as output.
//!   Nothing is cached between runs, which keeps it trivially testable.
//! - **Pinned rounding:** the metric value is rounded half away from zero
//!   to 4 decimal places, in exact decimal arithmetic.
//!
//! ## Public API
//!
//! - `MetricsAggregator`: the calculator.
//! - `MetricsRecord` / `ErrorRecord`: the two output document shapes.

pub mod aggregator;
pub mod records;

// Re-export the key components to create a clean, public-facing API.
pub use aggregator::MetricsAggregator;
pub use records::{ErrorRecord, MetricsRecord};
