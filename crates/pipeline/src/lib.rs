//! # Pipeline Orchestration
//!
//! Drives one run end to end: validate config, seed the generator, load the
//! table, compute the statistic and signals, aggregate, and write exactly
//! one output document — success or failure.
//!
//! ## Architectural Principles
//!
//! - **Fail loud, always emit:** every stage error is caught exactly once,
//!   in `PipelineRunner::run`, stringified into an `ErrorRecord`, logged at
//!   error severity, and written to the output path. No stage recovers from
//!   its own errors and nothing retries.
//! - **Isolated runs:** the runner owns its random generator and all paths;
//!   two concurrent runners share nothing.

pub mod artifact;
pub mod error;
pub mod runner;

// Re-export the key components to create a clean, public-facing API.
pub use error::PipelineError;
pub use runner::PipelineRunner;
