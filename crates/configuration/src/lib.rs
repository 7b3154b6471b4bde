//! # Run Configuration
//!
//! Parses and validates the run-configuration document, and owns the
//! logging bootstrap for the process.
//!
//! ## Architectural Principles
//!
//! - **Strict schema:** every required key is checked for presence and for
//!   its exact type; YAML's own coercions are never relied upon. A document
//!   that validates here is immutable for the rest of the run.
//! - **Forward-compatible:** unknown keys are ignored, so newer documents
//!   keep working against older binaries.
//!
//! ## Public API
//!
//! - `load_config`: the primary entry point, file path in, `RunConfig` out.
//! - `RunConfig`: the validated, read-only configuration.
//! - `ConfigError`: the specific failure modes of validation.
//! - `logging::init`: dual-sink (file + stdout) log bootstrap.

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{RunConfig, load_config};
