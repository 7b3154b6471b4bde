//! # Price Table Loading
//!
//! Decodes an input file into the in-memory price table the pipeline runs
//! on. The `TableLoader` trait is the seam: the runner only requires that a
//! decoder produce ordered rows with a `close` value, so any format that
//! can satisfy that contract can be swapped in behind it.

pub mod error;
pub mod loader;

// Re-export the key components to create a clean, public-facing API.
pub use error::DataError;
pub use loader::{CsvTableLoader, TableLoader};
