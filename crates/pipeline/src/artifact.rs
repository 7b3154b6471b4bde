use crate::error::PipelineError;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Writes the run's single output document as 2-space-indented JSON.
///
/// This is the terminal action of a run. A failure here is not mapped to a
/// further document type; the caller propagates it as a fatal error.
pub fn write<T: Serialize>(path: &Path, document: &T) -> Result<(), PipelineError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, document)?;
    Ok(())
}
