use crate::error::ConfigError;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// The validated run configuration.
///
/// Immutable once constructed; every downstream stage consumes it
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed for the run's random generator.
    pub seed: i64,
    /// Count of trailing rows used for the moving statistic. Always >= 1.
    pub window: usize,
    /// Caller-supplied version tag, echoed into the output document.
    pub version: String,
}

const REQUIRED_KEYS: [&str; 3] = ["seed", "window", "version"];

/// Loads and validates the run configuration from a YAML file.
///
/// This function is the primary entry point for this crate. Unknown keys in
/// the document are ignored; the required keys are checked strictly (a YAML
/// string `"42"` is not an integer, a float is not an integer, a boolean is
/// not an integer).
pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let raw = fs::read_to_string(path)?;
    let doc: Value = serde_yaml::from_str(&raw).map_err(|_| ConfigError::Malformed)?;
    let map = doc.as_mapping().ok_or(ConfigError::Malformed)?;
    if map.is_empty() {
        return Err(ConfigError::Malformed);
    }

    let config = validate(map)?;

    tracing::info!(
        "Config loaded: seed={}, window={}, version={}",
        config.seed,
        config.window,
        config.version
    );
    Ok(config)
}

fn validate(map: &Mapping) -> Result<RunConfig, ConfigError> {
    for key in REQUIRED_KEYS {
        if map.get(key).is_none() {
            return Err(ConfigError::MissingKey(key));
        }
    }

    let seed = map
        .get("seed")
        .and_then(Value::as_i64)
        .ok_or(ConfigError::SeedType)?;

    let window = map
        .get("window")
        .and_then(Value::as_i64)
        .filter(|w| *w >= 1)
        .and_then(|w| usize::try_from(w).ok())
        .ok_or(ConfigError::WindowInvalid)?;

    let version = map
        .get("version")
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::VersionType)?
        .to_string();

    Ok(RunConfig {
        seed,
        window,
        version,
    })
}
