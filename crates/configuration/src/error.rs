use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    NotFound(String),

    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: empty or malformed")]
    Malformed,

    #[error("missing required config key: {0}")]
    MissingKey(&'static str),

    #[error("seed must be an integer")]
    SeedType,

    #[error("seed {0} is outside the range accepted by the random generator")]
    SeedOutOfRange(i64),

    #[error("window must be a positive integer")]
    WindowInvalid,

    #[error("version must be a non-empty string")]
    VersionType,
}
