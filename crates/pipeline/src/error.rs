use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] configuration::ConfigError),

    #[error("Data error: {0}")]
    Data(#[from] dataset::DataError),

    #[error("Runtime error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Serialization(#[from] serde_json::Error),
}
