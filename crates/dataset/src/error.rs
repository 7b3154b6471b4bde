use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("input file not found: {0}")]
    NotFound(String),

    #[error("input CSV file is empty")]
    EmptyFile,

    #[error("invalid CSV format: {0}")]
    Malformed(#[from] csv::Error),

    #[error("CSV file contains no data rows")]
    NoRows,

    #[error("missing required column: close. found: {found:?}")]
    MissingColumn { found: Vec<String> },
}
