use thiserror::Error;

use crate::regression::RegressionError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("No table found in the fetched page")]
    NoTable,

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("No museums left after population lookup and outlier filtering")]
    EmptyDataset,

    #[error("Reference data error: {0}")]
    ReferenceData(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid population value: '{0}'")]
    InvalidPopulation(String),

    #[error(transparent)]
    Regression(#[from] RegressionError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
