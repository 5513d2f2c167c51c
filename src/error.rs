use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No input file given. Pass --input or set `input` in the config file.")]
    MissingInput,

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Engine(#[from] EngineError),
}

/// Errors produced by the aggregation engine and its ingestion boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid record collection: {reason}")]
    InvalidInput { reason: String },

    #[error("Invalid purchase date \"{input}\" (expected DD/MM/YYYY or DD-MM-YYYY)")]
    InvalidDate { input: String },

    #[error("Invalid ranking size {n} (expected {min}..={max})")]
    InvalidRank { n: i64, min: usize, max: usize },

    #[error("Aggregation cancelled")]
    Cancelled,
}

impl EngineError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            reason: reason.into(),
        }
    }
}
