use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No BUILD_TIME declaration found in {}", .path.display())]
    MissingDeclaration { path: PathBuf },

    #[error("Invalid timestamp \"{input}\": {source}")]
    InvalidTimestamp {
        input: String,
        source: chrono::ParseError,
    },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
