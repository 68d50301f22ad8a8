//! Error types for the statement loader.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading annual statements.
///
/// Any of these fails the whole load; callers never see a partial
/// [`StatementSet`](crate::StatementSet).
#[derive(Debug, Error)]
pub enum DataError {
    /// Empty or blank ticker.
    #[error("Please enter a valid ticker symbol")]
    InvalidTicker,

    /// A statement file is missing or the server refused it.
    #[error("Data not found for {ticker}")]
    NotFound {
        /// Normalized ticker.
        ticker: String,
    },

    /// Reading a local statement file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse {path}: {source}")]
    Json {
        /// Path of the statement relative to the data root.
        path: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Invalid data root configuration.
    #[error("Invalid data root: {0}")]
    InvalidRoot(String),
}
