//! Error types shared by the extraction and question answering pipelines.
//!
//! The binary wraps these with `anyhow` for reporting.

use std::path::PathBuf;

/// Errors raised by catalogqa operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Uploaded bytes are not valid UTF-8 text.
    #[error("uploaded file is not valid UTF-8 text: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Fetching a document over HTTP failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The inference service rejected or failed the request.
    #[error("inference error: {0}")]
    Inference(String),

    /// Configuration is missing or invalid.
    #[error("config error: {message}")]
    Config { message: String },

    /// Only `.csv` files are accepted as uploads.
    #[error("unsupported upload {path:?}: expected a .csv file")]
    UnsupportedUpload { path: PathBuf },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a config error from any displayable message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
