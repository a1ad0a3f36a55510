use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Park Review Explorer.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The dataset file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document or row could not be parsed.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A summary could not be serialized to JSON.
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An export file could not be written.
    #[error("Failed to write export file {path}: {source}")]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error originating from the terminal / chart layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the explorer crates.
pub type Result<T> = std::result::Result<T, ExplorerError>;
