use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading files from the config and data directories.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was read but does not hold the expected JSON.
    #[error("Malformed JSON in {}: {source}", path.display())]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A specialized Result type for core file operations.
pub type Result<T> = std::result::Result<T, CoreError>;
