use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Baby Stat pipeline.
#[derive(Error, Debug)]
pub enum StatError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be read or deserialized.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column the pipeline requires.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A timestamp cell did not match the fixed export format.
    #[error("Invalid timestamp \"{value}\" in row {row}")]
    TimestampParse { value: String, row: usize },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the baby-stat crates.
pub type Result<T> = std::result::Result<T, StatError>;
