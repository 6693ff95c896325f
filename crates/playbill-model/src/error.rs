//! Error types shared by the playbill crates.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Any of these aborts the run before output is written.
#[derive(Debug, Error)]
pub enum PlaybillError {
    /// Input CSV file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input CSV file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV has no header row, or a header and no data rows.
    #[error("CSV needs a header row and at least one data row, found {found} row(s)")]
    NotEnoughRows { found: usize },

    /// The header row lacks one or more required columns.
    #[error("missing required column(s): {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// The output document could not be written.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlaybillError>;
