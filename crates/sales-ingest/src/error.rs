//! Error types for sales export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file metadata or contents.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Extension is not a supported tabular format.
    #[error("unsupported file format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// The workbook could not be opened or a sheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// The workbook contains no worksheet.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The table has no header row.
    #[error("source table is empty: {path}")]
    EmptyTable { path: PathBuf },
}

/// Expected source columns are absent from the table.
#[derive(Debug, Error)]
#[error("missing {} expected column(s): {}", .missing.len(), .missing.join(", "))]
pub struct SchemaError {
    /// Source headers that were not found, in field map order.
    pub missing: Vec<String>,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
