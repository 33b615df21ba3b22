//! Source file checks and format dispatch.

use std::path::Path;

use tracing::{debug, info};

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};
use crate::table::SourceTable;
use crate::workbook::read_workbook_table;

/// Default maximum input size (50 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Options controlling how the source file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Files larger than this are rejected before parsing.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Tabular formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Any spreadsheet calamine can open.
    Workbook,
    Csv,
}

impl SourceFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            "csv" => Ok(SourceFormat::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Check file existence and size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(metadata.len())
}

/// Loads the whole source table into memory.
pub fn load_source_table(path: &Path, options: &IngestOptions) -> Result<SourceTable> {
    let size = check_file_size_with_limit(path, options.max_file_size)?;
    let format = SourceFormat::from_path(path)?;
    debug!(path = %path.display(), size_bytes = size, ?format, "reading source file");
    let table = match format {
        SourceFormat::Workbook => read_workbook_table(path)?,
        SourceFormat::Csv => read_csv_table(path)?,
    };
    info!(
        path = %path.display(),
        row_count = table.row_count(),
        column_count = table.headers.len(),
        "source table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_formats_by_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("export result.XLSX")).ok(),
            Some(SourceFormat::Workbook)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("data.csv")).ok(),
            Some(SourceFormat::Csv)
        );
        let err = SourceFormat::from_path(Path::new("notes.txt")).expect_err("unsupported");
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { ref extension, .. } if extension == "txt"
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let path = PathBuf::from("/definitely/not/here.xlsx");
        let err = check_file_size_with_limit(&path, DEFAULT_MAX_FILE_SIZE).expect_err("missing");
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
