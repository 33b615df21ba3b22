//! CSV loading.

use std::path::Path;

use csv::ReaderBuilder;
use sales_model::CellValue;

use crate::error::{IngestError, Result};
use crate::table::SourceTable;

/// Reads a CSV export. The first record with any content is the header.
///
/// All cells are read as text; empty cells become [`CellValue::Empty`].
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        match headers {
            None => headers = Some(record.iter().map(str::to_string).collect()),
            Some(_) => rows.push(record.iter().map(CellValue::text).collect()),
        }
    }
    let Some(headers) = headers else {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    };
    Ok(SourceTable::new(headers, rows))
}
