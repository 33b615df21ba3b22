//! Spreadsheet loading via calamine.

use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sales_model::CellValue;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::SourceTable;

/// Reads the first worksheet of a workbook (xlsx, xlsm, xlsb, xls, ods).
///
/// The first row is the header row; every following row is data.
pub fn read_workbook_table(path: &Path) -> Result<SourceTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let sheet_names = workbook.sheet_names().to_vec();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(IngestError::NoSheets {
            path: path.to_path_buf(),
        });
    };
    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: format!("sheet '{sheet_name}': {e}"),
        })?;
    let (height, width) = range.get_size();
    debug!(
        sheet = %sheet_name,
        sheet_count = sheet_names.len(),
        height,
        width,
        "worksheet loaded"
    );

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(header_text).collect();
    let data = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();
    Ok(SourceTable::new(headers, data))
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        other => other.to_string(),
    }
}

/// Maps a calamine cell onto [`CellValue`].
///
/// Error cells (`#N/A`, `#VALUE!`, ...) are treated as blanks.
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(value) => CellValue::text(value.as_str()),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => match cell.as_datetime() {
            Some(datetime) => CellValue::DateTime(datetime),
            None => CellValue::Float(value.as_f64()),
        },
        Data::DateTimeIso(value) => match parse_iso_datetime(value) {
            Some(datetime) => CellValue::DateTime(datetime),
            None => CellValue::text(value.as_str()),
        },
        Data::DurationIso(value) => CellValue::text(value.as_str()),
    }
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
