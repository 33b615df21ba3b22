//! In-memory source table and projection onto the field map.

use sales_model::{CellValue, FieldMap, InputRow, TargetField};

use crate::error::SchemaError;

/// A fully loaded source table: one header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Trims a header, strips a byte order mark, and collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

impl SourceTable {
    /// Builds a table, normalizing every header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let headers = headers.iter().map(|header| normalize_header(header)).collect();
        Self { headers, rows }
    }

    /// Index of the first column whose header matches exactly.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|candidate| candidate == header)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Selects the mapped columns and renames them to target fields.
    ///
    /// Column order in the table is irrelevant. Every missing column is
    /// reported at once. Rows shorter than the header leave trailing
    /// fields empty.
    pub fn project(&self, map: &FieldMap) -> Result<Vec<InputRow>, SchemaError> {
        let mut columns: Vec<(TargetField, usize)> = Vec::with_capacity(map.len());
        let mut missing = Vec::new();
        for entry in map.iter() {
            match self.column_index(entry.source) {
                Some(idx) => columns.push((entry.target, idx)),
                None => missing.push(entry.source.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(SchemaError { missing });
        }
        let rows = self
            .rows
            .iter()
            .map(|cells| {
                let mut row = InputRow::new();
                for &(field, idx) in &columns {
                    if let Some(cell) = cells.get(idx) {
                        row.set(field, cell.clone());
                    }
                }
                row
            })
            .collect();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_headers() {
        assert_eq!(normalize_header("\u{feff} العميل  -   الكود "), "العميل - الكود");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn project_reports_all_missing_columns() {
        let table = SourceTable::new(vec!["مسلسل".to_string()], Vec::new());
        let err = table
            .project(&FieldMap::sales_export())
            .expect_err("columns missing");
        assert_eq!(err.missing.len(), TargetField::COUNT - 1);
        assert_eq!(err.missing[0], "الرقم");
    }
}
