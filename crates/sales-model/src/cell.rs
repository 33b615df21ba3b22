//! Raw cell values.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell as read from the source table.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Spreadsheet cell carrying a native date/time value.
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Builds a text cell, mapping the empty string to [`CellValue::Empty`].
    ///
    /// Whitespace-only strings are values and are kept verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    /// True when the cell carries no value.
    ///
    /// NaN floats count as missing since spreadsheets use them for blanks.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(value) => value.is_empty(),
            CellValue::Float(value) => value.is_nan(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Int(value) => write!(f, "{value}"),
            CellValue::Float(value) => {
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{value:.0}")
                } else {
                    write!(f, "{value}")
                }
            }
            CellValue::Bool(value) => write!(f, "{value}"),
            CellValue::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Invoice serial number, kept in whatever shape the export provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceId {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl InvoiceId {
    /// Converts a cell into an invoice id; missing cells yield `None`.
    pub fn from_cell(cell: &CellValue) -> Option<Self> {
        if cell.is_missing() {
            return None;
        }
        let id = match cell {
            CellValue::Int(value) => InvoiceId::Integer(*value),
            CellValue::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                if value.abs() < 9.0e15 {
                    InvoiceId::Integer(*value as i64)
                } else {
                    InvoiceId::Number(*value)
                }
            }
            CellValue::Float(value) if value.is_finite() => InvoiceId::Number(*value),
            other => InvoiceId::Text(other.to_string()),
        };
        Some(id)
    }
}
