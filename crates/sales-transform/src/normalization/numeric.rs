//! Numeric normalization utilities.

use sales_model::CellValue;

/// Parses a string as f64, returning None for invalid, empty, or non-finite strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads a cell as a number, if it holds one.
pub fn parse_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Int(value) => Some(*value as f64),
        CellValue::Float(value) if value.is_finite() => Some(*value),
        CellValue::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
        CellValue::Text(value) => parse_f64(value),
        _ => None,
    }
}

/// Reads a cell as a number, substituting `0` for anything unparseable.
pub fn coerce_number(cell: &CellValue) -> f64 {
    parse_number(cell).unwrap_or(0.0)
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_cells() {
        assert_eq!(coerce_number(&CellValue::Int(3)), 3.0);
        assert_eq!(coerce_number(&CellValue::text(" 12.5 ")), 12.5);
        assert_eq!(coerce_number(&CellValue::text("abc")), 0.0);
        assert_eq!(coerce_number(&CellValue::text("inf")), 0.0);
        assert_eq!(coerce_number(&CellValue::Float(f64::NAN)), 0.0);
        assert_eq!(coerce_number(&CellValue::Empty), 0.0);
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(10.5), "10.5");
        assert_eq!(format_numeric(100.0), "100");
    }
}
