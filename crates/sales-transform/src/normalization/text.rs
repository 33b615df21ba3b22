//! Text normalization.

use sales_model::CellValue;

use super::numeric::format_numeric;

/// Placeholder for missing free-text values ("unspecified").
pub const UNSPECIFIED_PLACEHOLDER: &str = "غير محدد";

/// Renders an identifier cell as text.
///
/// Integral floats lose their fractional part so `1001.0` stays `1001`.
/// Missing cells render as an empty string.
pub fn code_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Float(value) if value.is_finite() => format_numeric(*value),
        other if other.is_missing() => String::new(),
        other => other.to_string(),
    }
}

/// Returns the cell's text, or the placeholder when missing.
///
/// Present values keep their content; non-text cells are rendered as text.
pub fn text_or_placeholder(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(value) if !cell.is_missing() => value.clone(),
        other if other.is_missing() => UNSPECIFIED_PLACEHOLDER.to_string(),
        other => code_text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_render_as_text() {
        assert_eq!(code_text(&CellValue::Float(1001.0)), "1001");
        assert_eq!(code_text(&CellValue::Int(42)), "42");
        assert_eq!(code_text(&CellValue::text("007")), "007");
        assert_eq!(code_text(&CellValue::Empty), "");
    }

    #[test]
    fn missing_text_becomes_placeholder() {
        assert_eq!(text_or_placeholder(&CellValue::Empty), UNSPECIFIED_PLACEHOLDER);
        assert_eq!(
            text_or_placeholder(&CellValue::Text(" القاهرة ".to_string())),
            " القاهرة "
        );
        assert_eq!(text_or_placeholder(&CellValue::Int(5)), "5");
    }
}
