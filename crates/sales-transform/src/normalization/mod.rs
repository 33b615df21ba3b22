//! Field normalization for cleaned records.
//!
//! - **datetime**: invoice timestamp parsing and date formatting
//! - **numeric**: numeric coercion with a zero default
//! - **text**: code rendering and the unspecified placeholder

pub mod datetime;
pub mod numeric;
pub mod text;

pub use datetime::{
    DATE_OUTPUT_FORMAT, SOURCE_DATETIME_FORMAT, normalize_invoice_date, parse_source_datetime,
};
pub use numeric::{coerce_number, format_numeric, parse_f64, parse_number};
pub use text::{UNSPECIFIED_PLACEHOLDER, code_text, text_or_placeholder};
