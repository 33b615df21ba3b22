//! Data model for the sales export cleaner.
//!
//! - **field**: the fixed source-column to target-field mapping
//! - **cell**: raw cell values as read from a spreadsheet or CSV file
//! - **row**: projected input rows keyed by target field
//! - **record**: cleaned, normalized records
//! - **document**: the serialized output document

pub mod cell;
pub mod document;
pub mod field;
pub mod record;
pub mod row;

pub use cell::{CellValue, InvoiceId};
pub use document::{GENERATED_AT_FORMAT, OutputDocument, SalesMetadata};
pub use field::{FIELD_MAP, FieldKind, FieldMap, FieldMapping, TargetField};
pub use record::CleanRecord;
pub use row::InputRow;
