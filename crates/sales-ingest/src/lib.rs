//! Sales export ingestion.
//!
//! Loads the raw invoice export into an in-memory [`SourceTable`] and
//! projects it onto the fixed field map.
//!
//! # Features
//!
//! - **Workbook loading**: first worksheet of xlsx/xlsm/xlsb/xls/ods files via calamine
//! - **CSV loading**: plain CSV exports, every cell read as text
//! - **File checks**: existence, size limit, format detection
//! - **Projection**: select and rename the mapped columns, reporting every missing one

mod csv_table;
mod error;
mod source;
mod table;
mod workbook;

pub use csv_table::read_csv_table;
pub use error::{IngestError, Result, SchemaError};
pub use source::{
    DEFAULT_MAX_FILE_SIZE, IngestOptions, SourceFormat, check_file_size_with_limit,
    load_source_table,
};
pub use table::{SourceTable, normalize_header};
pub use workbook::{convert_cell, read_workbook_table};
