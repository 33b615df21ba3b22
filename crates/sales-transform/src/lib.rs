//! Sales export transformation.
//!
//! This crate turns projected input rows into the output document:
//!
//! - **normalization**: date, numeric, and text coercion rules
//! - **clean**: the per-row cleaning function and table-level report
//! - **stats**: distinct counts, invoice-level sales totals, document assembly

pub mod clean;
pub mod normalization;
pub mod stats;

pub use clean::{CleanedRows, CleaningReport, clean_row, clean_rows, lacks_required_field};
pub use normalization::UNSPECIFIED_PLACEHOLDER;
pub use stats::{SalesStatistics, build_document, compute_statistics, local_timestamp};
