//! Output document.

use serde::{Deserialize, Serialize};

use crate::record::CleanRecord;

/// Format of [`SalesMetadata::generated_at`].
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary statistics written alongside the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesMetadata {
    pub generated_at: String,
    pub total_records: usize,
    pub unique_customers: usize,
    pub unique_products: usize,
    pub unique_invoices: usize,
    /// Sum of invoice totals, counting each invoice once.
    pub total_sales: f64,
}

/// The document persisted for client-side storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub metadata: SalesMetadata,
    pub data: Vec<CleanRecord>,
}
