//! Cleaned records.

use serde::{Deserialize, Serialize};

use crate::cell::InvoiceId;

/// A normalized invoice line item.
///
/// Field order is the key order of the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub invoice_id: Option<InvoiceId>,
    pub invoice_number: String,
    /// `YYYY-MM-DD`, or `None` when the source timestamp did not parse.
    pub invoice_date: Option<String>,
    pub invoice_total: f64,
    pub customer_code: String,
    pub customer_name: String,
    pub city: String,
    pub governorate: String,
    pub product_code: String,
    pub product_name: String,
    pub product_category: String,
    pub product_price: f64,
    pub quantity: f64,
    pub item_price: f64,
    pub item_total: f64,
    pub delivery_person: String,
}
