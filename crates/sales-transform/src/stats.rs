//! Summary statistics over cleaned records.

use std::collections::HashSet;
use std::collections::hash_map::{Entry, HashMap};

use chrono::NaiveDateTime;
use sales_model::{CleanRecord, GENERATED_AT_FORMAT, OutputDocument, SalesMetadata};

/// Aggregates computed in one pass over the cleaned records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesStatistics {
    pub total_records: usize,
    pub unique_customers: usize,
    pub unique_products: usize,
    pub unique_invoices: usize,
    /// Sum of each invoice's total, taking the first row seen per invoice.
    pub total_sales: f64,
}

/// Computes record counts, distinct counts, and total sales.
///
/// Line items of one invoice repeat the invoice total; only the first
/// occurrence of each invoice number contributes. Disagreeing totals on
/// later rows are ignored.
pub fn compute_statistics(records: &[CleanRecord]) -> SalesStatistics {
    let mut customers: HashSet<&str> = HashSet::new();
    let mut products: HashSet<&str> = HashSet::new();
    let mut invoice_totals: HashMap<&str, f64> = HashMap::new();
    let mut total_sales = 0.0;
    for record in records {
        customers.insert(&record.customer_code);
        products.insert(&record.product_code);
        if let Entry::Vacant(entry) = invoice_totals.entry(&record.invoice_number) {
            entry.insert(record.invoice_total);
            total_sales += record.invoice_total;
        }
    }
    SalesStatistics {
        total_records: records.len(),
        unique_customers: customers.len(),
        unique_products: products.len(),
        unique_invoices: invoice_totals.len(),
        total_sales,
    }
}

/// Assembles the output document from cleaned records.
pub fn build_document(records: Vec<CleanRecord>, generated_at: NaiveDateTime) -> OutputDocument {
    let stats = compute_statistics(&records);
    OutputDocument {
        metadata: SalesMetadata {
            generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
            total_records: stats.total_records,
            unique_customers: stats.unique_customers,
            unique_products: stats.unique_products,
            unique_invoices: stats.unique_invoices,
            total_sales: stats.total_sales,
        },
        data: records,
    }
}

/// Current local time, used for `generated_at`.
pub fn local_timestamp() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
