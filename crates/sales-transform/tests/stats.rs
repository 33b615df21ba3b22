//! Tests for summary statistics.

use chrono::NaiveDate;
use proptest::prelude::*;
use sales_model::CleanRecord;
use sales_transform::{build_document, compute_statistics};
use std::collections::BTreeSet;

fn record(invoice: &str, total: f64, customer: &str, product: &str) -> CleanRecord {
    CleanRecord {
        invoice_id: None,
        invoice_number: invoice.to_string(),
        invoice_date: None,
        invoice_total: total,
        customer_code: customer.to_string(),
        customer_name: "غير محدد".to_string(),
        city: "غير محدد".to_string(),
        governorate: "غير محدد".to_string(),
        product_code: product.to_string(),
        product_name: "غير محدد".to_string(),
        product_category: "غير محدد".to_string(),
        product_price: 0.0,
        quantity: 0.0,
        item_price: 0.0,
        item_total: 0.0,
        delivery_person: "غير محدد".to_string(),
    }
}

#[test]
fn shared_invoice_total_counts_once() {
    let records = vec![
        record("100", 50.0, "C1", "P1"),
        record("100", 50.0, "C1", "P2"),
    ];
    let stats = compute_statistics(&records);
    assert_eq!(stats.total_sales, 50.0);
    assert_eq!(stats.unique_invoices, 1);
    assert_eq!(stats.unique_products, 2);
    assert_eq!(stats.unique_customers, 1);
    assert_eq!(stats.total_records, 2);
}

#[test]
fn first_total_wins_on_disagreement() {
    let records = vec![
        record("100", 50.0, "C1", "P1"),
        record("200", 20.0, "C2", "P1"),
        record("100", 75.0, "C1", "P2"),
    ];
    assert_eq!(compute_statistics(&records).total_sales, 70.0);
}

#[test]
fn empty_input_has_zero_statistics() {
    let stats = compute_statistics(&[]);
    assert_eq!(stats.total_records, 0);
    assert_eq!(stats.unique_invoices, 0);
    assert_eq!(stats.total_sales, 0.0);
}

#[test]
fn document_carries_formatted_timestamp() {
    let generated_at = NaiveDate::from_ymd_opt(2024, 2, 1)
        .and_then(|date| date.and_hms_opt(9, 5, 7))
        .unwrap();
    let document = build_document(vec![record("1", 10.0, "C1", "P1")], generated_at);
    assert_eq!(document.metadata.generated_at, "2024-02-01 09:05:07");
    assert_eq!(document.metadata.total_records, 1);
    assert_eq!(document.data.len(), 1);
}

fn arb_record() -> impl Strategy<Value = CleanRecord> {
    (0u8..6, 0u32..500, 0u8..4, 0u8..5).prop_map(|(invoice, total, customer, product)| {
        record(
            &invoice.to_string(),
            f64::from(total),
            &format!("C{customer}"),
            &format!("P{product}"),
        )
    })
}

proptest! {
    #[test]
    fn distinct_counts_match_data(records in prop::collection::vec(arb_record(), 0..40)) {
        let stats = compute_statistics(&records);
        let customers: BTreeSet<&str> = records.iter().map(|r| r.customer_code.as_str()).collect();
        let products: BTreeSet<&str> = records.iter().map(|r| r.product_code.as_str()).collect();
        let invoices: BTreeSet<&str> = records.iter().map(|r| r.invoice_number.as_str()).collect();
        prop_assert_eq!(stats.total_records, records.len());
        prop_assert_eq!(stats.unique_customers, customers.len());
        prop_assert_eq!(stats.unique_products, products.len());
        prop_assert_eq!(stats.unique_invoices, invoices.len());
    }

    #[test]
    fn total_sales_uses_first_seen_total(records in prop::collection::vec(arb_record(), 0..40)) {
        let mut seen = BTreeSet::new();
        let mut expected = 0.0;
        for record in &records {
            if seen.insert(record.invoice_number.clone()) {
                expected += record.invoice_total;
            }
        }
        prop_assert_eq!(compute_statistics(&records).total_sales, expected);
    }
}
