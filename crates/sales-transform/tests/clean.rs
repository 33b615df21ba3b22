//! Tests for row cleaning.

use sales_model::{CellValue, InputRow, InvoiceId, TargetField};
use sales_transform::{UNSPECIFIED_PLACEHOLDER, clean_row, clean_rows};

fn base_row() -> InputRow {
    InputRow::new()
        .with(TargetField::InvoiceId, CellValue::Float(1.0))
        .with(TargetField::InvoiceNumber, CellValue::Float(100.0))
        .with(TargetField::InvoiceDate, CellValue::text("01/02/2024 11:30 AM"))
        .with(TargetField::InvoiceTotal, CellValue::Float(50.0))
        .with(TargetField::CustomerCode, CellValue::text("007"))
        .with(TargetField::CustomerName, CellValue::text("محمد علي"))
        .with(TargetField::City, CellValue::text("المعادي"))
        .with(TargetField::Governorate, CellValue::text("القاهرة"))
        .with(TargetField::ProductCode, CellValue::Float(1001.0))
        .with(TargetField::ProductName, CellValue::text("أرز"))
        .with(TargetField::ProductCategory, CellValue::text("بقالة"))
        .with(TargetField::ProductPrice, CellValue::Float(25.0))
        .with(TargetField::Quantity, CellValue::Int(2))
        .with(TargetField::ItemPrice, CellValue::Float(25.0))
        .with(TargetField::ItemTotal, CellValue::Float(50.0))
        .with(TargetField::DeliveryPerson, CellValue::text("كريم"))
}

#[test]
fn cleans_complete_row() {
    let record = clean_row(&base_row()).expect("kept");
    assert_eq!(record.invoice_id, Some(InvoiceId::Integer(1)));
    assert_eq!(record.invoice_number, "100");
    assert_eq!(record.invoice_date.as_deref(), Some("2024-02-01"));
    assert_eq!(record.invoice_total, 50.0);
    assert_eq!(record.customer_code, "007");
    assert_eq!(record.product_code, "1001");
    assert_eq!(record.quantity, 2.0);
    assert_eq!(record.customer_name, "محمد علي");
    assert_eq!(record.delivery_person, "كريم");
}

#[test]
fn non_numeric_quantity_becomes_zero() {
    let row = base_row().with(TargetField::Quantity, CellValue::text("abc"));
    let record = clean_row(&row).expect("kept");
    assert_eq!(record.quantity, 0.0);
}

#[test]
fn missing_numbers_become_zero() {
    let row = base_row()
        .with(TargetField::InvoiceTotal, CellValue::Empty)
        .with(TargetField::ItemPrice, CellValue::Float(f64::NAN));
    let record = clean_row(&row).expect("kept");
    assert_eq!(record.invoice_total, 0.0);
    assert_eq!(record.item_price, 0.0);
}

#[test]
fn missing_city_gets_placeholder() {
    let row = base_row().with(TargetField::City, CellValue::Empty);
    let record = clean_row(&row).expect("kept");
    assert_eq!(record.city, "غير محدد");
    assert_eq!(record.city, UNSPECIFIED_PLACEHOLDER);
}

#[test]
fn every_text_field_defaults_to_placeholder() {
    let row = InputRow::new()
        .with(TargetField::CustomerCode, CellValue::text("C1"))
        .with(TargetField::ProductCode, CellValue::text("P1"));
    let record = clean_row(&row).expect("kept");
    for value in [
        &record.customer_name,
        &record.city,
        &record.governorate,
        &record.product_name,
        &record.product_category,
        &record.delivery_person,
    ] {
        assert_eq!(value, UNSPECIFIED_PLACEHOLDER);
    }
    assert_eq!(record.invoice_id, None);
    assert_eq!(record.invoice_number, "");
    assert_eq!(record.invoice_date, None);
}

#[test]
fn unparseable_date_is_null_not_error() {
    let row = base_row().with(TargetField::InvoiceDate, CellValue::text("2024/02/01"));
    let record = clean_row(&row).expect("kept");
    assert_eq!(record.invoice_date, None);
}

#[test]
fn row_missing_customer_code_is_dropped() {
    let rows = vec![
        base_row(),
        base_row().with(TargetField::CustomerCode, CellValue::Empty),
        base_row().with(TargetField::InvoiceNumber, CellValue::Float(101.0)),
    ];
    let cleaned = clean_rows(&rows);
    assert_eq!(cleaned.records.len(), 2);
    assert_eq!(cleaned.report.kept_rows, 2);
    assert_eq!(cleaned.report.missing_customer_code, 1);
    assert_eq!(cleaned.records[1].invoice_number, "101");
}

#[test]
fn whitespace_values_are_kept_verbatim() {
    let row = base_row()
        .with(TargetField::CustomerCode, CellValue::text("  "))
        .with(TargetField::City, CellValue::text(" "));
    let record = clean_row(&row).expect("whitespace code is a value");
    assert_eq!(record.customer_code, "  ");
    assert_eq!(record.city, " ");
}

#[test]
fn empty_text_code_drops_row() {
    let row = base_row().with(TargetField::ProductCode, CellValue::Text(String::new()));
    assert!(clean_row(&row).is_none());
}
