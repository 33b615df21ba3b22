//! Row cleaning.
//!
//! [`clean_row`] is the pure per-row transformation; [`clean_rows`] applies
//! it to a whole table and tallies what was dropped or defaulted.

use sales_model::{CleanRecord, FieldKind, InputRow, InvoiceId, TargetField};
use tracing::{debug, trace};

use crate::normalization::{
    code_text, coerce_number, normalize_invoice_date, parse_number, text_or_placeholder,
};

/// True when any field a row must carry is missing.
pub fn lacks_required_field(row: &InputRow) -> bool {
    TargetField::ALL
        .into_iter()
        .filter(TargetField::is_required)
        .any(|field| row.get(field).is_missing())
}

/// Renders a code or free-text field according to its [`FieldKind`].
fn field_text(row: &InputRow, field: TargetField) -> String {
    let cell = row.get(field);
    match field.kind() {
        FieldKind::Code => code_text(cell),
        _ => text_or_placeholder(cell),
    }
}

/// Cleans a single projected row.
///
/// Returns `None` when a required field (customer or product code) is
/// missing; such rows are dropped entirely rather than defaulted.
pub fn clean_row(row: &InputRow) -> Option<CleanRecord> {
    if lacks_required_field(row) {
        return None;
    }
    let text = |field| field_text(row, field);
    let number = |field| coerce_number(row.get(field));
    Some(CleanRecord {
        invoice_id: InvoiceId::from_cell(row.get(TargetField::InvoiceId)),
        invoice_number: text(TargetField::InvoiceNumber),
        invoice_date: normalize_invoice_date(row.get(TargetField::InvoiceDate)),
        invoice_total: number(TargetField::InvoiceTotal),
        customer_code: text(TargetField::CustomerCode),
        customer_name: text(TargetField::CustomerName),
        city: text(TargetField::City),
        governorate: text(TargetField::Governorate),
        product_code: text(TargetField::ProductCode),
        product_name: text(TargetField::ProductName),
        product_category: text(TargetField::ProductCategory),
        product_price: number(TargetField::ProductPrice),
        quantity: number(TargetField::Quantity),
        item_price: number(TargetField::ItemPrice),
        item_total: number(TargetField::ItemTotal),
        delivery_person: text(TargetField::DeliveryPerson),
    })
}

/// Counts gathered while cleaning a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub kept_rows: usize,
    /// Rows without a customer code (a row may also lack a product code).
    pub missing_customer_code: usize,
    /// Rows without a product code.
    pub missing_product_code: usize,
    /// Kept rows whose invoice date was present but did not parse.
    pub unparsed_dates: usize,
    /// Numeric values on kept rows that were present but replaced by zero.
    pub defaulted_numbers: usize,
}

impl CleaningReport {
    pub fn dropped_rows(&self) -> usize {
        self.input_rows - self.kept_rows
    }
}

/// Result of cleaning a whole table.
#[derive(Debug, Clone, Default)]
pub struct CleanedRows {
    pub records: Vec<CleanRecord>,
    pub report: CleaningReport,
}

/// Cleans every row, preserving input order.
pub fn clean_rows(rows: &[InputRow]) -> CleanedRows {
    let mut report = CleaningReport {
        input_rows: rows.len(),
        ..CleaningReport::default()
    };
    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        // Row numbers as shown in the spreadsheet (header is row 1).
        let row_number = idx + 2;
        let Some(record) = clean_row(row) else {
            let no_customer = row.get(TargetField::CustomerCode).is_missing();
            let no_product = row.get(TargetField::ProductCode).is_missing();
            report.missing_customer_code += usize::from(no_customer);
            report.missing_product_code += usize::from(no_product);
            trace!(row_number, no_customer, no_product, "row dropped");
            continue;
        };
        let date_cell = row.get(TargetField::InvoiceDate);
        if record.invoice_date.is_none() && !date_cell.is_missing() {
            report.unparsed_dates += 1;
            debug!(row_number, value = %date_cell, "invoice date did not parse");
        }
        let numeric_fields = TargetField::ALL
            .into_iter()
            .filter(|field| field.kind() == FieldKind::Numeric);
        for field in numeric_fields {
            let cell = row.get(field);
            if !cell.is_missing() && parse_number(cell).is_none() {
                report.defaulted_numbers += 1;
                trace!(row_number, field = %field, value = %cell, "numeric value defaulted to zero");
            }
        }
        records.push(record);
    }
    report.kept_rows = records.len();
    CleanedRows { records, report }
}
