//! Source column to target field mapping.
//!
//! The sales export carries dozens of columns with Arabic headers. Only the
//! sixteen listed in [`FIELD_MAP`] are kept; each is renamed to an English
//! snake_case field and normalized according to its [`FieldKind`]. Rows
//! missing a [required](TargetField::is_required) field are dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target field of a cleaned record.
///
/// Declaration order matches the column order of the output records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetField {
    // Invoice
    InvoiceId,
    InvoiceNumber,
    InvoiceDate,
    InvoiceTotal,
    // Customer
    CustomerCode,
    CustomerName,
    City,
    Governorate,
    // Product
    ProductCode,
    ProductName,
    ProductCategory,
    ProductPrice,
    // Line item
    Quantity,
    ItemPrice,
    ItemTotal,
    // Delivery
    DeliveryPerson,
}

impl TargetField {
    /// Number of target fields.
    pub const COUNT: usize = 16;

    /// All target fields in output order.
    pub const ALL: [TargetField; Self::COUNT] = [
        TargetField::InvoiceId,
        TargetField::InvoiceNumber,
        TargetField::InvoiceDate,
        TargetField::InvoiceTotal,
        TargetField::CustomerCode,
        TargetField::CustomerName,
        TargetField::City,
        TargetField::Governorate,
        TargetField::ProductCode,
        TargetField::ProductName,
        TargetField::ProductCategory,
        TargetField::ProductPrice,
        TargetField::Quantity,
        TargetField::ItemPrice,
        TargetField::ItemTotal,
        TargetField::DeliveryPerson,
    ];

    /// Returns the output key of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetField::InvoiceId => "invoice_id",
            TargetField::InvoiceNumber => "invoice_number",
            TargetField::InvoiceDate => "invoice_date",
            TargetField::InvoiceTotal => "invoice_total",
            TargetField::CustomerCode => "customer_code",
            TargetField::CustomerName => "customer_name",
            TargetField::City => "city",
            TargetField::Governorate => "governorate",
            TargetField::ProductCode => "product_code",
            TargetField::ProductName => "product_name",
            TargetField::ProductCategory => "product_category",
            TargetField::ProductPrice => "product_price",
            TargetField::Quantity => "quantity",
            TargetField::ItemPrice => "item_price",
            TargetField::ItemTotal => "item_total",
            TargetField::DeliveryPerson => "delivery_person",
        }
    }

    /// Returns how values of this field are normalized.
    pub fn kind(&self) -> FieldKind {
        match self {
            TargetField::InvoiceId => FieldKind::Passthrough,
            TargetField::InvoiceNumber | TargetField::CustomerCode | TargetField::ProductCode => {
                FieldKind::Code
            }
            TargetField::InvoiceDate => FieldKind::Date,
            TargetField::InvoiceTotal
            | TargetField::ProductPrice
            | TargetField::Quantity
            | TargetField::ItemPrice
            | TargetField::ItemTotal => FieldKind::Numeric,
            TargetField::CustomerName
            | TargetField::City
            | TargetField::Governorate
            | TargetField::ProductName
            | TargetField::ProductCategory
            | TargetField::DeliveryPerson => FieldKind::Text,
        }
    }

    /// True for the fields a row must carry to be kept.
    pub fn is_required(&self) -> bool {
        matches!(self, TargetField::CustomerCode | TargetField::ProductCode)
    }

    /// Position of this field in [`TargetField::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalization applied to a target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Copied through with its original type.
    Passthrough,
    /// Opaque identifier, always rendered as text.
    Code,
    /// Source timestamp reduced to a `YYYY-MM-DD` date, or null.
    Date,
    /// Number, defaulting to zero.
    Numeric,
    /// Free text, defaulting to the unspecified placeholder.
    Text,
}

/// One entry of the field map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Header of the column in the source export.
    pub source: &'static str,
    /// Field the column is renamed to.
    pub target: TargetField,
}

impl FieldMapping {
    const fn new(source: &'static str, target: TargetField) -> Self {
        Self { source, target }
    }
}

/// The fixed column mapping of the sales export.
pub const FIELD_MAP: [FieldMapping; TargetField::COUNT] = [
    FieldMapping::new("مسلسل", TargetField::InvoiceId),
    FieldMapping::new("الرقم", TargetField::InvoiceNumber),
    FieldMapping::new("تاريخ الإنشاء", TargetField::InvoiceDate),
    FieldMapping::new("الإجمالي النهائي", TargetField::InvoiceTotal),
    FieldMapping::new("العميل - الكود", TargetField::CustomerCode),
    FieldMapping::new("العميل - الاسم", TargetField::CustomerName),
    FieldMapping::new("العميل - المنطقة - الاسم", TargetField::City),
    FieldMapping::new(
        "العميل - المنطقة - المنطقة الرئيسية - الاسم",
        TargetField::Governorate,
    ),
    FieldMapping::new("العناصر - المنتج - الكود", TargetField::ProductCode),
    FieldMapping::new("العناصر - المنتج - الاسم", TargetField::ProductName),
    FieldMapping::new("العناصر - المنتج - التصنيف", TargetField::ProductCategory),
    FieldMapping::new("العناصر - المنتج - سعر القطعة", TargetField::ProductPrice),
    FieldMapping::new("العناصر - الكمية", TargetField::Quantity),
    FieldMapping::new("العناصر - سعر القطعة", TargetField::ItemPrice),
    FieldMapping::new("العناصر - الكلي", TargetField::ItemTotal),
    FieldMapping::new("مسئول التوصيل - الاسم", TargetField::DeliveryPerson),
];

/// Ordered view over a list of field mappings.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    entries: &'static [FieldMapping],
}

impl Default for FieldMap {
    fn default() -> Self {
        Self::sales_export()
    }
}

impl FieldMap {
    /// The mapping used for the sales invoice export.
    pub const fn sales_export() -> Self {
        Self {
            entries: &FIELD_MAP,
        }
    }

    /// Iterate over the mappings in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldMapping> {
        self.entries.iter()
    }

    /// Source headers in declared order.
    pub fn source_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.source)
    }

    /// Looks up the target field for a source header.
    pub fn target_for(&self, source: &str) -> Option<TargetField> {
        self.entries
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.target)
    }

    /// Looks up the source header for a target field.
    pub fn source_for(&self, target: TargetField) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.target == target)
            .map(|entry| entry.source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_index_matches_position() {
        for (idx, field) in TargetField::ALL.iter().enumerate() {
            assert_eq!(field.index(), idx);
        }
    }

    #[test]
    fn map_targets_follow_output_order() {
        let targets: Vec<TargetField> = FIELD_MAP.iter().map(|entry| entry.target).collect();
        assert_eq!(targets, TargetField::ALL.to_vec());
    }

    #[test]
    fn only_codes_are_required() {
        let required: Vec<TargetField> = TargetField::ALL
            .into_iter()
            .filter(TargetField::is_required)
            .collect();
        assert_eq!(
            required,
            vec![TargetField::CustomerCode, TargetField::ProductCode]
        );
    }
}
