//! Input rows projected onto the field map.

use crate::cell::CellValue;
use crate::field::TargetField;

/// A source row after column selection and renaming.
///
/// Cells are addressed by [`TargetField`]; fields never set stay empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputRow {
    cells: [CellValue; TargetField::COUNT],
}

impl InputRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: TargetField, value: CellValue) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: TargetField, value: CellValue) {
        self.cells[field.index()] = value;
    }

    pub fn get(&self, field: TargetField) -> &CellValue {
        &self.cells[field.index()]
    }
}
