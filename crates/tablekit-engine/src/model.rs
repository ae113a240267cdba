//! Row model: the rows of the current page with their visible cells.

use crate::column::Align;
use crate::value::Value;

/// One row of the current page.
#[derive(Debug)]
pub struct RowView<'a, R> {
    /// The original row.
    pub row: &'a R,
    /// Position on the current page.
    pub index: usize,
    /// Cells of the visible columns, in column order.
    pub cells: Vec<Cell<'a>>,
}

impl<'a, R> RowView<'a, R> {
    pub fn cell(&self, column_id: &str) -> Option<&Cell<'a>> {
        self.cells.iter().find(|cell| cell.column_id == column_id)
    }
}

/// One visible cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<'a> {
    pub column_id: &'a str,
    /// Raw accessed value.
    pub value: Value<'a>,
    /// Text to show: the column's cell renderer output, or the raw value.
    pub text: String,
    pub align: Align,
    pub max_width: Option<usize>,
}
