//! Global filter matching.
//!
//! A row matches the global filter when the raw value text of any column
//! that takes part in filtering contains the filter text, ignoring case.
//! Hidden columns still take part: visibility is a rendering concern. The
//! empty filter matches every row.

use crate::column::ColumnDef;
use crate::row::TableRow;

/// Normalized form of a filter string, ready for matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalFilter {
    needle: String,
}

impl GlobalFilter {
    pub fn new(text: &str) -> Self {
        GlobalFilter {
            needle: text.to_lowercase(),
        }
    }

    /// Returns `true` if this filter matches every row.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Tests whether a row matches.
    pub fn matches<R: TableRow>(&self, row: &R, columns: &[ColumnDef<R>]) -> bool {
        if self.is_empty() {
            return true;
        }
        columns
            .iter()
            .filter(|col| col.can_global_filter())
            .any(|col| self.matches_text(&col.value(row).display()))
    }

    /// Tests whether a single piece of text matches.
    pub fn matches_text(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }
}
