//! Header groups: the header row as the renderer sees it.

use crate::column::Align;
use crate::ordering::SortDirection;

/// A row of headers. Columns are flat, so a table has one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
    pub id: String,
    pub headers: Vec<Header>,
}

/// One visible column's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub column_id: String,
    /// Position among the visible columns.
    pub index: usize,
    /// Rendered header text.
    pub text: String,
    pub can_sort: bool,
    /// Current sort of the column.
    pub sort: Option<SortDirection>,
    /// Sort after the next click. `None` means the click clears the sort.
    pub next_sort: Option<SortDirection>,
    pub align: Align,
    pub max_width: Option<usize>,
}

impl Header {
    /// Tooltip naming what a click on this header will do, for sortable
    /// headers.
    pub fn sort_title(&self) -> Option<&'static str> {
        if !self.can_sort {
            return None;
        }
        Some(match self.next_sort {
            Some(SortDirection::Asc) => "Sort ascending",
            Some(SortDirection::Desc) => "Sort descending",
            None => "Clear sort",
        })
    }
}
