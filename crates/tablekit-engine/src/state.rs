//! Table state: the four independent slices the engine owns.

use std::collections::HashMap;

use crate::ordering::{SortDirection, SortEntry};
use crate::pagination::PaginationState;

/// Interactive state of one table instance.
///
/// Each slice is independent and last-write-wins: changing one never
/// rewrites another, except that the page index is re-clamped whenever the
/// number of rows it pages over shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    /// Active sorts. The header click cycle keeps at most one entry.
    pub sorting: Vec<SortEntry>,
    /// Global filter text, as typed.
    pub global_filter: String,
    /// Explicit visibility per column id. Absent ids are visible.
    pub column_visibility: HashMap<String, bool>,
    pub pagination: PaginationState,
}

impl TableState {
    /// Sort direction of a column, if it is sorted.
    pub fn sort_for(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting
            .iter()
            .find(|entry| entry.column_id == column_id)
            .map(|entry| entry.direction)
    }

    pub fn is_visible(&self, column_id: &str) -> bool {
        self.column_visibility
            .get(column_id)
            .copied()
            .unwrap_or(true)
    }
}

/// Initial values for a table's state.
///
/// ```
/// use tablekit_engine::{InitialState, SortEntry};
///
/// let initial = InitialState::new()
///     .sort(SortEntry::desc("slot"))
///     .hide("fee")
///     .page_size(20);
/// let state = initial.into_state();
/// assert_eq!(state.pagination.page_size, 20);
/// assert!(!state.is_visible("fee"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InitialState {
    sorting: Option<SortEntry>,
    global_filter: String,
    hidden: Vec<String>,
    page_index: usize,
    page_size: Option<usize>,
}

impl InitialState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, entry: SortEntry) -> Self {
        self.sorting = Some(entry);
        self
    }

    pub fn global_filter(mut self, text: impl Into<String>) -> Self {
        self.global_filter = text.into();
        self
    }

    pub fn hide(mut self, column_id: impl Into<String>) -> Self {
        self.hidden.push(column_id.into());
        self
    }

    pub fn page_index(mut self, index: usize) -> Self {
        self.page_index = index;
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Builds the state without validating it against any columns.
    pub fn into_state(self) -> TableState {
        let page_size = self
            .page_size
            .unwrap_or(PaginationState::default().page_size);
        TableState {
            sorting: self.sorting.into_iter().collect(),
            global_filter: self.global_filter,
            column_visibility: self.hidden.into_iter().map(|id| (id, false)).collect(),
            pagination: PaginationState::new(self.page_index, page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty() {
        let state = TableState::default();
        assert!(state.sorting.is_empty());
        assert!(state.global_filter.is_empty());
        assert!(state.is_visible("anything"));
        assert_eq!(state.pagination, PaginationState::default());
    }

    #[test]
    fn sort_lookup() {
        let state = InitialState::new().sort(SortEntry::asc("slot")).into_state();
        assert_eq!(state.sort_for("slot"), Some(SortDirection::Asc));
        assert_eq!(state.sort_for("fee"), None);
    }

    #[test]
    fn initial_values_carry_over() {
        let state = InitialState::new()
            .global_filter("ray")
            .page_index(2)
            .page_size(0)
            .into_state();
        assert_eq!(state.global_filter, "ray");
        assert_eq!(state.pagination.page_index, 2);
        assert_eq!(state.pagination.page_size, 1);
    }
}
