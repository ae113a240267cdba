//! The table state engine.
//!
//! [`TableEngine`] owns the data, the column definitions and the
//! [`TableState`], and derives everything a renderer needs from them. All
//! operations are total: any combination of empty data, empty columns or
//! out-of-range pagination input leaves the engine in a valid state.
//!
//! Derivation order in client mode is filter, then sort, then page window.
//! In manual mode the caller has done all three and the data is returned
//! as given.

use tracing::{debug, trace};

use crate::column::{ColumnDef, HeaderContext};
use crate::filter::GlobalFilter;
use crate::header::{Header, HeaderGroup};
use crate::model::{Cell, RowView};
use crate::ordering::{compare_values, next_in_cycle, SortDirection, SortEntry};
use crate::pagination::{
    clamp_page_index, last_page_index, page_count_for, rescale_page_index, PaginationMode,
    PaginationState,
};
use crate::row::TableRow;
use crate::state::{InitialState, TableState};

/// Page change notification.
pub type PageCallback = Box<dyn FnMut(usize)>;

/// Sorting, filtering, pagination and column visibility over a row set.
///
/// ```
/// use tablekit_engine::{ColumnDef, TableEngine, TableRow, Value};
///
/// struct Row { id: String, n: i64 }
///
/// impl TableRow for Row {
///     fn id(&self) -> &str { &self.id }
///     fn field(&self, key: &str) -> Value<'_> {
///         match key {
///             "n" => Value::from(self.n),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let rows: Vec<Row> = (0..11)
///     .map(|n| Row { id: format!("r{n}"), n })
///     .collect();
/// let mut engine = TableEngine::new(rows, vec![ColumnDef::accessor("n", "N")]);
///
/// assert_eq!(engine.page_count(), 2);
/// assert_eq!(engine.visible_rows().len(), 10);
///
/// engine.next_page();
/// assert_eq!(engine.visible_rows().len(), 1);
///
/// engine.toggle_sort("n");
/// engine.toggle_sort("n");
/// assert_eq!(engine.column_sort("n"), Some(tablekit_engine::SortDirection::Desc));
/// ```
pub struct TableEngine<R> {
    data: Vec<R>,
    columns: Vec<ColumnDef<R>>,
    state: TableState,
    mode: PaginationMode,
    on_page_index_change: Option<PageCallback>,
    on_page_size_change: Option<PageCallback>,
}

impl<R: TableRow> TableEngine<R> {
    /// Creates an engine with default state: unsorted, unfiltered, every
    /// column visible, first page of ten rows.
    pub fn new(data: Vec<R>, columns: Vec<ColumnDef<R>>) -> Self {
        TableEngine {
            data,
            columns,
            state: TableState::default(),
            mode: PaginationMode::Client,
            on_page_index_change: None,
            on_page_size_change: None,
        }
    }

    /// Seeds the state. Sorts on unknown or unsortable columns and
    /// visibility entries for columns that cannot hide are dropped; the
    /// page index is clamped.
    pub fn with_initial_state(mut self, initial: InitialState) -> Self {
        let mut state = initial.into_state();
        state
            .sorting
            .retain(|entry| self.column(&entry.column_id).is_some_and(|c| c.can_sort()));
        state
            .column_visibility
            .retain(|id, _| self.column(id).is_some_and(|c| c.can_hide()));
        self.state = state;
        self.clamp_silently();
        self
    }

    /// Switches to manual pagination with a caller-supplied page count.
    pub fn manual_pagination(mut self, page_count: usize) -> Self {
        self.mode = PaginationMode::Manual { page_count };
        self.clamp_silently();
        self
    }

    /// Called with the new page index whenever it changes.
    pub fn on_page_index_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) + 'static,
    {
        self.on_page_index_change = Some(Box::new(f));
        self
    }

    /// Called with the new page size whenever it changes.
    pub fn on_page_size_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) + 'static,
    {
        self.on_page_size_change = Some(Box::new(f));
        self
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Replaces the row set. Sort, filter and visibility are kept; the page
    /// index is clamped to the new page count.
    pub fn set_data(&mut self, data: Vec<R>) {
        debug!(rows = data.len(), "data replaced");
        self.data = data;
        self.clamp_page_index();
    }

    /// Updates the caller-supplied page count, switching to manual mode.
    pub fn set_page_count(&mut self, page_count: usize) {
        debug!(page_count, "page count set");
        self.mode = PaginationMode::Manual { page_count };
        self.clamp_page_index();
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Header click: cycles the column through unsorted, ascending,
    /// descending and back to unsorted. Sorting a column discards the sort
    /// of any other column. No-op for columns that cannot sort.
    pub fn toggle_sort(&mut self, column_id: &str) {
        if !self.column(column_id).is_some_and(|c| c.can_sort()) {
            trace!(column = column_id, "sort ignored, column not sortable");
            return;
        }
        let next = next_in_cycle(self.state.sort_for(column_id));
        debug!(column = column_id, direction = ?next, "sort toggled");
        self.state.sorting = next
            .map(|direction| SortEntry::new(column_id, direction))
            .into_iter()
            .collect();
    }

    /// Replaces the sort. Entries on columns that cannot sort are ignored.
    pub fn set_sorting(&mut self, entry: Option<SortEntry>) {
        let entry = entry.filter(|e| self.column(&e.column_id).is_some_and(|c| c.can_sort()));
        debug!(sort = ?entry, "sorting set");
        self.state.sorting = entry.into_iter().collect();
    }

    pub fn clear_sorting(&mut self) {
        self.set_sorting(None);
    }

    // ========================================================================
    // Filtering and visibility
    // ========================================================================

    /// Replaces the global filter text.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.state.global_filter {
            return;
        }
        debug!(filter = %text, "global filter set");
        self.state.global_filter = text;
        self.clamp_page_index();
    }

    /// Shows or hides a column. Sort and filter state are untouched. No-op
    /// for unknown columns and columns that cannot hide.
    pub fn toggle_column_visibility(&mut self, column_id: &str, visible: bool) {
        if !self.column(column_id).is_some_and(|c| c.can_hide()) {
            trace!(column = column_id, "visibility ignored, column not hideable");
            return;
        }
        debug!(column = column_id, visible, "column visibility set");
        self.state
            .column_visibility
            .insert(column_id.to_string(), visible);
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Moves to a page, clamped to the valid range.
    pub fn set_page_index(&mut self, index: usize) {
        let index = clamp_page_index(index, self.page_count());
        self.apply_page_index(index);
    }

    /// Changes the page size, keeping the current top row's page in view.
    /// A size of zero is treated as one.
    pub fn set_page_size(&mut self, size: usize) {
        let size = size.max(1);
        let old = self.state.pagination;
        if size == old.page_size {
            return;
        }
        debug!(page_size = size, "page size set");
        self.state.pagination.page_size = size;
        if let Some(cb) = self.on_page_size_change.as_mut() {
            cb(size);
        }
        let index = rescale_page_index(old.page_index, old.page_size, size);
        let index = clamp_page_index(index, self.page_count());
        self.apply_page_index(index);
    }

    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    /// No-op on the first page.
    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.set_page_index(self.state.pagination.page_index - 1);
        }
    }

    /// No-op on the last page.
    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.set_page_index(self.state.pagination.page_index + 1);
        }
    }

    pub fn last_page(&mut self) {
        self.set_page_index(last_page_index(self.page_count()));
    }

    /// Takes back pagination values owned by the caller (controlled mode).
    /// Does not notify.
    pub fn sync_pagination(&mut self, page_index: Option<usize>, page_size: Option<usize>) {
        if let Some(size) = page_size {
            self.state.pagination.page_size = size.max(1);
        }
        if let Some(index) = page_index {
            self.state.pagination.page_index = index;
        }
        self.clamp_silently();
    }

    fn apply_page_index(&mut self, index: usize) {
        if index == self.state.pagination.page_index {
            return;
        }
        debug!(page_index = index, "page index set");
        self.state.pagination.page_index = index;
        if let Some(cb) = self.on_page_index_change.as_mut() {
            cb(index);
        }
    }

    fn clamp_page_index(&mut self) {
        let index = clamp_page_index(self.state.pagination.page_index, self.page_count());
        self.apply_page_index(index);
    }

    fn clamp_silently(&mut self) {
        self.state.pagination.page_index =
            clamp_page_index(self.state.pagination.page_index, self.page_count());
    }

    // ========================================================================
    // Derivation
    // ========================================================================

    /// Rows after the global filter, in input order.
    fn filtered(&self) -> Vec<&R> {
        let filter = GlobalFilter::new(&self.state.global_filter);
        self.data
            .iter()
            .filter(|row| filter.matches(*row, &self.columns))
            .collect()
    }

    /// Rows after filter and sort. Ties keep input order.
    fn sorted_filtered(&self) -> Vec<&R> {
        let rows = self.filtered();
        let Some(entry) = self.state.sorting.first() else {
            return rows;
        };
        let Some(column) = self
            .column(&entry.column_id)
            .filter(|column| column.can_sort())
        else {
            return rows;
        };
        let mut keyed: Vec<_> = rows.into_iter().map(|row| (column.value(row), row)).collect();
        keyed.sort_by(|(a, _), (b, _)| entry.direction.apply(compare_values(a, b)));
        keyed.into_iter().map(|(_, row)| row).collect()
    }

    /// Rows of the current page, in display order.
    pub fn visible_rows(&self) -> Vec<&R> {
        match self.mode {
            PaginationMode::Manual { .. } => self.data.iter().collect(),
            PaginationMode::Client => {
                let pagination = self.state.pagination;
                self.sorted_filtered()
                    .into_iter()
                    .skip(pagination.first_row())
                    .take(pagination.page_size)
                    .collect()
            }
        }
    }

    /// Rows of the current page with the cells of the visible columns.
    pub fn row_model(&self) -> Vec<RowView<'_, R>> {
        let columns = self.visible_columns();
        self.visible_rows()
            .into_iter()
            .enumerate()
            .map(|(index, row)| RowView {
                row,
                index,
                cells: columns
                    .iter()
                    .map(|column| Cell {
                        column_id: column.id(),
                        value: column.value(row),
                        text: column.cell_text(row),
                        align: column.get_align(),
                        max_width: column.get_max_width(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Header row for the visible columns.
    pub fn header_groups(&self) -> Vec<HeaderGroup> {
        let headers = self
            .visible_columns()
            .into_iter()
            .enumerate()
            .map(|(index, column)| {
                let can_sort = column.can_sort();
                let sort = self.column_sort(column.id());
                let ctx = HeaderContext {
                    column_id: column.id(),
                    sort,
                    can_sort,
                };
                Header {
                    column_id: column.id().to_string(),
                    index,
                    text: column.header_text(&ctx),
                    can_sort,
                    sort,
                    next_sort: if can_sort { next_in_cycle(sort) } else { None },
                    align: column.get_align(),
                    max_width: column.get_max_width(),
                }
            })
            .collect();
        vec![HeaderGroup {
            id: "0".to_string(),
            headers,
        }]
    }

    /// Rows that pass the global filter. In manual mode, the data length.
    pub fn filtered_row_count(&self) -> usize {
        match self.mode {
            PaginationMode::Manual { .. } => self.data.len(),
            PaginationMode::Client => {
                let filter = GlobalFilter::new(&self.state.global_filter);
                self.data
                    .iter()
                    .filter(|row| filter.matches(*row, &self.columns))
                    .count()
            }
        }
    }

    pub fn page_count(&self) -> usize {
        match self.mode {
            PaginationMode::Manual { page_count } => page_count,
            PaginationMode::Client => {
                page_count_for(self.filtered_row_count(), self.state.pagination.page_size)
            }
        }
    }

    pub fn can_previous_page(&self) -> bool {
        self.state.pagination.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.state.pagination.page_index + 1 < self.page_count()
    }

    /// `true` when there is nothing to show: no data, or every row filtered
    /// out.
    pub fn is_empty(&self) -> bool {
        self.filtered_row_count() == 0
    }

    // ========================================================================
    // Columns
    // ========================================================================

    pub fn column(&self, column_id: &str) -> Option<&ColumnDef<R>> {
        self.columns.iter().find(|c| c.id() == column_id)
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDef<R>> {
        self.columns
            .iter()
            .filter(|c| self.state.is_visible(c.id()))
            .collect()
    }

    /// Columns the column toggle lists.
    pub fn hideable_columns(&self) -> Vec<&ColumnDef<R>> {
        self.columns.iter().filter(|c| c.can_hide()).collect()
    }

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        self.state.is_visible(column_id)
    }

    pub fn column_sort(&self, column_id: &str) -> Option<SortDirection> {
        self.state.sort_for(column_id)
    }

    /// Sort the column would have after one more click. `None` when the
    /// click clears the sort or the column cannot sort.
    pub fn next_sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        if self.column(column_id).is_some_and(|c| c.can_sort()) {
            next_in_cycle(self.column_sort(column_id))
        } else {
            None
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn pagination(&self) -> PaginationState {
        self.state.pagination
    }

    pub fn columns(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }
}

impl<R> std::fmt::Debug for TableEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableEngine")
            .field("rows", &self.data.len())
            .field("columns", &self.columns)
            .field("state", &self.state)
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone)]
    struct Row {
        id: String,
        name: String,
        n: i64,
    }

    impl TableRow for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, key: &str) -> Value<'_> {
            match key {
                "name" => Value::from(self.name.as_str()),
                "n" => Value::from(self.n),
                _ => Value::None,
            }
        }
    }

    fn rows(count: usize) -> Vec<Row> {
        (0..count)
            .map(|i| Row {
                id: format!("r{i}"),
                name: format!("row {i}"),
                n: (count - i) as i64,
            })
            .collect()
    }

    fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef::accessor("name", "Name"),
            ColumnDef::accessor("n", "N"),
            ColumnDef::display("actions", "").hideable(false),
        ]
    }

    fn ids(engine: &TableEngine<Row>) -> Vec<String> {
        engine
            .visible_rows()
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }

    #[test]
    fn unsortable_column_is_noop() {
        let mut engine = TableEngine::new(rows(3), columns());
        engine.toggle_sort("actions");
        engine.toggle_sort("missing");
        assert!(engine.state().sorting.is_empty());
    }

    #[test]
    fn sorting_a_new_column_replaces_the_old_sort() {
        let mut engine = TableEngine::new(rows(3), columns());
        engine.toggle_sort("name");
        engine.toggle_sort("n");
        assert_eq!(engine.state().sorting, vec![SortEntry::asc("n")]);
        assert_eq!(ids(&engine), vec!["r2", "r1", "r0"]);
    }

    #[test]
    fn set_sorting_validates_column() {
        let mut engine = TableEngine::new(rows(3), columns());
        engine.set_sorting(Some(SortEntry::desc("actions")));
        assert!(engine.state().sorting.is_empty());
        engine.set_sorting(Some(SortEntry::desc("n")));
        assert_eq!(engine.column_sort("n"), Some(SortDirection::Desc));
        engine.clear_sorting();
        assert_eq!(engine.column_sort("n"), None);
    }

    #[test]
    fn filter_clamps_page_index() {
        let mut engine = TableEngine::new(rows(25), columns());
        engine.last_page();
        assert_eq!(engine.pagination().page_index, 2);
        engine.set_global_filter("row 1");
        // "row 1" and "row 10".."row 19"
        assert_eq!(engine.filtered_row_count(), 11);
        assert_eq!(engine.pagination().page_index, 1);
        assert_eq!(ids(&engine), vec!["r19"]);
    }

    #[test]
    fn set_data_clamps_page_index() {
        let mut engine = TableEngine::new(rows(30), columns());
        engine.set_page_index(2);
        engine.set_data(rows(4));
        assert_eq!(engine.pagination().page_index, 0);
        assert_eq!(engine.visible_rows().len(), 4);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let mut engine = TableEngine::new(rows(11), columns());
        engine.set_page_index(99);
        assert_eq!(engine.pagination().page_index, 1);
    }

    #[test]
    fn page_size_change_rescales_index() {
        let mut engine = TableEngine::new(rows(100), columns());
        engine.set_page_index(5);
        engine.set_page_size(20);
        assert_eq!(engine.pagination().page_index, 2);
        engine.set_page_size(0);
        assert_eq!(engine.pagination().page_size, 1);
        assert_eq!(engine.pagination().page_index, 40);
    }

    #[test]
    fn callbacks_fire_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let seen_cb = Rc::clone(&seen);
        let sizes_cb = Rc::clone(&sizes);
        let mut engine = TableEngine::new(rows(30), columns())
            .on_page_index_change(move |i| seen_cb.borrow_mut().push(i))
            .on_page_size_change(move |s| sizes_cb.borrow_mut().push(s));

        engine.previous_page();
        engine.next_page();
        engine.set_page_index(1);
        engine.set_page_size(10);
        engine.set_page_size(30);

        assert_eq!(*seen.borrow(), vec![1, 0]);
        assert_eq!(*sizes.borrow(), vec![30]);
    }

    #[test]
    fn manual_mode_returns_data_as_given() {
        let mut engine = TableEngine::new(rows(3), columns()).manual_pagination(7);
        engine.set_global_filter("nothing matches this");
        engine.toggle_sort("n");
        assert_eq!(ids(&engine), vec!["r0", "r1", "r2"]);
        assert_eq!(engine.page_count(), 7);
        engine.set_page_index(10);
        assert_eq!(engine.pagination().page_index, 6);
        assert!(!engine.can_next_page());
    }

    #[test]
    fn manual_mode_notifies_caller() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_cb = Rc::clone(&seen);
        let mut engine = TableEngine::new(rows(10), columns())
            .manual_pagination(5)
            .on_page_index_change(move |i| seen_cb.borrow_mut().push(i));
        engine.next_page();
        engine.last_page();
        assert_eq!(*seen.borrow(), vec![1, 4]);
    }

    #[test]
    fn sync_pagination_does_not_notify() {
        let seen = Rc::new(RefCell::new(0));
        let seen_cb = Rc::clone(&seen);
        let mut engine = TableEngine::new(rows(10), columns())
            .manual_pagination(4)
            .on_page_index_change(move |_| *seen_cb.borrow_mut() += 1);
        engine.sync_pagination(Some(3), Some(25));
        assert_eq!(engine.pagination(), PaginationState::new(3, 25));
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn set_page_count_switches_to_manual() {
        let mut engine = TableEngine::new(rows(3), columns());
        engine.set_page_count(3);
        assert!(engine.mode().is_manual());
        assert_eq!(engine.page_count(), 3);
    }

    #[test]
    fn hidden_columns_leave_row_model() {
        let mut engine = TableEngine::new(rows(2), columns());
        engine.toggle_column_visibility("name", false);
        let model = engine.row_model();
        assert_eq!(model[0].cells.len(), 2);
        assert!(model[0].cell("name").is_none());
        assert_eq!(model[0].cell("n").map(|c| c.text.as_str()), Some("2"));
    }

    #[test]
    fn non_hideable_column_stays_visible() {
        let mut engine = TableEngine::new(rows(2), columns());
        engine.toggle_column_visibility("actions", false);
        assert!(engine.is_column_visible("actions"));
        assert_eq!(engine.hideable_columns().len(), 2);
    }

    #[test]
    fn hidden_sorted_column_keeps_its_sort() {
        let mut engine = TableEngine::new(rows(3), columns());
        engine.toggle_sort("n");
        engine.toggle_column_visibility("n", false);
        assert_eq!(ids(&engine), vec!["r2", "r1", "r0"]);
        let headers = &engine.header_groups()[0].headers;
        assert!(headers.iter().all(|h| h.column_id != "n"));

        engine.toggle_column_visibility("n", true);
        let headers = &engine.header_groups()[0].headers;
        let n = headers.iter().find(|h| h.column_id == "n");
        assert_eq!(n.and_then(|h| h.sort), Some(SortDirection::Asc));
    }

    #[test]
    fn header_groups_report_next_sort() {
        let mut engine = TableEngine::new(rows(2), columns());
        engine.toggle_sort("n");
        let group = &engine.header_groups()[0];
        assert_eq!(group.headers.len(), 3);
        let n = &group.headers[1];
        assert_eq!(n.sort, Some(SortDirection::Asc));
        assert_eq!(n.next_sort, Some(SortDirection::Desc));
        assert_eq!(n.sort_title(), Some("Sort descending"));
        assert_eq!(group.headers[2].sort_title(), None);
        assert_eq!(engine.next_sort_direction("actions"), None);
        assert_eq!(engine.next_sort_direction("name"), Some(SortDirection::Asc));
    }

    #[test]
    fn initial_state_is_validated() {
        let engine = TableEngine::new(rows(15), columns()).with_initial_state(
            InitialState::new()
                .sort(SortEntry::asc("actions"))
                .hide("actions")
                .hide("name")
                .page_index(9),
        );
        assert!(engine.state().sorting.is_empty());
        assert!(engine.is_column_visible("actions"));
        assert!(!engine.is_column_visible("name"));
        assert_eq!(engine.pagination().page_index, 1);
    }

    #[test]
    fn empty_everything_is_total() {
        let mut engine: TableEngine<Row> = TableEngine::new(Vec::new(), Vec::new());
        engine.toggle_sort("x");
        engine.set_global_filter("abc");
        engine.next_page();
        engine.previous_page();
        engine.last_page();
        engine.set_page_size(0);
        assert!(engine.is_empty());
        assert_eq!(engine.page_count(), 0);
        assert!(engine.visible_rows().is_empty());
        assert!(engine.row_model().is_empty());
        assert!(engine.header_groups()[0].headers.is_empty());
    }
}
