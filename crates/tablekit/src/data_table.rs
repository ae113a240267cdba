//! The data table widget.
//!
//! [`DataTable`] wires the engine to the toolbar, the pagination bar, the
//! row actions menu and the skeleton. Interaction comes in as
//! [`TableEvent`]s; every event is applied synchronously, and the next
//! [`view`](DataTable::view) or [`render`](DataTable::render) reflects it.
//!
//! Exactly one of three branches is shown:
//!
//! - **Loading** - the skeleton and the loading message. Loading wins over
//!   everything else, including an empty table.
//! - **Empty** - the empty state message. When rows exist but the filter
//!   excluded all of them, the toolbar stays so the filter can be cleared.
//! - **Populated** - toolbar, header, the rows of the current page, and the
//!   pagination bar when there is more than one page or paging is manual.
//!
//! ```rust
//! use tablekit::{DataTable, DataTableProps, TableEvent};
//! use tablekit_engine::{ColumnDef, TableRow, Value};
//! use tablekit_render::{OutputMode, ThemeRegistry};
//!
//! struct Tx { id: String, fee: u64 }
//!
//! impl TableRow for Tx {
//!     fn id(&self) -> &str { &self.id }
//!     fn field(&self, key: &str) -> Value<'_> {
//!         match key {
//!             "fee" => Value::from(self.fee),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let data = (1..=11)
//!     .map(|n| Tx { id: format!("sig{n}"), fee: 5000 + n })
//!     .collect();
//! let columns = vec![ColumnDef::accessor("fee", "Fee")];
//! let mut table = DataTable::new(DataTableProps::new(data, columns));
//!
//! let view = table.view();
//! assert_eq!(view.rows().len(), 10);
//! assert!(view.pagination().is_some());
//!
//! table.handle(TableEvent::SetFilter("5011".into()));
//! assert_eq!(table.view().rows().len(), 1);
//!
//! let out = table.render(&ThemeRegistry::new(), OutputMode::Text);
//! assert!(out.contains("5011"));
//! ```

use std::borrow::Cow;
use std::fmt;

use console::Style;
use tablekit_engine::{
    Align, ColumnDef, Header, HeaderGroup, InitialState, PageCallback, RowView, SortDirection,
    TableEngine, TableRow, DEFAULT_PAGE_SIZE_OPTIONS,
};
use tablekit_render::{
    display_width, truncate_end, LineType, OutputMode, Region, ThemeRegistry, ThemeTokens,
    DEFAULT_THEME,
};
use tracing::{debug, trace};

use crate::dropdown::DropdownMenu;
use crate::layout::{fit, Frame};
use crate::pagination::{PaginationAction, PaginationControls, PaginationView};
use crate::row_actions::{RowAction, RowActions};
use crate::skeleton::Skeleton;
use crate::toolbar::Toolbar;

/// Message shown while loading.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading data...";

/// Message shown when there are no rows.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available.";

/// Label of a table without a `table_id`.
pub const DEFAULT_TABLE_LABEL: &str = "Data table";

const ACTIONS_ICON: &str = "...";

/// Replaces the default rendering of a body row.
pub type RowRenderer<R> = Box<dyn Fn(&RowView<'_, R>, &ThemeTokens, OutputMode) -> String>;

/// Replaces the default rendering of a header row.
pub type HeaderRenderer = Box<dyn Fn(&HeaderGroup, &ThemeTokens, OutputMode) -> String>;

/// Everything a [`DataTable`] is built from.
///
/// Only data and columns are required; everything else has a default.
pub struct DataTableProps<R> {
    data: Vec<R>,
    columns: Vec<ColumnDef<R>>,
    is_loading: bool,
    loading_message: String,
    empty_state_message: String,
    page_size_options: Vec<usize>,
    theme: String,
    table_id: Option<String>,
    container_style: Option<Style>,
    page_count: Option<usize>,
    page_index: Option<usize>,
    page_size: Option<usize>,
    on_page_index_change: Option<PageCallback>,
    on_page_size_change: Option<PageCallback>,
    row_renderer: Option<RowRenderer<R>>,
    header_renderer: Option<HeaderRenderer>,
    row_actions: Option<RowActions<R>>,
    initial_state: InitialState,
    skeleton: Skeleton,
    width: Option<usize>,
}

impl<R> DataTableProps<R> {
    pub fn new(data: Vec<R>, columns: Vec<ColumnDef<R>>) -> Self {
        DataTableProps {
            data,
            columns,
            is_loading: false,
            loading_message: DEFAULT_LOADING_MESSAGE.to_string(),
            empty_state_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            theme: DEFAULT_THEME.to_string(),
            table_id: None,
            container_style: None,
            page_count: None,
            page_index: None,
            page_size: None,
            on_page_index_change: None,
            on_page_size_change: None,
            row_renderer: None,
            header_renderer: None,
            row_actions: None,
            initial_state: InitialState::new(),
            skeleton: Skeleton::new(),
            width: None,
        }
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    pub fn empty_state_message(mut self, message: impl Into<String>) -> Self {
        self.empty_state_message = message.into();
        self
    }

    pub fn page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Theme name, resolved against the registry at render time.
    pub fn theme(mut self, name: impl Into<String>) -> Self {
        self.theme = name.into();
        self
    }

    pub fn table_id(mut self, id: impl Into<String>) -> Self {
        self.table_id = Some(id.into());
        self
    }

    /// Style override for the container region (caption and messages).
    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = Some(style);
        self
    }

    /// Delegates paging to the caller: the data is one page, and there
    /// are `page_count` pages.
    pub fn page_count(mut self, page_count: usize) -> Self {
        self.page_count = Some(page_count);
        self
    }

    /// Caller-owned page index.
    pub fn page_index(mut self, index: usize) -> Self {
        self.page_index = Some(index);
        self
    }

    /// Caller-owned page size.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn on_page_index_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) + 'static,
    {
        self.on_page_index_change = Some(Box::new(f));
        self
    }

    pub fn on_page_size_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) + 'static,
    {
        self.on_page_size_change = Some(Box::new(f));
        self
    }

    pub fn row_renderer<F>(mut self, f: F) -> Self
    where
        F: Fn(&RowView<'_, R>, &ThemeTokens, OutputMode) -> String + 'static,
    {
        self.row_renderer = Some(Box::new(f));
        self
    }

    pub fn header_renderer<F>(mut self, f: F) -> Self
    where
        F: Fn(&HeaderGroup, &ThemeTokens, OutputMode) -> String + 'static,
    {
        self.header_renderer = Some(Box::new(f));
        self
    }

    pub fn row_actions(mut self, actions: RowActions<R>) -> Self {
        self.row_actions = Some(actions);
        self
    }

    pub fn initial_state(mut self, initial: InitialState) -> Self {
        self.initial_state = initial;
        self
    }

    pub fn skeleton(mut self, skeleton: Skeleton) -> Self {
        self.skeleton = skeleton;
        self
    }

    /// Available width. The pagination bar switches to its compact form
    /// when the full bar does not fit.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// A user interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Click on a column header.
    HeaderClick(String),
    /// Character typed into the filter input.
    FilterInput(char),
    FilterBackspace,
    FilterClear,
    /// Filter input replaced wholesale, as by a paste.
    SetFilter(String),
    /// Click on the column toggle button.
    ToggleColumnMenu,
    /// Click on an entry of the column toggle panel.
    ColumnMenuSelect(usize),
    SetColumnVisibility { column: String, visible: bool },
    Pagination(PaginationAction),
    /// Click on a row's actions button.
    ToggleRowActions(String),
    /// Click on an entry of the open row actions panel.
    RowMenuSelect(usize),
    RowAction { row_id: String, action: RowAction },
    /// Click anywhere outside the open menus.
    ClickOutside,
}

/// What the table shows right now.
#[derive(Debug)]
pub enum DataTableView<'a, R> {
    Loading {
        message: &'a str,
        skeleton: Skeleton,
    },
    Empty {
        message: &'a str,
        /// Rows exist but none pass the filter.
        show_toolbar: bool,
    },
    Populated(PopulatedView<'a, R>),
}

/// The populated branch.
#[derive(Debug)]
pub struct PopulatedView<'a, R> {
    /// Accessible label: the table id, or "Data table".
    pub label: &'a str,
    pub header_groups: Vec<HeaderGroup>,
    pub rows: Vec<RowView<'a, R>>,
    /// Present when the pagination bar is shown.
    pub pagination: Option<PaginationView>,
}

impl<'a, R> DataTableView<'a, R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataTableView::Loading { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DataTableView::Empty { .. })
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, DataTableView::Populated(_))
    }

    /// Loading or empty state message.
    pub fn message(&self) -> Option<&'a str> {
        match self {
            DataTableView::Loading { message, .. } | DataTableView::Empty { message, .. } => {
                Some(message)
            }
            DataTableView::Populated(_) => None,
        }
    }

    /// Rows on screen; empty unless populated.
    pub fn rows(&self) -> &[RowView<'a, R>] {
        match self {
            DataTableView::Populated(view) => &view.rows,
            _ => &[],
        }
    }

    pub fn pagination(&self) -> Option<&PaginationView> {
        match self {
            DataTableView::Populated(view) => view.pagination.as_ref(),
            _ => None,
        }
    }
}

/// A themeable data table.
pub struct DataTable<R> {
    engine: TableEngine<R>,
    is_loading: bool,
    loading_message: String,
    empty_state_message: String,
    theme: String,
    table_id: Option<String>,
    container_style: Option<Style>,
    toolbar: Toolbar,
    pagination: PaginationControls,
    skeleton: Skeleton,
    row_renderer: Option<RowRenderer<R>>,
    header_renderer: Option<HeaderRenderer>,
    row_actions: Option<RowActions<R>>,
    row_menu: Option<(String, DropdownMenu<RowAction>)>,
    width: Option<usize>,
}

impl<R: TableRow> DataTable<R> {
    pub fn new(props: DataTableProps<R>) -> Self {
        let mut engine = TableEngine::new(props.data, props.columns);
        // the mode decides the page count the initial page index is clamped to
        if let Some(page_count) = props.page_count {
            engine = engine.manual_pagination(page_count);
        }
        engine = engine.with_initial_state(props.initial_state);
        engine.sync_pagination(props.page_index, props.page_size);
        if let Some(cb) = props.on_page_index_change {
            engine = engine.on_page_index_change(cb);
        }
        if let Some(cb) = props.on_page_size_change {
            engine = engine.on_page_size_change(cb);
        }
        debug!(
            rows = engine.data().len(),
            columns = engine.columns().len(),
            manual = engine.mode().is_manual(),
            theme = %props.theme,
            "data table created"
        );

        let mut toolbar = Toolbar::new();
        toolbar.filter.set(engine.state().global_filter.clone());
        toolbar.columns.sync(&engine);

        DataTable {
            engine,
            is_loading: props.is_loading,
            loading_message: props.loading_message,
            empty_state_message: props.empty_state_message,
            theme: props.theme,
            table_id: props.table_id,
            container_style: props.container_style,
            toolbar,
            pagination: PaginationControls::new(props.page_size_options),
            skeleton: props.skeleton,
            row_renderer: props.row_renderer,
            header_renderer: props.header_renderer,
            row_actions: props.row_actions,
            row_menu: None,
            width: props.width,
        }
    }

    // ========================================================================
    // Events and updates
    // ========================================================================

    /// Applies one user interaction.
    pub fn handle(&mut self, event: TableEvent) {
        trace!(?event, "table event");
        match event {
            TableEvent::HeaderClick(column) => self.engine.toggle_sort(&column),
            TableEvent::FilterInput(c) => {
                self.toolbar.filter.insert(c);
                self.apply_filter();
            }
            TableEvent::FilterBackspace => {
                self.toolbar.filter.backspace();
                self.apply_filter();
            }
            TableEvent::FilterClear => {
                self.toolbar.filter.clear();
                self.apply_filter();
            }
            TableEvent::SetFilter(text) => {
                self.toolbar.filter.set(text);
                self.apply_filter();
            }
            TableEvent::ToggleColumnMenu => {
                self.row_menu = None;
                self.toolbar.columns.menu_mut().toggle();
            }
            TableEvent::ColumnMenuSelect(index) => {
                if let Some((column, visible)) = self.toolbar.columns.select(index) {
                    self.engine.toggle_column_visibility(&column, visible);
                }
            }
            TableEvent::SetColumnVisibility { column, visible } => {
                self.engine.toggle_column_visibility(&column, visible);
            }
            TableEvent::Pagination(action) => self.pagination.apply(&mut self.engine, action),
            TableEvent::ToggleRowActions(row_id) => self.toggle_row_menu(row_id),
            TableEvent::RowMenuSelect(index) => {
                let selected = self
                    .row_menu
                    .as_mut()
                    .and_then(|(row_id, menu)| menu.select(index).map(|a| (row_id.clone(), a)));
                if let Some((row_id, action)) = selected {
                    self.run_row_action(&row_id, action);
                }
            }
            TableEvent::RowAction { row_id, action } => self.run_row_action(&row_id, action),
            TableEvent::ClickOutside => {
                self.toolbar.columns.menu_mut().click_outside();
                self.row_menu = None;
            }
        }
        self.refresh();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        debug!(is_loading, "loading set");
        self.is_loading = is_loading;
    }

    /// Replaces the rows. Sort, filter and visibility are kept.
    pub fn set_data(&mut self, data: Vec<R>) {
        self.engine.set_data(data);
        self.refresh();
    }

    /// Takes back caller-owned pagination values.
    pub fn sync_pagination(&mut self, page_index: Option<usize>, page_size: Option<usize>) {
        self.engine.sync_pagination(page_index, page_size);
        self.refresh();
    }

    /// Updates the caller-supplied page count.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.engine.set_page_count(page_count);
        self.refresh();
    }

    fn apply_filter(&mut self) {
        let text = self.toolbar.filter.value().to_string();
        self.engine.set_global_filter(text);
    }

    fn toggle_row_menu(&mut self, row_id: String) {
        let Some(actions) = self.row_actions.as_ref().filter(|a| !a.is_empty()) else {
            return;
        };
        if self.row_menu.as_ref().is_some_and(|(open, _)| *open == row_id) {
            self.row_menu = None;
            return;
        }
        if !self.engine.visible_rows().iter().any(|row| row.id() == row_id) {
            trace!(row = %row_id, "row actions ignored, row not on page");
            return;
        }
        self.toolbar.columns.menu_mut().click_outside();
        let mut menu = actions.menu();
        menu.open();
        self.row_menu = Some((row_id, menu));
    }

    fn run_row_action(&mut self, row_id: &str, action: RowAction) {
        self.row_menu = None;
        let Some(actions) = self.row_actions.as_mut() else {
            return;
        };
        let Some(row) = self.engine.data().iter().find(|row| row.id() == row_id) else {
            trace!(row = row_id, "row action ignored, unknown row");
            return;
        };
        actions.invoke(action, row);
    }

    /// Rebuilds derived widget state after a change.
    fn refresh(&mut self) {
        self.toolbar.columns.sync(&self.engine);
        if let Some((row_id, _)) = &self.row_menu {
            if !self.engine.visible_rows().iter().any(|row| row.id() == row_id) {
                self.row_menu = None;
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn engine(&self) -> &TableEngine<R> {
        &self.engine
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn theme_name(&self) -> &str {
        &self.theme
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    /// Accessible label of the table.
    pub fn label(&self) -> &str {
        self.table_id.as_deref().unwrap_or(DEFAULT_TABLE_LABEL)
    }

    /// Row whose actions menu is open.
    pub fn open_row_menu(&self) -> Option<&str> {
        self.row_menu.as_ref().map(|(row_id, _)| row_id.as_str())
    }

    fn show_pagination(&self) -> bool {
        self.engine.page_count() > 1 || self.engine.mode().is_manual()
    }

    fn has_row_actions(&self) -> bool {
        self.row_actions.as_ref().is_some_and(|a| !a.is_empty())
    }

    // ========================================================================
    // View and rendering
    // ========================================================================

    /// The branch and content currently on screen.
    pub fn view(&self) -> DataTableView<'_, R> {
        if self.is_loading {
            trace!(branch = "loading", "table view");
            return DataTableView::Loading {
                message: &self.loading_message,
                skeleton: self.skeleton,
            };
        }
        if self.engine.is_empty() {
            let show_toolbar = !self.engine.data().is_empty();
            trace!(branch = "empty", show_toolbar, "table view");
            return DataTableView::Empty {
                message: &self.empty_state_message,
                show_toolbar,
            };
        }
        let pagination = self
            .show_pagination()
            .then(|| self.pagination.view(&self.engine));
        trace!(branch = "populated", paginated = pagination.is_some(), "table view");
        DataTableView::Populated(PopulatedView {
            label: self.label(),
            header_groups: self.engine.header_groups(),
            rows: self.engine.row_model(),
            pagination,
        })
    }

    /// Renders the table with the named theme from the registry. Unknown
    /// theme names render with the registry's default theme.
    pub fn render(&self, registry: &ThemeRegistry, mode: OutputMode) -> String {
        let tokens = self.theme_tokens(registry);
        let theme: &ThemeTokens = &tokens;
        let lines = match self.view() {
            DataTableView::Loading { message, skeleton } => {
                let mut lines = skeleton.render_lines(theme, mode);
                lines.push(theme.paint(Region::Container, message, mode));
                lines
            }
            DataTableView::Empty {
                message,
                show_toolbar,
            } => {
                let mut lines = if show_toolbar {
                    self.toolbar.render(theme, mode, 0)
                } else {
                    Vec::new()
                };
                lines.push(theme.paint(Region::Container, message, mode));
                lines
            }
            DataTableView::Populated(view) => self.render_populated(&view, theme, mode),
        };
        lines.join("\n")
    }

    fn theme_tokens<'r>(&self, registry: &'r ThemeRegistry) -> Cow<'r, ThemeTokens> {
        let base = registry.resolve(&self.theme);
        match &self.container_style {
            Some(style) => Cow::Owned(base.clone().with_style(Region::Container, style.clone())),
            None => Cow::Borrowed(base),
        }
    }

    fn render_populated(
        &self,
        view: &PopulatedView<'_, R>,
        theme: &ThemeTokens,
        mode: OutputMode,
    ) -> Vec<String> {
        let actions = self.has_row_actions();
        let headers: &[Header] = view
            .header_groups
            .first()
            .map(|group| group.headers.as_slice())
            .unwrap_or(&[]);

        let cell_texts: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| match cell.max_width {
                        Some(max) => truncate_end(&cell.text, max),
                        None => cell.text.clone(),
                    })
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                cell_texts
                    .iter()
                    .filter_map(|texts| texts.get(i))
                    .map(|t| display_width(t))
                    .fold(header_width(header), usize::max)
            })
            .collect();
        if actions {
            widths.push(display_width(ACTIONS_ICON));
        }
        let frame = Frame::new(theme.border(), widths);

        let mut lines = Vec::new();
        if let Some(id) = &self.table_id {
            lines.push(theme.paint(Region::TableWrapper, id, mode));
        }
        lines.extend(self.toolbar.render(theme, mode, frame.width()));
        lines.extend(frame.rule(theme, mode, LineType::Top));

        for group in &view.header_groups {
            let line = match &self.header_renderer {
                Some(render) => render(group, theme, mode),
                None => {
                    let mut cells: Vec<String> = group
                        .headers
                        .iter()
                        .zip(frame.widths())
                        .map(|(header, &width)| header_cell(header, width, theme, mode))
                        .collect();
                    if actions {
                        cells.push(" ".repeat(display_width(ACTIONS_ICON)));
                    }
                    frame.line(theme, mode, &cells)
                }
            };
            lines.push(line);
        }
        lines.extend(frame.rule(theme, mode, LineType::Middle));

        for (row, texts) in view.rows.iter().zip(&cell_texts) {
            let menu_open = self
                .row_menu
                .as_ref()
                .filter(|(row_id, _)| row_id == row.row.id())
                .map(|(_, menu)| menu);
            let line = match &self.row_renderer {
                Some(render) => render(row, theme, mode),
                None => {
                    let mut cells: Vec<String> = row
                        .cells
                        .iter()
                        .zip(texts)
                        .zip(frame.widths())
                        .map(|((cell, text), &width)| {
                            theme.paint(Region::Cell, &fit(text, width, cell.align), mode)
                        })
                        .collect();
                    if actions {
                        let region = if menu_open.is_some() {
                            Region::RowActionsButton
                        } else {
                            Region::RowActionsIcon
                        };
                        cells.push(theme.paint(region, ACTIONS_ICON, mode));
                    }
                    frame.line(theme, mode, &cells)
                }
            };
            lines.push(line);

            if let Some(menu) = menu_open {
                let indent = " ".repeat(frame.column_offset(headers.len()));
                lines.extend(
                    menu.render(theme, mode)
                        .into_iter()
                        .skip(1)
                        .map(|panel| format!("{}{}", indent, panel)),
                );
            }
        }
        lines.extend(frame.rule(theme, mode, LineType::Bottom));

        if let Some(pagination) = &view.pagination {
            lines.push(self.pagination.render(pagination, theme, mode, self.width));
        }
        lines
    }
}

fn sort_icon(header: &Header) -> Option<(&'static str, Region)> {
    if !header.can_sort {
        return None;
    }
    Some(match header.sort {
        Some(SortDirection::Asc) => ("▲", Region::HeaderSortIconActive),
        Some(SortDirection::Desc) => ("▼", Region::HeaderSortIconActive),
        None => ("↕", Region::HeaderSortIcon),
    })
}

fn header_width(header: &Header) -> usize {
    display_width(&header.text) + sort_icon(header).map_or(0, |(icon, _)| 1 + display_width(icon))
}

fn header_cell(header: &Header, width: usize, theme: &ThemeTokens, mode: OutputMode) -> String {
    let extra = width.saturating_sub(header_width(header));
    let (left, right) = match header.align {
        Align::Left => (0, extra),
        Align::Right => (extra, 0),
        Align::Center => (extra / 2, extra - extra / 2),
    };
    let mut out = " ".repeat(left);
    out.push_str(&theme.paint(Region::HeaderCell, &header.text, mode));
    if let Some((icon, region)) = sort_icon(header) {
        out.push(' ');
        out.push_str(&theme.paint(region, icon, mode));
    }
    out.push_str(&" ".repeat(right));
    out
}

impl<R> fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("engine", &self.engine)
            .field("is_loading", &self.is_loading)
            .field("theme", &self.theme)
            .field("table_id", &self.table_id)
            .field("row_actions", &self.row_actions)
            .field("open_row_menu", &self.row_menu.as_ref().map(|(id, _)| id))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use tablekit_engine::Value;

    use super::*;

    struct Row {
        id: String,
        n: i64,
    }

    impl TableRow for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, key: &str) -> Value<'_> {
            match key {
                "n" => Value::from(self.n),
                _ => Value::None,
            }
        }
    }

    fn rows(count: i64) -> Vec<Row> {
        (0..count)
            .map(|n| Row {
                id: format!("r{n}"),
                n,
            })
            .collect()
    }

    fn table(count: i64) -> DataTable<Row> {
        DataTable::new(DataTableProps::new(
            rows(count),
            vec![ColumnDef::accessor("n", "N")],
        ))
    }

    #[test]
    fn header_cell_widths() {
        let header = Header {
            column_id: "n".into(),
            index: 0,
            text: "N".into(),
            can_sort: true,
            sort: Some(SortDirection::Desc),
            next_sort: None,
            align: Align::Right,
            max_width: None,
        };
        let theme = ThemeTokens::new("plain");
        assert_eq!(header_width(&header), 3);
        assert_eq!(header_cell(&header, 5, &theme, OutputMode::Text), "  N ▼");
    }

    #[test]
    fn label_defaults() {
        assert_eq!(table(1).label(), "Data table");
        let named = DataTable::new(
            DataTableProps::new(rows(1), vec![ColumnDef::accessor("n", "N")]).table_id("txs"),
        );
        assert_eq!(named.label(), "txs");
        assert_eq!(named.table_id(), Some("txs"));
    }

    #[test]
    fn loading_wins_over_empty() {
        let mut t = table(0);
        t.set_loading(true);
        let view = t.view();
        assert!(view.is_loading());
        assert_eq!(view.message(), Some("Loading data..."));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn filtered_out_keeps_toolbar() {
        let mut t = table(3);
        t.handle(TableEvent::SetFilter("zzz".into()));
        assert!(matches!(
            t.view(),
            DataTableView::Empty {
                show_toolbar: true,
                ..
            }
        ));
        t.handle(TableEvent::FilterClear);
        assert!(t.view().is_populated());
    }

    #[test]
    fn custom_row_renderer_receives_cells() {
        let t = DataTable::new(
            DataTableProps::new(rows(2), vec![ColumnDef::accessor("n", "N")]).row_renderer(
                |row, _theme, _mode| format!("#{} -> {}", row.row.id, row.cells[0].text),
            ),
        );
        let out = t.render(&ThemeRegistry::new(), OutputMode::Text);
        assert!(out.contains("#r0 -> 0"));
        assert!(out.contains("#r1 -> 1"));
    }

    #[test]
    fn row_menu_closes_when_row_leaves_page() {
        let mut t = DataTable::new(
            DataTableProps::new(rows(11), vec![ColumnDef::accessor("n", "N")])
                .row_actions(RowActions::new().on_view(|_| {})),
        );
        t.handle(TableEvent::ToggleRowActions("r3".into()));
        assert_eq!(t.open_row_menu(), Some("r3"));
        t.handle(TableEvent::Pagination(PaginationAction::Next));
        assert_eq!(t.open_row_menu(), None);

        // only rows on the current page have a menu button
        t.handle(TableEvent::ToggleRowActions("r3".into()));
        assert_eq!(t.open_row_menu(), None);
        t.handle(TableEvent::ToggleRowActions("r10".into()));
        assert_eq!(t.open_row_menu(), Some("r10"));
    }

    #[test]
    fn menus_close_each_other() {
        let mut t = DataTable::new(
            DataTableProps::new(rows(3), vec![ColumnDef::accessor("n", "N")])
                .row_actions(RowActions::new().on_edit(|_| {})),
        );
        t.handle(TableEvent::ToggleRowActions("r1".into()));
        t.handle(TableEvent::ToggleColumnMenu);
        assert_eq!(t.open_row_menu(), None);
        assert!(t.toolbar().columns.menu().is_open());

        t.handle(TableEvent::ToggleRowActions("r1".into()));
        assert!(!t.toolbar().columns.menu().is_open());
        t.handle(TableEvent::ClickOutside);
        assert_eq!(t.open_row_menu(), None);
    }

    #[test]
    fn no_callbacks_no_menu() {
        let mut t = DataTable::new(
            DataTableProps::new(rows(3), vec![ColumnDef::accessor("n", "N")])
                .row_actions(RowActions::new()),
        );
        t.handle(TableEvent::ToggleRowActions("r1".into()));
        assert_eq!(t.open_row_menu(), None);
        let out = t.render(&ThemeRegistry::new(), OutputMode::Text);
        assert!(!out.contains("..."));
    }
}
