//! Column definitions.
//!
//! A [`ColumnDef`] says how to read a value out of a row, how to label the
//! column, how to turn a row into cell text, and whether the column may be
//! sorted, hidden or searched. Columns are supplied by the caller and never
//! mutated by the engine.

use std::fmt;

use crate::ordering::SortDirection;
use crate::row::TableRow;
use crate::value::Value;

/// Computed accessor: reads a value out of a row.
pub type AccessorFn<R> = Box<dyn for<'a> Fn(&'a R) -> Value<'a>>;

/// Custom cell renderer: turns a row into cell text.
pub type CellFn<R> = Box<dyn Fn(&R) -> String>;

/// Header renderer: turns the header context into header text.
pub type HeaderFn = Box<dyn Fn(&HeaderContext<'_>) -> String>;

/// How a column reads its value.
pub enum Accessor<R> {
    /// Read through [`TableRow::field`] with this key.
    Key(String),
    /// Compute the value from the row.
    Fn(AccessorFn<R>),
    /// Display-only column with no value (e.g. an actions column).
    None,
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Accessor::Fn(_) => f.write_str("Fn(..)"),
            Accessor::None => f.write_str("None"),
        }
    }
}

/// What a header renderer gets to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderContext<'a> {
    /// Id of the column being rendered.
    pub column_id: &'a str,
    /// Current sort of the column, if any.
    pub sort: Option<SortDirection>,
    /// Whether the column can be sorted.
    pub can_sort: bool,
}

/// Column header content.
pub enum HeaderContent {
    /// Static label.
    Text(String),
    /// Label computed at render time.
    Render(HeaderFn),
}

impl fmt::Debug for HeaderContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderContent::Text(text) => f.debug_tuple("Text").field(text).finish(),
            HeaderContent::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// Definition of one table column.
///
/// ```
/// use tablekit_engine::{ColumnDef, TableRow, Value};
///
/// struct Tx { id: String, fee: u64 }
///
/// impl TableRow for Tx {
///     fn id(&self) -> &str { &self.id }
///     fn field(&self, key: &str) -> Value<'_> {
///         match key {
///             "fee" => Value::from(self.fee),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let fee = ColumnDef::<Tx>::accessor("fee", "Fee")
///     .cell(|tx| format!("{} lamports", tx.fee));
/// let actions = ColumnDef::<Tx>::display("actions", "").hideable(false);
///
/// assert!(fee.can_sort());
/// assert!(!actions.can_sort());
/// assert!(!actions.can_hide());
/// ```
pub struct ColumnDef<R> {
    id: String,
    accessor: Accessor<R>,
    header: HeaderContent,
    cell: Option<CellFn<R>>,
    sortable: bool,
    hideable: bool,
    global_filter: bool,
    label: Option<String>,
    align: Align,
    max_width: Option<usize>,
}

impl<R> ColumnDef<R> {
    fn with_accessor(id: String, header: String, accessor: Accessor<R>) -> Self {
        let has_value = !matches!(accessor, Accessor::None);
        ColumnDef {
            id,
            accessor,
            header: HeaderContent::Text(header),
            cell: None,
            sortable: has_value,
            hideable: true,
            global_filter: has_value,
            label: None,
            align: Align::Left,
            max_width: None,
        }
    }

    /// Column that reads the row field named by `id`.
    pub fn accessor(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        let key = id.clone();
        Self::with_accessor(id, header.into(), Accessor::Key(key))
    }

    /// Column whose value is computed from the row.
    pub fn computed<F>(id: impl Into<String>, header: impl Into<String>, f: F) -> Self
    where
        F: for<'a> Fn(&'a R) -> Value<'a> + 'static,
    {
        Self::with_accessor(id.into(), header.into(), Accessor::Fn(Box::new(f)))
    }

    /// Display-only column. It has no value, so it never sorts or matches
    /// the global filter; give it a [`cell`](Self::cell) renderer.
    pub fn display(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self::with_accessor(id.into(), header.into(), Accessor::None)
    }

    /// Reads the field `key` instead of the field named after the column id.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.accessor = Accessor::Key(key.into());
        self
    }

    /// Replaces the static header with a render function.
    pub fn header_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&HeaderContext<'_>) -> String + 'static,
    {
        self.header = HeaderContent::Render(Box::new(f));
        self
    }

    /// Custom cell renderer.
    pub fn cell<F>(mut self, f: F) -> Self
    where
        F: Fn(&R) -> String + 'static,
    {
        self.cell = Some(Box::new(f));
        self
    }

    /// Allows or forbids sorting on this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Allows or forbids hiding this column from the column toggle.
    pub fn hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    /// Includes or excludes this column from global filter matching.
    pub fn global_filter(mut self, enabled: bool) -> Self {
        self.global_filter = enabled;
        self
    }

    /// Human-readable label used by the column toggle.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Alignment of the column's cells.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Maximum display width of the column's cells; longer text is truncated.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn accessor_kind(&self) -> &Accessor<R> {
        &self.accessor
    }

    pub fn header(&self) -> &HeaderContent {
        &self.header
    }

    pub fn get_align(&self) -> Align {
        self.align
    }

    pub fn get_max_width(&self) -> Option<usize> {
        self.max_width
    }

    /// Whether the column has an accessor.
    pub fn has_value(&self) -> bool {
        !matches!(self.accessor, Accessor::None)
    }

    /// A column sorts only if it has a value and did not opt out.
    pub fn can_sort(&self) -> bool {
        self.sortable && self.has_value()
    }

    pub fn can_hide(&self) -> bool {
        self.hideable
    }

    /// A column takes part in the global filter only if it has a value and
    /// did not opt out.
    pub fn can_global_filter(&self) -> bool {
        self.global_filter && self.has_value()
    }

    /// Label for the column toggle: explicit label, else the static header,
    /// else the column id.
    pub fn display_label(&self) -> &str {
        if let Some(label) = self.label.as_deref() {
            return label;
        }
        match &self.header {
            HeaderContent::Text(text) if !text.is_empty() => text,
            _ => &self.id,
        }
    }

    /// Header text for the given context.
    pub fn header_text(&self, ctx: &HeaderContext<'_>) -> String {
        match &self.header {
            HeaderContent::Text(text) => text.clone(),
            HeaderContent::Render(f) => f(ctx),
        }
    }
}

impl<R: TableRow> ColumnDef<R> {
    /// Raw value of this column for a row.
    pub fn value<'a>(&self, row: &'a R) -> Value<'a> {
        match &self.accessor {
            Accessor::Key(key) => row.field(key),
            Accessor::Fn(f) => f(row),
            Accessor::None => Value::None,
        }
    }

    /// Cell text for a row: the custom renderer if there is one, else the
    /// raw value's text.
    pub fn cell_text(&self, row: &R) -> String {
        match &self.cell {
            Some(render) => render(row),
            None => self.value(row).display().into_owned(),
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("accessor", &self.accessor)
            .field("header", &self.header)
            .field("cell", &self.cell.as_ref().map(|_| ".."))
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("global_filter", &self.global_filter)
            .field("label", &self.label)
            .field("align", &self.align)
            .field("max_width", &self.max_width)
            .finish()
    }
}
