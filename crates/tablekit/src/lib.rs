//! # Tablekit - Themeable Terminal Data Tables
//!
//! Tablekit renders interactive data tables for the terminal. It provides:
//!
//! - Single-column sorting by header click (ascending, descending, unsorted)
//! - A global search filter over every column
//! - Column visibility toggles from a dropdown menu
//! - Client-side or caller-driven (manual) pagination
//! - A per-row actions menu with View, Edit and Delete
//! - Loading skeletons and empty state messages
//! - Named themes with built-in `default` and `windows95`, plus YAML themes
//!
//! The table logic lives in [`tablekit_engine`]; themes and styled output
//! live in [`tablekit_render`]. This crate ties them into a widget and
//! re-exports what applications need.
//!
//! ## Core Concepts
//!
//! - [`DataTable`]: The widget. Built from [`DataTableProps`], driven by
//!   [`TableEvent`]s, and rendered with a [`ThemeRegistry`].
//! - [`DataTableView`]: What the table shows right now: loading, empty or
//!   populated.
//! - [`ColumnDef`]: How a column reads, formats and labels a row's value.
//! - [`TableRow`]: Implemented by your row type, or use [`JsonRow`].
//! - [`OutputMode`]: Styled terminal output, plain text, or debug tags.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablekit::{
//!     Align, ColumnDef, DataTable, DataTableProps, OutputMode, TableEvent, TableRow,
//!     ThemeRegistry, Value,
//! };
//!
//! struct Transfer {
//!     id: String,
//!     source: String,
//!     fee: u64,
//! }
//!
//! impl TableRow for Transfer {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn field(&self, key: &str) -> Value<'_> {
//!         match key {
//!             "source" => Value::from(self.source.as_str()),
//!             "fee" => Value::from(self.fee),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let data = vec![
//!     Transfer { id: "t1".into(), source: "Orca".into(), fee: 7000 },
//!     Transfer { id: "t2".into(), source: "Raydium".into(), fee: 5000 },
//! ];
//! let columns = vec![
//!     ColumnDef::accessor("source", "Source"),
//!     ColumnDef::accessor("fee", "Fee").align(Align::Right),
//! ];
//!
//! let mut table = DataTable::new(DataTableProps::new(data, columns).theme("windows95"));
//! table.handle(TableEvent::HeaderClick("fee".into()));
//!
//! let output = table.render(&ThemeRegistry::new(), OutputMode::Text);
//! assert!(output.contains("Fee ▲"));
//! let raydium = output.find("Raydium").unwrap();
//! let orca = output.find("Orca").unwrap();
//! assert!(raydium < orca);
//! ```
//!
//! ## Themes
//!
//! A theme maps every styleable region of the table to a style, plus a
//! border style. Themes are looked up by name at render time, and unknown
//! names render with the default theme. Custom themes are YAML:
//!
//! ```rust
//! use tablekit::ThemeRegistry;
//!
//! let mut registry = ThemeRegistry::new();
//! registry
//!     .add_yaml("midnight", "extends: windows95\nborder: heavy\nstyles:\n  cell: cyan\n")
//!     .unwrap();
//! assert!(registry.contains("midnight"));
//! ```
//!
//! ## Output Modes
//!
//! [`OutputMode::TermDebug`] writes every styled region as a tag,
//! `[region]text[/region]`, which makes the structure visible in tests.

mod data_table;
mod dropdown;
mod json;
mod layout;
mod pagination;
mod row_actions;
mod skeleton;
mod toolbar;

// Widget exports
pub use data_table::{
    DataTable, DataTableProps, DataTableView, HeaderRenderer, PopulatedView, RowRenderer,
    TableEvent, DEFAULT_EMPTY_MESSAGE, DEFAULT_LOADING_MESSAGE, DEFAULT_TABLE_LABEL,
};
pub use dropdown::{DropdownMenu, MenuAlign, MenuEntry, OpenChangeFn};
pub use json::{JsonRow, JsonRowError};
pub use pagination::{PaginationAction, PaginationControls, PaginationView};
pub use row_actions::{RowAction, RowActions, RowCallback};
pub use skeleton::Skeleton;
pub use toolbar::{
    ColumnToggle, GlobalFilterInput, Toolbar, SEARCH_PLACEHOLDER, TOGGLE_COLUMNS_LABEL,
};

// Engine exports (from tablekit-engine)
pub use tablekit_engine::{
    compare_values, Align, Cell, ColumnDef, Header, HeaderGroup, InitialState, Number,
    PageCallback, RowView, SortDirection, SortEntry, TableEngine, TableRow, TableState, Timestamp,
    Value, DEFAULT_PAGE_SIZE_OPTIONS,
};

// Theme and output exports (from tablekit-render)
pub use tablekit_render::{
    BorderStyle, OutputMode, Region, ThemeError, ThemeRegistry, ThemeTokens, DEFAULT_THEME,
    WINDOWS95_THEME,
};

// Style types, so custom themes don't need a direct console dependency
pub use tablekit_render::{Color, Style};
