//! Tablekit engine - sorting, filtering, pagination and column visibility
//! for data tables.
//!
//! The engine holds rows and column definitions and derives what a table
//! should show: the header row with its sort state, and the rows of the
//! current page with their visible cells. It does no rendering and no I/O.
//!
//! - Single-column sorting with the header click cycle
//!   unsorted → ascending → descending → unsorted
//! - Case-insensitive global filter over every column's raw value
//! - Column visibility that never drops data
//! - Client-side paging, or manual paging with a caller-supplied page count
//!
//! # Quick Start
//!
//! ```rust
//! use tablekit_engine::{ColumnDef, TableEngine, TableRow, Value};
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
//!     Transfer { id: "t3".into(), source: "Jupiter".into(), fee: 6000 },
//! ];
//! let columns = vec![
//!     ColumnDef::accessor("source", "Source"),
//!     ColumnDef::accessor("fee", "Fee").cell(|t: &Transfer| format!("{} lamports", t.fee)),
//! ];
//!
//! let mut table = TableEngine::new(data, columns);
//! table.toggle_sort("fee");
//! table.set_global_filter("o");
//!
//! let visible = table.visible_rows();
//! let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
//! assert_eq!(ids, ["t1"]);
//!
//! let rows = table.row_model();
//! assert_eq!(rows[0].cells[1].text, "7000 lamports");
//! ```
//!
//! # Ordering
//!
//! Sorting is stable and total. Values of one type compare naturally;
//! values of different types compare by type; absent values sort last when
//! ascending. See [`compare_values`].

mod column;
mod engine;
mod filter;
mod header;
mod model;
mod ordering;
mod pagination;
mod row;
mod state;
mod value;

pub use column::{
    Accessor, AccessorFn, Align, CellFn, ColumnDef, HeaderContent, HeaderContext, HeaderFn,
};
pub use engine::{PageCallback, TableEngine};
pub use filter::GlobalFilter;
pub use header::{Header, HeaderGroup};
pub use model::{Cell, RowView};
pub use ordering::{compare_values, next_in_cycle, SortDirection, SortEntry};
pub use pagination::{
    clamp_page_index, last_page_index, page_count_for, rescale_page_index, PaginationMode,
    PaginationState, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS,
};
pub use row::TableRow;
pub use state::{InitialState, TableState};
pub use value::{Number, Timestamp, Value};
