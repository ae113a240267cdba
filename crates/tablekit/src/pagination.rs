//! Pagination controls.
//!
//! Presentation over the engine's pagination state: first/previous/next/
//! last buttons, a page size selector and a "go to page" input. Every
//! action is total. At a boundary the navigation buttons do nothing, and
//! unusable input is ignored or clamped.

use serde::Serialize;
use tablekit_engine::{TableEngine, TableRow, DEFAULT_PAGE_SIZE_OPTIONS};
use tablekit_render::{display_width, OutputMode, Region, ThemeTokens};
use tracing::trace;

/// A user interaction with the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationAction {
    First,
    Previous,
    Next,
    Last,
    /// Page size picked from the selector.
    SetPageSize(usize),
    /// Text typed into the "go to page" input, 1-based.
    GoToPage(String),
}

/// Snapshot of what the pagination bar shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub can_previous: bool,
    pub can_next: bool,
}

impl PaginationView {
    /// 1-based page number shown to the user.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }
}

/// The pagination bar.
///
/// ```rust
/// use tablekit::{PaginationAction, PaginationControls};
/// use tablekit_engine::{ColumnDef, TableEngine, TableRow};
///
/// struct Row(String);
/// impl TableRow for Row {
///     fn id(&self) -> &str { &self.0 }
/// }
///
/// let rows = (0..25).map(|i| Row(i.to_string())).collect();
/// let mut engine = TableEngine::new(rows, vec![ColumnDef::<Row>::display("x", "X")]);
/// let controls = PaginationControls::default();
///
/// controls.apply(&mut engine, PaginationAction::GoToPage("3".into()));
/// assert_eq!(engine.pagination().page_index, 2);
///
/// controls.apply(&mut engine, PaginationAction::GoToPage("99".into()));
/// assert_eq!(engine.pagination().page_index, 2);
///
/// controls.apply(&mut engine, PaginationAction::GoToPage("".into()));
/// assert_eq!(engine.pagination().page_index, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    page_size_options: Vec<usize>,
}

impl PaginationControls {
    /// Controls offering the given page sizes. Zero sizes are dropped; an
    /// empty list falls back to the default options.
    pub fn new(page_size_options: impl IntoIterator<Item = usize>) -> Self {
        let mut options: Vec<usize> = page_size_options.into_iter().filter(|&n| n > 0).collect();
        if options.is_empty() {
            options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        }
        PaginationControls {
            page_size_options: options,
        }
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Applies an action to the engine.
    pub fn apply<R: TableRow>(&self, engine: &mut TableEngine<R>, action: PaginationAction) {
        trace!(?action, "pagination action");
        match action {
            PaginationAction::First => {
                if engine.can_previous_page() {
                    engine.first_page();
                }
            }
            PaginationAction::Previous => engine.previous_page(),
            PaginationAction::Next => engine.next_page(),
            PaginationAction::Last => {
                if engine.can_next_page() {
                    engine.last_page();
                }
            }
            PaginationAction::SetPageSize(size) => {
                if self.page_size_options.contains(&size) {
                    engine.set_page_size(size);
                } else {
                    trace!(size, "page size not offered, ignored");
                }
            }
            PaginationAction::GoToPage(text) => {
                if let Some(index) = parse_page_input(&text) {
                    engine.set_page_index(index);
                }
            }
        }
    }

    /// What the bar shows for the engine's current state.
    pub fn view<R: TableRow>(&self, engine: &TableEngine<R>) -> PaginationView {
        let state = engine.pagination();
        PaginationView {
            page_index: state.page_index,
            page_count: engine.page_count(),
            page_size: state.page_size,
            page_size_options: self.page_size_options.clone(),
            can_previous: engine.can_previous_page(),
            can_next: engine.can_next_page(),
        }
    }

    /// Renders the bar. When the full bar is wider than `width`, the
    /// compact form with only Previous and Next is used.
    pub fn render(
        &self,
        view: &PaginationView,
        theme: &ThemeTokens,
        mode: OutputMode,
        width: Option<usize>,
    ) -> String {
        let full = full_layout(view);
        let fits = width.map_or(true, |w| plain_width(&full) <= w);
        let parts = if fits { full } else { compact_layout(view) };
        parts
            .into_iter()
            .map(|(region, text)| theme.paint(region, &text, mode))
            .collect()
    }
}

impl Default for PaginationControls {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE_OPTIONS)
    }
}

/// Reads the "go to page" input. Empty means the first page; a number is
/// a 1-based page, clamped later by the engine. Anything else is ignored.
fn parse_page_input(text: &str) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    match text.parse::<i64>() {
        Ok(page) if page <= 1 => Some(0),
        Ok(page) => Some(usize::try_from(page - 1).unwrap_or(usize::MAX)),
        Err(_) => None,
    }
}

type Part = (Region, String);

fn nav_button(label: &str, enabled: bool) -> Part {
    let region = if enabled {
        Region::PaginationIconButton
    } else {
        Region::Pagination
    };
    (region, label.to_string())
}

fn gap(text: &str) -> Part {
    (Region::Pagination, text.to_string())
}

fn page_of(view: &PaginationView) -> Vec<Part> {
    vec![
        (Region::PaginationText, "Page ".to_string()),
        (Region::PaginationButtonActive, view.page_number().to_string()),
        (
            Region::PaginationText,
            format!(" of {}", view.page_count.max(1)),
        ),
    ]
}

fn full_layout(view: &PaginationView) -> Vec<Part> {
    let mut parts = page_of(view);
    parts.extend([
        gap("  "),
        (Region::PaginationSelect, format!("Show {} ▾", view.page_size)),
        gap("  "),
        (Region::PaginationText, "Go to page:".to_string()),
        gap(" "),
        (Region::PaginationInput, format!("[{}]", view.page_number())),
        gap("  "),
        nav_button("<<", view.can_previous),
        gap(" "),
        nav_button("<", view.can_previous),
        gap(" "),
        nav_button(">", view.can_next),
        gap(" "),
        nav_button(">>", view.can_next),
    ]);
    parts
}

fn compact_layout(view: &PaginationView) -> Vec<Part> {
    let button = |label: &str, enabled: bool| {
        let region = if enabled {
            Region::PaginationButton
        } else {
            Region::Pagination
        };
        (region, label.to_string())
    };
    let mut parts = vec![button("Previous", view.can_previous), gap("  ")];
    parts.extend(page_of(view));
    parts.extend([gap("  "), button("Next", view.can_next)]);
    parts
}

fn plain_width(parts: &[Part]) -> usize {
    parts.iter().map(|(_, text)| display_width(text)).sum()
}
