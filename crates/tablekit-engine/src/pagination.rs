//! Pagination state and arithmetic.

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the page size selector by default.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 50, 100];

/// Current page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationState {
    /// Zero-based index of the current page.
    pub page_index: usize,
    /// Rows per page, never zero.
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        PaginationState {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        PaginationState {
            page_index,
            page_size: page_size.max(1),
        }
    }

    /// Index of the first row on the current page.
    pub fn first_row(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// Who computes the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// The engine filters, sorts and slices the data itself.
    #[default]
    Client,
    /// The caller has already filtered, sorted and sliced the data and
    /// supplies the total page count.
    Manual { page_count: usize },
}

impl PaginationMode {
    pub fn is_manual(&self) -> bool {
        matches!(self, PaginationMode::Manual { .. })
    }
}

/// Number of pages needed for `rows` rows. Zero rows need zero pages.
pub fn page_count_for(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size.max(1))
}

/// Last valid page index for a page count. There is always at least page 0.
pub fn last_page_index(page_count: usize) -> usize {
    page_count.max(1) - 1
}

/// Clamps a page index into `[0, max(1, page_count) - 1]`.
pub fn clamp_page_index(index: usize, page_count: usize) -> usize {
    index.min(last_page_index(page_count))
}

/// Page index that keeps the current top row in view after a page size
/// change.
pub fn rescale_page_index(index: usize, old_size: usize, new_size: usize) -> usize {
    index.saturating_mul(old_size) / new_size.max(1)
}
