//! Loading placeholder.
//!
//! The skeleton mirrors the table's structure (toolbar, header, body rows,
//! pagination bar) with shaded blocks instead of content.

use tablekit_render::{LineType, OutputMode, Region, ThemeTokens};

use crate::layout::Frame;

const CELL_WIDTH: usize = 8;
const HEADER_BLOCK: char = '▒';
const BODY_BLOCK: char = '░';

/// Placeholder shown while data is loading.
///
/// ```rust
/// use tablekit::Skeleton;
/// use tablekit_render::{OutputMode, ThemeTokens};
///
/// let skeleton = Skeleton::new().rows(1).columns(2).toolbar(false).pagination(false);
/// let out = skeleton.render(&ThemeTokens::new("plain"), OutputMode::Text);
/// assert_eq!(out.lines().count(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skeleton {
    row_count: usize,
    column_count: usize,
    show_toolbar: bool,
    show_pagination: bool,
}

impl Skeleton {
    /// Five rows of four columns with toolbar and pagination.
    pub fn new() -> Self {
        Skeleton {
            row_count: 5,
            column_count: 4,
            show_toolbar: true,
            show_pagination: true,
        }
    }

    pub fn rows(mut self, count: usize) -> Self {
        self.row_count = count;
        self
    }

    pub fn columns(mut self, count: usize) -> Self {
        self.column_count = count;
        self
    }

    pub fn toolbar(mut self, show: bool) -> Self {
        self.show_toolbar = show;
        self
    }

    pub fn pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn render(&self, theme: &ThemeTokens, mode: OutputMode) -> String {
        self.render_lines(theme, mode).join("\n")
    }

    pub(crate) fn render_lines(&self, theme: &ThemeTokens, mode: OutputMode) -> Vec<String> {
        let frame = Frame::new(theme.border(), vec![CELL_WIDTH; self.column_count]);
        let width = frame.width();
        let mut lines = Vec::new();

        if self.show_toolbar {
            lines.push(spread(theme, mode, Region::Toolbar, 16, &[6], width));
        }

        let header = block(HEADER_BLOCK, CELL_WIDTH);
        let body = block(BODY_BLOCK, CELL_WIDTH);
        let header_cells = vec![theme.paint(Region::HeaderCell, &header, mode); self.column_count];
        let body_cells = vec![theme.paint(Region::Cell, &body, mode); self.column_count];

        lines.extend(frame.rule(theme, mode, LineType::Top));
        lines.push(frame.line(theme, mode, &header_cells));
        lines.extend(frame.rule(theme, mode, LineType::Middle));
        for _ in 0..self.row_count {
            lines.push(frame.line(theme, mode, &body_cells));
        }
        lines.extend(frame.rule(theme, mode, LineType::Bottom));

        if self.show_pagination {
            lines.push(spread(theme, mode, Region::Pagination, 12, &[2, 2, 2, 2], width));
        }
        lines
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

fn block(c: char, width: usize) -> String {
    std::iter::repeat_n(c, width).collect()
}

/// A block on the left and a group of small blocks on the right, spread
/// over `width` columns when there is room.
fn spread(
    theme: &ThemeTokens,
    mode: OutputMode,
    region: Region,
    left: usize,
    right: &[usize],
    width: usize,
) -> String {
    let right_blocks: Vec<String> = right.iter().map(|&w| block(BODY_BLOCK, w)).collect();
    let right_text = right_blocks.join(" ");
    let right_width = right.iter().sum::<usize>() + right.len().saturating_sub(1);
    let gap = width.saturating_sub(left + right_width).max(2);
    format!(
        "{}{}{}",
        theme.paint(region, &block(BODY_BLOCK, left), mode),
        " ".repeat(gap),
        theme.paint(region, &right_text, mode)
    )
}
