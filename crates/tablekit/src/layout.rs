//! Grid layout shared by the table and the skeleton.

use tablekit_engine::Align;
use tablekit_render::{
    pad_center, pad_left, pad_right, BorderStyle, LineType, OutputMode, Region, ThemeTokens,
};

/// Pads plain text to `width` according to the alignment.
pub(crate) fn fit(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(text, width),
        Align::Right => pad_left(text, width),
        Align::Center => pad_center(text, width),
    }
}

/// Column widths and border style of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    border: BorderStyle,
    widths: Vec<usize>,
}

impl Frame {
    pub(crate) fn new(border: BorderStyle, widths: Vec<usize>) -> Self {
        Frame { border, widths }
    }

    pub(crate) fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Display width of every line of the grid.
    pub(crate) fn width(&self) -> usize {
        let cells: usize = self.widths.iter().sum();
        if self.border.is_none() {
            cells + 2 * self.widths.len().saturating_sub(1)
        } else {
            cells + 3 * self.widths.len() + 1
        }
    }

    /// Offset of a column's content from the start of the line.
    pub(crate) fn column_offset(&self, index: usize) -> usize {
        let before = &self.widths[..index.min(self.widths.len())];
        if self.border.is_none() {
            before.iter().map(|w| w + 2).sum()
        } else {
            2 + before.iter().map(|w| w + 3).sum::<usize>()
        }
    }

    /// Horizontal rule, or `None` for borderless grids.
    pub(crate) fn rule(
        &self,
        theme: &ThemeTokens,
        mode: OutputMode,
        line: LineType,
    ) -> Option<String> {
        if self.border.is_none() {
            return None;
        }
        let rule = self.border.chars().rule(&self.widths, line);
        Some(theme.paint(Region::Table, &rule, mode))
    }

    /// Joins cells that are already padded to their column width.
    pub(crate) fn line(&self, theme: &ThemeTokens, mode: OutputMode, cells: &[String]) -> String {
        if self.border.is_none() {
            return cells.join("  ");
        }
        let vertical = theme.paint(Region::Table, &self.border.chars().vertical.to_string(), mode);
        let mut out = vertical.clone();
        for cell in cells {
            out.push(' ');
            out.push_str(cell);
            out.push(' ');
            out.push_str(&vertical);
        }
        out
    }
}
