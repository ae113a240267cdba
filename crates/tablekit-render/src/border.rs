//! Border styles and their box-drawing glyphs.

use std::fmt;
use std::str::FromStr;

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// No borders; columns are separated by spaces.
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    #[default]
    Rounded,
}

impl BorderStyle {
    pub const ALL: [BorderStyle; 6] = [
        BorderStyle::None,
        BorderStyle::Ascii,
        BorderStyle::Light,
        BorderStyle::Heavy,
        BorderStyle::Double,
        BorderStyle::Rounded,
    ];

    /// Name of this style in theme files.
    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Ascii => "ascii",
            BorderStyle::Light => "light",
            BorderStyle::Heavy => "heavy",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
        }
    }

    pub fn is_none(self) -> bool {
        self == BorderStyle::None
    }

    /// Box-drawing characters for this border style.
    pub fn chars(self) -> BorderChars {
        match self {
            BorderStyle::None => BorderChars::empty(),
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BorderStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown border style: {}", s))
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

/// Which horizontal rule to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    Top,
    Middle,
    Bottom,
}

impl BorderChars {
    fn empty() -> Self {
        BorderChars {
            horizontal: ' ',
            vertical: ' ',
            top_left: ' ',
            top_right: ' ',
            bottom_left: ' ',
            bottom_right: ' ',
            left_t: ' ',
            cross: ' ',
            right_t: ' ',
            top_t: ' ',
            bottom_t: ' ',
        }
    }

    /// Left edge, column joint and right edge glyphs of a horizontal rule.
    pub fn line_ends(&self, line: LineType) -> (char, char, char) {
        match line {
            LineType::Top => (self.top_left, self.top_t, self.top_right),
            LineType::Middle => (self.left_t, self.cross, self.right_t),
            LineType::Bottom => (self.bottom_left, self.bottom_t, self.bottom_right),
        }
    }

    /// Horizontal rule across columns of the given widths, with a joint at
    /// every column boundary. Each column is padded by one space per side.
    pub fn rule(&self, widths: &[usize], line: LineType) -> String {
        let (left, joint, right) = self.line_ends(line);
        let mut out = String::new();
        out.push(left);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                out.push(joint);
            }
            out.extend(std::iter::repeat_n(self.horizontal, width + 2));
        }
        out.push(right);
        out
    }
}
