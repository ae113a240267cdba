//! Theme token bundles.
//!
//! A [`ThemeTokens`] bundle holds one style for every [`Region`] plus the
//! border style the table is drawn with. Bundles are always complete: a
//! region nobody styled is plain.
//!
//! ```rust
//! use console::Style;
//! use tablekit_render::{BorderStyle, OutputMode, Region, ThemeTokens};
//!
//! let theme = ThemeTokens::new("mono")
//!     .with_border(BorderStyle::Ascii)
//!     .with_style(Region::HeaderCell, Style::new().bold());
//!
//! assert_eq!(theme.border(), BorderStyle::Ascii);
//! assert_eq!(
//!     theme.paint(Region::HeaderCell, "Slot", OutputMode::TermDebug),
//!     "[header_cell]Slot[/header_cell]"
//! );
//! assert_eq!(theme.paint(Region::Cell, "42", OutputMode::Text), "42");
//! ```

use console::Style;

use crate::border::BorderStyle;
use crate::output::{paint, OutputMode};
use crate::region::Region;
use crate::util::rgb_to_ansi256;

/// Name of the built-in default theme.
pub const DEFAULT_THEME: &str = "default";

/// Name of the built-in retro theme.
pub const WINDOWS95_THEME: &str = "windows95";

/// A complete set of presentation tokens.
#[derive(Debug, Clone)]
pub struct ThemeTokens {
    name: String,
    border: BorderStyle,
    styles: Vec<Style>,
}

impl ThemeTokens {
    /// Creates a theme with every region plain and rounded borders.
    pub fn new(name: impl Into<String>) -> Self {
        ThemeTokens {
            name: name.into(),
            border: BorderStyle::default(),
            styles: vec![Style::new(); Region::COUNT],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    /// Style of a region.
    pub fn style(&self, region: Region) -> &Style {
        &self.styles[region.index()]
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn with_style(mut self, region: Region, style: Style) -> Self {
        self.set_style(region, style);
        self
    }

    pub fn set_style(&mut self, region: Region, style: Style) {
        self.styles[region.index()] = style;
    }

    pub fn set_border(&mut self, border: BorderStyle) {
        self.border = border;
    }

    /// Styles text as the given region.
    pub fn paint(&self, region: Region, text: &str, mode: OutputMode) -> String {
        if mode.is_debug() && !text.is_empty() {
            return format!("[{name}]{text}[/{name}]", name = region.name());
        }
        paint(self.style(region), text, mode)
    }

    /// The built-in default theme: muted headers, plain cells, rounded
    /// borders.
    pub fn default_theme() -> Self {
        let gray = Style::new().color256(8);
        ThemeTokens::new(DEFAULT_THEME)
            .with_border(BorderStyle::Rounded)
            .with_style(Region::Container, gray.clone())
            .with_style(Region::HeaderCell, gray.clone().bold())
            .with_style(Region::HeaderSortIcon, gray.clone().dim())
            .with_style(Region::HeaderSortIconActive, Style::new().white().bold())
            .with_style(Region::HeaderSortIconHover, Style::new().white())
            .with_style(Region::Toolbar, gray.clone())
            .with_style(Region::ToolbarSearchInput, Style::new().underlined())
            .with_style(Region::ToolbarInput, Style::new().underlined())
            .with_style(Region::ToolbarButton, Style::new().bold())
            .with_style(Region::Pagination, gray.clone())
            .with_style(Region::PaginationButton, Style::new().bold())
            .with_style(
                Region::PaginationButtonActive,
                Style::new().blue().bold().reverse(),
            )
            .with_style(Region::PaginationSelect, Style::new().underlined())
            .with_style(Region::PaginationIconButton, gray.clone().bold())
            .with_style(Region::PaginationInput, Style::new().underlined())
            .with_style(Region::RowActionsIcon, gray)
    }

    /// The built-in retro theme: black on silver chrome, double borders.
    pub fn windows95() -> Self {
        let silver = rgb_to_ansi256((0xc0, 0xc0, 0xc0));
        let light = rgb_to_ansi256((0xd0, 0xd0, 0xd0));
        let chrome = Style::new().black().on_color256(silver);
        let field = Style::new().black().on_white();
        ThemeTokens::new(WINDOWS95_THEME)
            .with_border(BorderStyle::Double)
            .with_style(Region::Table, Style::new().color256(8))
            .with_style(Region::HeaderWrapper, chrome.clone())
            .with_style(Region::HeaderCell, chrome.clone().bold())
            .with_style(Region::HeaderSortIcon, chrome.clone().dim())
            .with_style(Region::HeaderSortIconActive, chrome.clone().bold())
            .with_style(Region::HeaderSortIconHover, chrome.clone())
            .with_style(Region::Row, Style::new().black().on_color256(255))
            .with_style(Region::Cell, Style::new().black().on_color256(255))
            .with_style(Region::Toolbar, chrome.clone())
            .with_style(Region::ToolbarSearchInput, field.clone())
            .with_style(Region::ToolbarInput, field.clone())
            .with_style(Region::ToolbarButton, chrome.clone().bold())
            .with_style(Region::Pagination, chrome.clone())
            .with_style(Region::PaginationButton, chrome.clone().bold())
            .with_style(
                Region::PaginationButtonActive,
                Style::new().black().bold().on_color256(light),
            )
            .with_style(Region::PaginationSelect, field.clone())
            .with_style(Region::PaginationText, chrome.clone().bold())
            .with_style(Region::PaginationIconButton, chrome.clone())
            .with_style(Region::PaginationInput, field)
            .with_style(Region::RowActionsButton, chrome)
            .with_style(Region::RowActionsIcon, Style::new().black())
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        ThemeTokens::default_theme()
    }
}
