//! Tablekit render - themes and terminal rendering primitives.
//!
//! This crate holds everything the table widgets need to draw themselves,
//! and nothing about tables' behavior:
//!
//! - [`Region`]: the styled parts of a table (header cells, rows, toolbar,
//!   pagination buttons, ...)
//! - [`ThemeTokens`]: one `console::Style` per region plus a [`BorderStyle`]
//! - [`ThemeRegistry`]: named themes with fallback to the default, loadable
//!   from YAML
//! - [`OutputMode`]: ANSI, plain text or debug tags
//! - Width-aware padding and truncation helpers
//!
//! # Example
//!
//! ```rust
//! use tablekit_render::{OutputMode, Region, ThemeRegistry};
//!
//! let registry = ThemeRegistry::new();
//! let theme = registry.resolve("windows95");
//!
//! let plain = theme.paint(Region::PaginationText, "Page 1 of 2", OutputMode::Text);
//! assert_eq!(plain, "Page 1 of 2");
//!
//! // unknown names fall back instead of failing
//! assert_eq!(registry.resolve("windows98").name(), "default");
//! ```

mod border;
mod color;
mod error;
mod output;
mod region;
mod registry;
mod style;
mod theme;
mod util;

pub use border::{BorderChars, BorderStyle, LineType};
pub use color::ColorDef;
pub use error::{Result, ThemeError};
pub use output::{paint, OutputMode};
pub use region::Region;
pub use registry::ThemeRegistry;
pub use style::{parse_shorthand, parse_style};
pub use theme::{ThemeTokens, DEFAULT_THEME, WINDOWS95_THEME};
pub use util::{display_width, pad_center, pad_left, pad_right, rgb_to_ansi256, truncate_end};

// Re-export so callers can build styles without a direct dependency.
pub use console::{Color, Style};
