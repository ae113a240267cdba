//! Output mode control for rendering.

use console::{Style, Term};

/// Controls how styled text is emitted.
///
/// - `Auto` - use ANSI codes when stdout supports colors
/// - `Term` - always include ANSI escape codes
/// - `Text` - never include ANSI escape codes (plain text)
/// - `TermDebug` - wrap styled text in bracket tags named after the region,
///   e.g. `[header_cell]Slot[/header_cell]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    TermDebug,
}

impl OutputMode {
    /// Resolves the mode to whether ANSI codes are emitted.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug => false,
        }
    }

    /// Returns true if this is debug mode (bracket tags instead of ANSI).
    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }
}

/// Applies a style to text according to the output mode. Debug mode emits
/// the text unchanged; use [`ThemeTokens::paint`](crate::ThemeTokens::paint)
/// for tagged output.
pub fn paint(style: &Style, text: &str, mode: OutputMode) -> String {
    if text.is_empty() || !mode.should_use_color() {
        return text.to_string();
    }
    style.clone().force_styling(true).apply_to(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_uses_color() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::TermDebug.should_use_color());
    }

    #[test]
    fn default_is_auto() {
        assert_eq!(OutputMode::default(), OutputMode::Auto);
        assert!(OutputMode::TermDebug.is_debug());
        assert!(!OutputMode::Term.is_debug());
    }

    #[test]
    fn paint_modes() {
        let style = Style::new().red();
        assert_eq!(paint(&style, "hi", OutputMode::Text), "hi");
        let colored = paint(&style, "hi", OutputMode::Term);
        assert!(colored.contains("\x1b["));
        assert!(colored.contains("hi"));
        assert_eq!(paint(&style, "", OutputMode::Term), "");
    }
}
