//! Style definitions in theme files.
//!
//! A region's style is either a mapping of attributes or a shorthand
//! string of space-separated words:
//!
//! ```yaml
//! header_cell:
//!   fg: white
//!   bg: "#c0c0c0"
//!   bold: true
//! cell: dim
//! pagination_text: "bright_black italic"
//! pagination_button_active: "bold black on white"
//! ```
//!
//! In shorthand, colors set the foreground, and a color after `on` sets
//! the background. `null` or an empty string is the plain style.

use console::Style;

use crate::color::ColorDef;

const ATTRIBUTES: &[&str] = &[
    "bold",
    "dim",
    "italic",
    "underline",
    "reverse",
    "blink",
    "strikethrough",
];

/// Parses a style definition from a YAML value.
pub fn parse_style(value: &serde_yaml::Value) -> Result<Style, String> {
    match value {
        serde_yaml::Value::Null => Ok(Style::new()),
        serde_yaml::Value::String(s) => parse_shorthand(s),
        serde_yaml::Value::Mapping(map) => {
            let mut style = Style::new();
            for (key, val) in map {
                let key = key
                    .as_str()
                    .ok_or_else(|| format!("style attribute must be a string: {:?}", key))?;
                style = match key {
                    "fg" => style.fg(ColorDef::parse_value(val)?.to_console_color()),
                    "bg" => style.bg(ColorDef::parse_value(val)?.to_console_color()),
                    attr if ATTRIBUTES.contains(&attr) => {
                        let enabled = val
                            .as_bool()
                            .ok_or_else(|| format!("'{}' must be true or false", attr))?;
                        if enabled {
                            apply_attribute(style, attr)
                        } else {
                            style
                        }
                    }
                    other => return Err(format!("unknown style attribute: {}", other)),
                };
            }
            Ok(style)
        }
        _ => Err(format!("invalid style definition: {:?}", value)),
    }
}

/// Parses a shorthand style string.
pub fn parse_shorthand(s: &str) -> Result<Style, String> {
    let mut style = Style::new();
    let mut words = s.split_whitespace();
    while let Some(word) = words.next() {
        let lower = word.to_lowercase();
        if ATTRIBUTES.contains(&lower.as_str()) {
            style = apply_attribute(style, &lower);
        } else if lower == "on" {
            let color = words
                .next()
                .ok_or_else(|| format!("missing background color after 'on' in '{}'", s))?;
            style = style.bg(ColorDef::parse_string(color)?.to_console_color());
        } else {
            style = style.fg(ColorDef::parse_string(word)?.to_console_color());
        }
    }
    Ok(style)
}

fn apply_attribute(style: Style, attr: &str) -> Style {
    match attr {
        "bold" => style.bold(),
        "dim" => style.dim(),
        "italic" => style.italic(),
        "underline" => style.underlined(),
        "reverse" => style.reverse(),
        "blink" => style.blink(),
        "strikethrough" => style.strikethrough(),
        _ => style,
    }
}
