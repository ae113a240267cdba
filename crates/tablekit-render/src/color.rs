//! Color value parsing for theme files.
//!
//! Supported formats:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors, `gray` aliases white)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `0` through `255`
//! - RGB hex: `"#c0c0c0"` or `"#ccc"`
//! - RGB tuple: `[192, 192, 192]`
//!
//! RGB colors are mapped to the nearest 256-palette entry.
//!
//! ```rust
//! use tablekit_render::ColorDef;
//!
//! let silver = ColorDef::parse_string("#c0c0c0").unwrap();
//! assert_eq!(silver, ColorDef::Rgb(192, 192, 192));
//! ```

use console::Color;

use crate::util::rgb_to_ansi256;

/// Parsed color definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
    /// RGB color.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a color definition from a YAML value.
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::String(s) => Self::parse_string(s),
            serde_yaml::Value::Number(n) => {
                let index = n
                    .as_u64()
                    .ok_or_else(|| format!("invalid color palette index: {}", n))?;
                u8::try_from(index)
                    .map(ColorDef::Color256)
                    .map_err(|_| format!("color palette index {} out of range (0-255)", index))
            }
            serde_yaml::Value::Sequence(seq) => Self::parse_rgb_tuple(seq),
            _ => Err(format!("invalid color value: {:?}", value)),
        }
    }

    /// Parses a color from a string: a name, a bright name, a hex code or a
    /// palette index.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Ok(index) = s.parse::<u8>() {
            return Ok(ColorDef::Color256(index));
        }
        Self::parse_named(s)
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        let invalid = || format!("invalid hex color: #{}", hex);
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        match hex.len() {
            3 => Ok(ColorDef::Rgb(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Ok(ColorDef::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(format!(
                "invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        let name_lower = name.to_lowercase();

        if let Some(base) = name_lower.strip_prefix("bright_") {
            return Self::parse_bright_color(base);
        }

        let color = match name_lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" | "gray" | "grey" => Color::White,
            _ => return Err(format!("unknown color name: {}", name)),
        };

        Ok(ColorDef::Named(color))
    }

    fn parse_bright_color(base: &str) -> Result<Self, String> {
        // bright variants are palette entries 8-15
        let index = match base {
            "black" => 8,
            "red" => 9,
            "green" => 10,
            "yellow" => 11,
            "blue" => 12,
            "magenta" => 13,
            "cyan" => 14,
            "white" => 15,
            _ => return Err(format!("unknown bright color: bright_{}", base)),
        };

        Ok(ColorDef::Color256(index))
    }

    fn parse_rgb_tuple(seq: &[serde_yaml::Value]) -> Result<Self, String> {
        if seq.len() != 3 {
            return Err(format!(
                "RGB tuple must have exactly 3 values, got {}",
                seq.len()
            ));
        }

        let mut components = [0u8; 3];
        for (i, val) in seq.iter().enumerate() {
            let n = val
                .as_u64()
                .ok_or_else(|| format!("RGB component {} is not a number", i))?;
            components[i] = u8::try_from(n)
                .map_err(|_| format!("RGB component {} out of range (0-255): {}", i, n))?;
        }

        Ok(ColorDef::Rgb(components[0], components[1], components[2]))
    }

    /// Converts this color definition to a `console::Color`.
    pub fn to_console_color(&self) -> Color {
        match self {
            ColorDef::Named(c) => *c,
            ColorDef::Color256(n) => Color::Color256(*n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((*r, *g, *b))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn named_colors() {
        assert_eq!(
            ColorDef::parse_string("cyan").unwrap(),
            ColorDef::Named(Color::Cyan)
        );
        assert_eq!(
            ColorDef::parse_string("Blue").unwrap(),
            ColorDef::Named(Color::Blue)
        );
        assert_eq!(
            ColorDef::parse_string("grey").unwrap(),
            ColorDef::Named(Color::White)
        );
        assert!(ColorDef::parse_string("indigo").is_err());
    }

    #[test]
    fn bright_colors() {
        assert_eq!(
            ColorDef::parse_string("bright_black").unwrap(),
            ColorDef::Color256(8)
        );
        assert_eq!(
            ColorDef::parse_string("BRIGHT_WHITE").unwrap(),
            ColorDef::Color256(15)
        );
        assert!(ColorDef::parse_string("bright_orange").is_err());
    }

    #[test]
    fn hex_colors() {
        assert_eq!(
            ColorDef::parse_string("#fff").unwrap(),
            ColorDef::Rgb(255, 255, 255)
        );
        assert_eq!(
            ColorDef::parse_string("#C0C0C0").unwrap(),
            ColorDef::Rgb(192, 192, 192)
        );
        assert!(ColorDef::parse_string("#ggg").is_err());
        assert!(ColorDef::parse_string("#abcd").is_err());
        assert!(ColorDef::parse_string("#é1").is_err());
    }

    #[test]
    fn palette_values() {
        assert_eq!(
            ColorDef::parse_value(&Value::Number(208.into())).unwrap(),
            ColorDef::Color256(208)
        );
        assert_eq!(
            ColorDef::parse_string("240").unwrap(),
            ColorDef::Color256(240)
        );
        assert!(ColorDef::parse_value(&Value::Number(256.into())).is_err());
    }

    #[test]
    fn rgb_tuples() {
        let seq = Value::Sequence(vec![
            Value::Number(0.into()),
            Value::Number(0.into()),
            Value::Number(128.into()),
        ]);
        assert_eq!(
            ColorDef::parse_value(&seq).unwrap(),
            ColorDef::Rgb(0, 0, 128)
        );

        let short = Value::Sequence(vec![Value::Number(1.into())]);
        assert!(ColorDef::parse_value(&short).is_err());

        let big = Value::Sequence(vec![
            Value::Number(300.into()),
            Value::Number(0.into()),
            Value::Number(0.into()),
        ]);
        assert!(ColorDef::parse_value(&big).is_err());
    }

    #[test]
    fn other_yaml_values_are_rejected() {
        assert!(ColorDef::parse_value(&Value::Bool(true)).is_err());
    }

    #[test]
    fn console_conversion() {
        assert_eq!(
            ColorDef::Named(Color::Red).to_console_color(),
            Color::Red
        );
        assert_eq!(
            ColorDef::Rgb(255, 0, 0).to_console_color(),
            Color::Color256(196)
        );
    }
}
