//! Theme loading errors.
//!
//! Looking a theme up never fails; only loading theme definitions does.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading theme definitions.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read theme file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme definition is not valid YAML, or has the wrong shape.
    #[error("failed to parse theme '{theme}': {source}")]
    Parse {
        theme: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A style names a region that does not exist.
    #[error("unknown region '{region}' in theme '{theme}'")]
    UnknownRegion { theme: String, region: String },

    /// A region's style could not be parsed.
    #[error("invalid style for region '{region}' in theme '{theme}': {message}")]
    InvalidStyle {
        theme: String,
        region: String,
        message: String,
    },

    /// The border style name is not recognized.
    #[error("invalid border in theme '{theme}': {message}")]
    InvalidBorder { theme: String, message: String },

    /// A theme extends a theme that is not registered.
    #[error("theme '{theme}' extends unknown theme '{base}'")]
    UnknownBase { theme: String, base: String },

    /// The theme file has no usable name.
    #[error("cannot derive a theme name from {}", .path.display())]
    Unnamed { path: PathBuf },
}

/// Result type for theme loading.
pub type Result<T> = std::result::Result<T, ThemeError>;
