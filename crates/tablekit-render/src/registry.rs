//! Theme registry: name → token bundle, with graceful fallback.
//!
//! The registry starts with the built-in `default` and `windows95` themes.
//! More themes can be added in code or loaded from YAML:
//!
//! ```yaml
//! # themes/midnight.yaml
//! extends: default
//! border: heavy
//! styles:
//!   header_cell: "bold bright_white on 17"
//!   cell:
//!     fg: bright_white
//!   pagination_button_active: reverse
//! ```
//!
//! A loaded theme starts as a copy of the theme it `extends` (the registry
//! default when absent) and overrides only the regions it names.
//!
//! Resolving a name never fails: unknown names resolve to the default
//! theme.
//!
//! ```rust
//! use tablekit_render::ThemeRegistry;
//!
//! let mut registry = ThemeRegistry::new();
//! registry
//!     .add_yaml("midnight", "extends: windows95\nborder: heavy")
//!     .unwrap();
//!
//! assert_eq!(registry.resolve("midnight").name(), "midnight");
//! assert_eq!(registry.resolve("nonexistent").name(), "default");
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::border::BorderStyle;
use crate::error::{Result, ThemeError};
use crate::region::Region;
use crate::style::parse_style;
use crate::theme::{ThemeTokens, DEFAULT_THEME};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    #[serde(default)]
    extends: Option<String>,
    #[serde(default)]
    border: Option<String>,
    #[serde(default)]
    styles: serde_yaml::Mapping,
}

/// Named theme bundles.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, ThemeTokens>,
    default: String,
    fallback: ThemeTokens,
}

impl ThemeRegistry {
    /// Creates a registry holding the built-in themes, with `default` as
    /// the fallback.
    pub fn new() -> Self {
        let mut registry = ThemeRegistry {
            themes: BTreeMap::new(),
            default: DEFAULT_THEME.to_string(),
            fallback: ThemeTokens::default_theme(),
        };
        registry.add(ThemeTokens::default_theme());
        registry.add(ThemeTokens::windows95());
        registry
    }

    /// Looks a theme up. Unknown names resolve to the default theme.
    pub fn resolve(&self, name: &str) -> &ThemeTokens {
        if let Some(theme) = self.themes.get(name) {
            return theme;
        }
        debug!(theme = name, fallback = %self.default, "unknown theme, using default");
        self.themes.get(&self.default).unwrap_or(&self.fallback)
    }

    /// The default theme.
    pub fn default_theme(&self) -> &ThemeTokens {
        self.resolve(&self.default)
    }

    pub fn default_name(&self) -> &str {
        &self.default
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Registered theme names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Registers a theme under its own name, replacing any theme of that
    /// name.
    pub fn add(&mut self, theme: ThemeTokens) {
        debug!(theme = theme.name(), "theme registered");
        self.themes.insert(theme.name().to_string(), theme);
    }

    /// Makes a registered theme the fallback. Returns `false`, changing
    /// nothing, if no theme has that name.
    pub fn set_default(&mut self, name: &str) -> bool {
        if !self.contains(name) {
            return false;
        }
        self.default = name.to_string();
        true
    }

    /// Parses a theme from YAML and registers it under `name`.
    pub fn add_yaml(&mut self, name: &str, yaml: &str) -> Result<()> {
        let theme = self.parse_theme(name, yaml)?;
        self.add(theme);
        Ok(())
    }

    /// Loads a theme file. The theme is named after the file stem, so
    /// `themes/midnight.yaml` registers `midnight`. Returns the name.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<String> {
        let path = path.as_ref();
        let name = theme_name(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_yaml(&name, &content)?;
        Ok(name)
    }

    /// Loads every `.yaml`/`.yml` file in a directory. Themes may extend
    /// each other in any order. Returns the loaded names, sorted.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let io_err = |source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut pending: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(path).map_err(io_err)? {
            let file = entry.map_err(io_err)?.path();
            let is_yaml = file
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if file.is_file() && is_yaml {
                pending.push(file);
            }
        }
        pending.sort();

        // Retry files whose base is not loaded yet until a pass makes no
        // progress.
        let mut loaded = Vec::new();
        while !pending.is_empty() {
            let before = pending.len();
            let mut waiting = Vec::new();
            let mut missing = None;
            for file in pending {
                match self.add_file(&file) {
                    Ok(name) => loaded.push(name),
                    Err(err @ ThemeError::UnknownBase { .. }) => {
                        missing = Some(err);
                        waiting.push(file);
                    }
                    Err(err) => return Err(err),
                }
            }
            match missing {
                Some(err) if waiting.len() == before => return Err(err),
                _ => pending = waiting,
            }
        }
        loaded.sort();
        Ok(loaded)
    }

    fn parse_theme(&self, name: &str, yaml: &str) -> Result<ThemeTokens> {
        let file: ThemeFile = if yaml.trim().is_empty() {
            ThemeFile::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|source| ThemeError::Parse {
                theme: name.to_string(),
                source,
            })?
        };

        let mut theme = match &file.extends {
            Some(base) => self
                .themes
                .get(base)
                .ok_or_else(|| ThemeError::UnknownBase {
                    theme: name.to_string(),
                    base: base.clone(),
                })?
                .clone(),
            None => self.default_theme().clone(),
        }
        .with_name(name);

        if let Some(border) = &file.border {
            let border: BorderStyle = border.parse().map_err(|message| ThemeError::InvalidBorder {
                theme: name.to_string(),
                message,
            })?;
            theme.set_border(border);
        }

        for (key, value) in &file.styles {
            let region_name = match key.as_str() {
                Some(key) => key.to_string(),
                None => format!("{:?}", key),
            };
            let region: Region = region_name
                .parse()
                .map_err(|_| ThemeError::UnknownRegion {
                    theme: name.to_string(),
                    region: region_name.clone(),
                })?;
            let style = parse_style(value).map_err(|message| ThemeError::InvalidStyle {
                theme: name.to_string(),
                region: region_name,
                message,
            })?;
            theme.set_style(region, style);
        }

        Ok(theme)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn theme_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ThemeError::Unnamed {
            path: path.to_path_buf(),
        })
}
