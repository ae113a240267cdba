//! Theme registry loading tests.

use std::fs;

use tablekit_render::{BorderStyle, OutputMode, Region, ThemeError, ThemeRegistry, ThemeTokens};
use tempfile::TempDir;

fn painted(registry: &ThemeRegistry, theme: &str, region: Region) -> String {
    registry
        .resolve(theme)
        .paint(region, "x", OutputMode::Term)
}

#[test]
fn builtins_are_registered() {
    let registry = ThemeRegistry::new();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["default", "windows95"]);
    assert_eq!(registry.default_name(), "default");
}

#[test]
fn unknown_theme_falls_back_to_default() {
    let registry = ThemeRegistry::new();
    let theme = registry.resolve("nonexistent");
    assert_eq!(theme.name(), "default");
    assert_eq!(theme.border(), BorderStyle::Rounded);
}

#[test]
fn set_default_changes_fallback() {
    let mut registry = ThemeRegistry::new();
    assert!(!registry.set_default("missing"));
    assert!(registry.set_default("windows95"));
    assert_eq!(registry.resolve("typo").name(), "windows95");
}

#[test]
fn yaml_overrides_only_named_regions() {
    let mut registry = ThemeRegistry::new();
    registry
        .add_yaml(
            "custom",
            "extends: windows95\nstyles:\n  cell: bold red\n",
        )
        .unwrap();

    assert_ne!(
        painted(&registry, "custom", Region::Cell),
        painted(&registry, "windows95", Region::Cell)
    );
    assert_eq!(
        painted(&registry, "custom", Region::HeaderCell),
        painted(&registry, "windows95", Region::HeaderCell)
    );
    assert_eq!(registry.resolve("custom").border(), BorderStyle::Double);
}

#[test]
fn yaml_without_extends_starts_from_default() {
    let mut registry = ThemeRegistry::new();
    registry.add_yaml("bare", "border: ascii").unwrap();
    let theme = registry.resolve("bare");
    assert_eq!(theme.border(), BorderStyle::Ascii);
    assert_eq!(
        painted(&registry, "bare", Region::HeaderCell),
        painted(&registry, "default", Region::HeaderCell)
    );
}

#[test]
fn empty_yaml_is_a_copy_of_default() {
    let mut registry = ThemeRegistry::new();
    registry.add_yaml("copy", "").unwrap();
    assert_eq!(registry.resolve("copy").name(), "copy");
    assert_eq!(registry.resolve("copy").border(), BorderStyle::Rounded);
}

#[test]
fn load_errors() {
    let mut registry = ThemeRegistry::new();
    assert!(matches!(
        registry.add_yaml("a", "styles:\n  headerCell: bold"),
        Err(ThemeError::UnknownRegion { region, .. }) if region == "headerCell"
    ));
    assert!(matches!(
        registry.add_yaml("b", "styles:\n  cell: glitter"),
        Err(ThemeError::InvalidStyle { .. })
    ));
    assert!(matches!(
        registry.add_yaml("c", "border: dotted"),
        Err(ThemeError::InvalidBorder { .. })
    ));
    assert!(matches!(
        registry.add_yaml("d", "extends: windows98"),
        Err(ThemeError::UnknownBase { base, .. }) if base == "windows98"
    ));
    assert!(matches!(
        registry.add_yaml("e", "colour: red"),
        Err(ThemeError::Parse { .. })
    ));
    assert!(!registry.contains("a"));
}

#[test]
fn error_messages_name_the_theme() {
    let mut registry = ThemeRegistry::new();
    let err = registry.add_yaml("midnight", "border: dotted").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid border in theme 'midnight': unknown border style: dotted"
    );
}

#[test]
fn add_file_names_theme_after_stem() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("midnight.yaml");
    fs::write(&path, "extends: default\nborder: heavy\n").unwrap();

    let mut registry = ThemeRegistry::new();
    let name = registry.add_file(&path).unwrap();
    assert_eq!(name, "midnight");
    assert_eq!(registry.resolve("midnight").border(), BorderStyle::Heavy);
}

#[test]
fn add_file_missing_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut registry = ThemeRegistry::new();
    let err = registry.add_file(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ThemeError::Io { .. }));
}

#[test]
fn add_dir_resolves_extends_in_any_order() {
    let dir = TempDir::new().unwrap();
    // "a" extends "b", which sorts after it
    fs::write(dir.path().join("a.yaml"), "extends: b\n").unwrap();
    fs::write(dir.path().join("b.yml"), "border: light\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a theme").unwrap();

    let mut registry = ThemeRegistry::new();
    let loaded = registry.add_dir(dir.path()).unwrap();
    assert_eq!(loaded, vec!["a", "b"]);
    assert_eq!(registry.resolve("a").border(), BorderStyle::Light);
}

#[test]
fn add_dir_reports_missing_base() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.yaml"), "extends: ghost\n").unwrap();

    let mut registry = ThemeRegistry::new();
    let err = registry.add_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ThemeError::UnknownBase { .. }));
}

#[test]
fn add_replaces_same_name() {
    let mut registry = ThemeRegistry::new();
    registry.add(ThemeTokens::new("windows95").with_border(BorderStyle::None));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.resolve("windows95").border(), BorderStyle::None);
}
