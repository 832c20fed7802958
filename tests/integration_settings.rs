//! Integration tests for Settings save/load functionality
//!
//! These tests verify that Settings can be saved to disk and loaded back, and that
//! hand-written partial files fall back to defaults. They use temporary directories for
//! isolation.

use std::fs;
use tempfile::TempDir;

use casement::casement::{
    menu::layout::OverflowPolicy,
    settings::{DEFAULT_SUBMENU_WIDTH, Settings},
};

/// Create a Settings instance with all non-default values
fn create_custom_settings() -> Settings {
    let mut settings = Settings::new();
    settings.menu.submenu_width = 260.0;
    settings.menu.show_submenu_labels = true;
    settings.menu.overflow_policy = OverflowPolicy::KeepRight;
    settings.window_controls.disable_minimize = true;
    settings.window_controls.disable_maximize = true;
    settings
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.json");
    let settings = create_custom_settings();

    settings.save_to(&path).expect("Failed to save settings");
    let loaded = Settings::load_from(&path).expect("Failed to load settings");

    assert_eq!(loaded, settings);
}

#[test]
fn test_saved_file_is_readable_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.json");
    create_custom_settings()
        .save_to(&path)
        .expect("Failed to save settings");

    let json = fs::read_to_string(&path).expect("Failed to read settings file");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
    assert_eq!(value["menu"]["overflow_policy"], "keep_right");
    assert_eq!(value["window_controls"]["disable_minimize"], true);
}

#[test]
fn test_partial_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, r#"{"window_controls":{"disable_maximize":true}}"#)
        .expect("Failed to write settings file");

    let loaded = Settings::load_from(&path).expect("Failed to load settings");

    assert!(loaded.window_controls.disable_maximize);
    assert!(!loaded.window_controls.disable_minimize);
    assert_eq!(loaded.menu.submenu_width, DEFAULT_SUBMENU_WIDTH);
    assert_eq!(loaded.menu.overflow_policy, OverflowPolicy::PinToRoomierEdge);
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = Settings::load_from(&temp_dir.path().join("missing.json"));
    assert!(result.is_err());
}

#[test]
fn test_load_malformed_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, "{ not json").expect("Failed to write settings file");
    assert!(Settings::load_from(&path).is_err());
}
