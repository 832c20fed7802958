use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::casement::{
    menu::layout::{OverflowPolicy, SubmenuMetrics},
    utils::{atomic_write::atomic_write_file, paths},
    window_controls::WindowControlsConfig,
};

pub const DEFAULT_SUBMENU_WIDTH: f32 = 200.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    /// Width of every dropdown and submenu panel, in pixels
    pub submenu_width: f32,
    /// Show the submenu's label as a header at the top of its panel
    pub show_submenu_labels: bool,
    pub overflow_policy: OverflowPolicy,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            submenu_width: DEFAULT_SUBMENU_WIDTH,
            show_submenu_labels: false,
            overflow_policy: OverflowPolicy::default(),
        }
    }
}

impl MenuSettings {
    /// Build the layout inputs for the current viewport
    ///
    /// ### Arguments
    /// - `viewport_width`: The width of the viewport, read at render time
    ///
    /// ### Returns
    /// - `SubmenuMetrics`: The metrics for a layout pass
    pub fn metrics(&self, viewport_width: f32) -> SubmenuMetrics {
        SubmenuMetrics {
            viewport_width,
            submenu_width: self.submenu_width,
            policy: self.overflow_policy,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub menu: MenuSettings,
    pub window_controls: WindowControlsConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    fn settings_file_path() -> anyhow::Result<PathBuf> {
        paths::config_file("settings.json")
    }

    /// Save the settings to the settings file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::settings_file_path()?)
    }

    /// Save the settings to a specific path
    ///
    /// ### Arguments
    /// - `path`: The file to write
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write_file(path, json.as_bytes())?;
        log::debug!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Load the settings from the settings file
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::settings_file_path()?)
    }

    /// Load the settings from a specific path. Missing fields take their default values.
    ///
    /// ### Arguments
    /// - `path`: The file to read
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    /// Load the settings, falling back to the defaults if the file is missing or invalid
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::error!("Failed to load settings, using defaults: {}", e);
            Self::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_settings() {
        let settings = Settings::new();
        assert_eq!(settings.menu.submenu_width, DEFAULT_SUBMENU_WIDTH);
        assert!(!settings.menu.show_submenu_labels);
        assert_eq!(settings.menu.overflow_policy, OverflowPolicy::PinToRoomierEdge);
        assert!(!settings.window_controls.disable_minimize);
        assert!(!settings.window_controls.disable_maximize);
    }

    #[test]
    fn test_metrics_uses_given_viewport() {
        let metrics = MenuSettings::default().metrics(1280.0);
        assert_eq!(metrics.viewport_width, 1280.0);
        assert_eq!(metrics.submenu_width, DEFAULT_SUBMENU_WIDTH);
    }
}
