//! Path utilities for Casement configuration files.
//!
//! The configuration directory is:
//! - Windows: `%APPDATA%\Casement`
//! - macOS/Linux: `~/.casement`

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

#[cfg(target_os = "windows")]
const BASE_DIR_VAR: &str = "APPDATA";
#[cfg(target_os = "windows")]
const APP_DIR_NAME: &str = "Casement";

#[cfg(not(target_os = "windows"))]
const BASE_DIR_VAR: &str = "HOME";
#[cfg(not(target_os = "windows"))]
const APP_DIR_NAME: &str = ".casement";

/// Directory holding `settings.json` and `casement.log`, created on first use
pub fn config_dir() -> Result<PathBuf> {
    let base = std::env::var_os(BASE_DIR_VAR)
        .with_context(|| format!("{} is not set", BASE_DIR_VAR))?;
    let dir = PathBuf::from(base).join(APP_DIR_NAME);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    Ok(dir)
}

/// Get the path of a file inside the configuration directory
///
/// ### Arguments
/// - `file_name`: The name of the file
///
/// ### Returns
/// - `Ok(PathBuf)`: The path to the file (the file itself is not created)
pub fn config_file(file_name: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir().expect("Failed to get config dir");
        assert!(dir.is_dir(), "Config path should be a directory");
    }

    #[test]
    fn test_config_dir_name() {
        let dir = config_dir().expect("Failed to get config dir");
        assert_eq!(dir.file_name().and_then(|n| n.to_str()), Some(APP_DIR_NAME));
    }

    #[test]
    fn test_config_file_is_inside_config_dir() {
        let dir = config_dir().expect("Failed to get config dir");
        let file = config_file("settings.json").expect("Failed to get config file");
        assert_eq!(file.parent(), Some(dir.as_path()));
        assert!(file.ends_with("settings.json"));
    }
}
