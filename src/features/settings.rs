//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Initial window geometry
    pub window: WindowSettings,
    /// Keyboard shortcuts
    pub keybindings: KeyBindings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language code ("en" or "zh")
    pub language: String,
    /// Stop the background pulse; started circles are drawn fully opaque
    pub reduce_motion: bool,
}

/// Window settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "en".to_string(),
            reduce_motion: false,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        // Portrait, phone-like proportions
        Self {
            width: 430.0,
            height: 860.0,
        }
    }
}

impl WindowSettings {
    pub fn size(&self) -> iced::Size {
        iced::Size::new(self.width.max(1.0), self.height.max(1.0))
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "highlight", "Highlight")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from `path`, falling back to defaults if it is missing
    /// or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("highlight-settings-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn round_trip_through_file() {
        let path = scratch_path("round-trip");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.display.language = "zh".to_string();
        settings.window.width = 500.0;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(loaded.display.dark_mode);
        assert_eq!(loaded.display.language, "zh");
        assert_eq!(loaded.window.width, 500.0);
        assert_eq!(loaded.window.height, 860.0);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn partial_document_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "display": { "reduce_motion": true } }"#).unwrap();
        assert!(settings.display.reduce_motion);
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.display.language, "en");
        assert_eq!(settings.window.width, 430.0);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let path = scratch_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        match Settings::load_from_file(&path) {
            Err(SettingsError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn unreadable_settings_fall_back_to_defaults() {
        let path = scratch_path("fallback");
        assert_eq!(Settings::load_or_default(&path).window.width, 430.0);

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        let settings = Settings::load_or_default(&path);
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.display.language, "en");

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = scratch_path("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }
}
