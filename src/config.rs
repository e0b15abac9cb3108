//! Persisted user settings (lives in the OS config directory).

use std::path::{Path, PathBuf};

use egui::Vec2;
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, LogLevel};
use crate::ui::style::NetworkStyle;

pub const DEFAULT_CANVAS_WIDTH: f32 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings at {} are malformed: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub log_level: Option<LogLevel>,
    pub style: NetworkStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            log_level: None,
            style: NetworkStyle::default(),
        }
    }
}

impl Settings {
    /// Logical canvas size; non-positive or non-finite values fall back
    /// to the defaults.
    pub fn canvas_size(&self) -> Vec2 {
        let pick = |v: f32, default: f32| if v.is_finite() && v > 0.0 { v } else { default };
        Vec2::new(
            pick(self.canvas_width, DEFAULT_CANVAS_WIDTH),
            pick(self.canvas_height, DEFAULT_CANVAS_HEIGHT),
        )
    }

    /// Canvas size for this session: `--width` / `--height` on top of the
    /// saved size. The overrides are never written back to the settings file.
    pub fn startup_canvas_size(&self, cli: &Cli) -> Vec2 {
        let saved = self.canvas_size();
        let pick = |v: Option<f32>, fallback: f32| {
            v.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(fallback)
        };
        Vec2::new(pick(cli.width, saved.x), pick(cli.height, saved.y))
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&settings_path())
    }
}

pub fn settings_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "RustNetworkDiagram")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn settings_path() -> PathBuf {
    settings_dir().join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.canvas_size(), Vec2::new(1200.0, 600.0));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut settings = Settings::default();
        settings.canvas_width = 1600.0;
        settings.log_level = Some(LogLevel::Debug);
        settings.style.arrow_size = 14.0;
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "canvas_height": 900, "log_level": "warn" }"#).unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.canvas_size(), Vec2::new(1200.0, 900.0));
        assert_eq!(settings.log_level, Some(LogLevel::Warn));
        assert_eq!(settings.style, NetworkStyle::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ canvas_width: ").unwrap();
        assert!(matches!(Settings::load_from(&path), Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn cli_overrides_leave_settings_untouched() {
        let mut settings = Settings::default();
        settings.canvas_width = 1600.0;
        let cli = Cli::try_parse_from(["rust-network-diagram", "--height", "900"]).unwrap();
        assert_eq!(settings.startup_canvas_size(&cli), Vec2::new(1600.0, 900.0));
        assert_eq!(settings.canvas_size(), Vec2::new(1600.0, 600.0));
    }

    #[test]
    fn bad_sizes_fall_back() {
        let cli = Cli::try_parse_from(["rust-network-diagram", "--height", "0"]).unwrap();
        let mut settings = Settings::default();
        settings.canvas_width = -3.0;
        assert_eq!(settings.canvas_size(), Vec2::new(1200.0, 600.0));
        assert_eq!(settings.startup_canvas_size(&cli), Vec2::new(1200.0, 600.0));
    }
}
