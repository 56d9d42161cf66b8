//! Configuration persistence for editor settings

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for LineColor {
    fn default() -> Self {
        // #888888
        Self {
            r: 0x88 as f32 / 255.0,
            g: 0x88 as f32 / 255.0,
            b: 0x88 as f32 / 255.0,
        }
    }
}

impl LineColor {
    /// Convert to RGBA (0-255), fully opaque
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

/// Editor configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Interactive surface width in pixels
    pub viewport_width: u32,
    /// Interactive surface height in pixels
    pub viewport_height: u32,
    /// Color of the UV wireframe reference lines
    pub wireframe_color: LineColor,
    /// Wireframe stroke width in viewport pixels
    pub wireframe_width: f32,
    /// Lower bound applied to both scale axes
    pub min_scale: f64,
    /// Position change per pixel of drag in move mode
    pub move_sensitivity: f64,
    /// Scale change per pixel of vertical drag in scale mode
    pub scale_sensitivity: f64,
    /// Degrees per pixel of horizontal drag in rotate mode
    pub rotate_sensitivity: f64,
    /// Scale multiplier for one wheel step up
    pub wheel_zoom_in: f64,
    /// Scale multiplier for one wheel step down
    pub wheel_zoom_out: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1024,
            viewport_height: 1024,
            wireframe_color: LineColor::default(),
            wireframe_width: 1.0,
            min_scale: 1e-3,
            move_sensitivity: 1.0,
            scale_sensitivity: 0.01,
            rotate_sensitivity: 0.5,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
        }
    }
}

impl EditorConfig {
    /// Directory name under the user's config dir
    pub const APP_DIR: &'static str = "uvbake";
    const FILE_NAME: &'static str = "config.json";

    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) {
        let Some(path) = Self::default_path() else {
            log::error!("No config directory available for saving");
            return;
        };
        if let Err(err) = self.save_to(&path) {
            log::error!("Failed to save config: {:?}", err);
        }
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wireframe_color() {
        assert_eq!(LineColor::default().to_rgba_u8(), [0x88, 0x88, 0x88, 255]);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = EditorConfig {
            viewport_width: 512,
            wheel_zoom_out: 1.0 / 1.1,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(EditorConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "viewport_height": 600 }"#).unwrap();
        let config = EditorConfig::load_from(&path).unwrap();
        assert_eq!(config.viewport_height, 600);
        assert_eq!(config.viewport_width, 1024);
        assert_eq!(config.wheel_zoom_in, 1.1);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(EditorConfig::load_from(&path).is_err());
    }
}
