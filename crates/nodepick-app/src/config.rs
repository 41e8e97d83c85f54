//! Application configuration.

use nodepick_core::{Palette, SerializableColor};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading an [`AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Largest surface edge accepted, matching the default wgpu texture limit.
pub const MAX_SURFACE_EDGE: u32 = 8192;

/// Application configuration.
///
/// Every field is optional in the JSON form; missing ones take the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Surface width in logical pixels.
    pub width: u32,
    /// Surface height in logical pixels.
    pub height: u32,
    pub background_color: SerializableColor,
    pub palette: Palette,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Interactable Graph Nodes".to_string(),
            width: 500,
            height: 500,
            background_color: SerializableColor::white(),
            palette: Palette::default(),
        }
    }
}

impl AppConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the surface size can back a window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_SURFACE_EDGE {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 1 and {MAX_SURFACE_EDGE}, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    pub fn background(&self) -> Color {
        self.background_color.into()
    }
}
