//! Player configuration: window settings plus snowfall parameters

use serde::{Deserialize, Serialize};
use snowfall_core::{Result, Rgba, SnowfallError};
use snowfall_particles::SnowfallConfig;
use std::path::Path;
use std::time::Duration;

/// Top-level config file layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed RNG seed; drawn from the clock when absent
    pub seed: Option<u32>,
    pub window: WindowConfig,
    pub snowfall: SnowfallConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Tick period in milliseconds
    pub tick_ms: u64,
    pub background: Rgba,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Snowfall".to_string(),
            width: 800,
            height: 600,
            tick_ms: 16,
            background: Rgba::new(24, 32, 56, 255),
        }
    }
}

impl WindowConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl AppConfig {
    /// Parse from TOML text. Missing sections and keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SnowfallError::InvalidViewport {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if self.window.tick_ms == 0 {
            return Err(SnowfallError::ConfigError(
                "window.tick_ms must be positive".to_string(),
            ));
        }
        self.snowfall.validate()
    }
}
