//! Error types for Snowfall

use thiserror::Error;

/// The main error type for Snowfall operations
#[derive(Debug, Error)]
pub enum SnowfallError {
    #[error("Invalid size: diameter must be positive, got {0}")]
    InvalidSize(u32),

    #[error("Invalid particle count: must be between 1 and {max}, got {count}")]
    InvalidCount { count: usize, max: usize },

    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("Invalid range for {field}: [{min}, {max}) is empty or out of bounds")]
    InvalidRange { field: String, min: f64, max: f64 },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Snowfall operations
pub type Result<T> = std::result::Result<T, SnowfallError>;

impl From<toml::de::Error> for SnowfallError {
    fn from(err: toml::de::Error) -> Self {
        SnowfallError::TomlParseError(err.to_string())
    }
}
