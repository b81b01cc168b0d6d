//! Population parameters (parsed from TOML) with the classic snowfall defaults

use serde::{Deserialize, Serialize};
use snowfall_core::{Result, SnowfallError};

/// Hard cap on particle count
pub const MAX_PARTICLES: usize = 10_000;

/// Ranges are half-open: `min` inclusive, `max` exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowfallConfig {
    pub count: usize,
    pub diameter_min: u32,
    pub diameter_max: u32,
    pub alpha_min: u32,
    pub alpha_max: u32,
    pub spawn_y_min: i32,
    pub spawn_y_max: i32,
    pub speed_min: f32,
    pub speed_max: f32,
    /// Where a particle re-enters after falling past the bottom edge
    pub reset_y: f32,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self {
            count: 100,
            diameter_min: 5,
            diameter_max: 15,
            alpha_min: 150,
            alpha_max: 255,
            spawn_y_min: -500,
            spawn_y_max: 0,
            speed_min: 1.0,
            speed_max: 4.0,
            reset_y: crate::update::RESET_Y,
        }
    }
}

impl SnowfallConfig {
    /// Reject parameters `populate` cannot draw from
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 || self.count > MAX_PARTICLES {
            return Err(SnowfallError::InvalidCount {
                count: self.count,
                max: MAX_PARTICLES,
            });
        }
        if self.diameter_min == 0 {
            return Err(SnowfallError::InvalidSize(self.diameter_min));
        }
        check_range("diameter", self.diameter_min as f64, self.diameter_max as f64)?;
        // Integer draws happen in i32
        if i32::try_from(self.diameter_max).is_err() {
            return Err(range_error(
                "diameter",
                self.diameter_min as f64,
                self.diameter_max as f64,
            ));
        }
        check_range("alpha", self.alpha_min as f64, self.alpha_max as f64)?;
        // Exclusive upper bound of 256 still draws at most 255
        if self.alpha_max > 256 {
            return Err(range_error("alpha", self.alpha_min as f64, self.alpha_max as f64));
        }
        check_range("spawn_y", self.spawn_y_min as f64, self.spawn_y_max as f64)?;
        check_range("speed", self.speed_min as f64, self.speed_max as f64)?;
        // A flake that never moves down never wraps
        if self.speed_min <= 0.0 {
            return Err(range_error("speed", self.speed_min as f64, self.speed_max as f64));
        }
        if !self.reset_y.is_finite() {
            return Err(SnowfallError::ConfigError(format!(
                "reset_y must be finite, got {}",
                self.reset_y
            )));
        }
        Ok(())
    }
}

fn check_range(field: &str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Err(range_error(field, min, max));
    }
    Ok(())
}

fn range_error(field: &str, min: f64, max: f64) -> SnowfallError {
    SnowfallError::InvalidRange {
        field: field.to_string(),
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = SnowfallConfig::default();
        config.validate().unwrap();
        assert_eq!(config.count, 100);
        assert_eq!(config.reset_y, -10.0);
    }

    #[test]
    fn parse_from_toml() {
        let toml_str = r#"
count = 250
diameter_min = 2
diameter_max = 4
speed_max = 6.0
"#;
        let config: SnowfallConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        assert_eq!(config.count, 250);
        assert_eq!(config.diameter_min, 2);
        assert_eq!(config.diameter_max, 4);
        assert!((config.speed_max - 6.0).abs() < 0.01);
        // Untouched keys keep defaults
        assert_eq!(config.alpha_min, 150);
    }

    #[test]
    fn zero_count_rejected() {
        let config = SnowfallConfig {
            count: 0,
            ..SnowfallConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnowfallError::InvalidCount { count: 0, .. })
        ));
    }

    #[test]
    fn oversized_count_rejected() {
        let config = SnowfallConfig {
            count: MAX_PARTICLES + 1,
            ..SnowfallConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_diameter_rejected() {
        let config = SnowfallConfig {
            diameter_min: 0,
            ..SnowfallConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnowfallError::InvalidSize(0))
        ));
    }

    #[test]
    fn inverted_range_rejected() {
        let config = SnowfallConfig {
            speed_min: 4.0,
            speed_max: 1.0,
            ..SnowfallConfig::default()
        };
        match config.validate() {
            Err(SnowfallError::InvalidRange { field, .. }) => assert_eq!(field, "speed"),
            other => panic!("Expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn alpha_above_channel_max_rejected() {
        let config = SnowfallConfig {
            alpha_max: 300,
            ..SnowfallConfig::default()
        };
        assert!(config.validate().is_err());

        let full = SnowfallConfig {
            alpha_max: 256,
            ..SnowfallConfig::default()
        };
        full.validate().unwrap();
    }

    #[test]
    fn diameter_beyond_i32_rejected() {
        let config = SnowfallConfig {
            diameter_max: 3_000_000_000,
            ..SnowfallConfig::default()
        };
        match config.validate() {
            Err(SnowfallError::InvalidRange { field, .. }) => assert_eq!(field, "diameter"),
            other => panic!("Expected InvalidRange, got {other:?}"),
        }

        let widest = SnowfallConfig {
            diameter_max: i32::MAX as u32,
            ..SnowfallConfig::default()
        };
        widest.validate().unwrap();
    }

    #[test]
    fn non_positive_speed_rejected() {
        let rising = SnowfallConfig {
            speed_min: -4.0,
            speed_max: -1.0,
            ..SnowfallConfig::default()
        };
        match rising.validate() {
            Err(SnowfallError::InvalidRange { field, .. }) => assert_eq!(field, "speed"),
            other => panic!("Expected InvalidRange, got {other:?}"),
        }

        let standing = SnowfallConfig {
            speed_min: 0.0,
            speed_max: 1.0,
            ..SnowfallConfig::default()
        };
        assert!(standing.validate().is_err());
    }

    #[test]
    fn bad_toml_type_is_parse_error() {
        let parsed: std::result::Result<SnowfallConfig, _> = toml::from_str("count = \"many\"");
        let err: SnowfallError = parsed.unwrap_err().into();
        assert!(matches!(err, SnowfallError::TomlParseError(_)));
    }
}
