use crate::core::constants::GOLDEN_RATIO;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_TESLA_BOOST: f64 = 0.15;
pub const DEFAULT_CONSCIOUSNESS_LEVEL: f64 = 0.82;
pub const DEFAULT_ERROR_CORRECTION: f64 = 0.965;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamError {
    #[error("Parameter '{name}' must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("Golden ratio must be finite and at least 1, got {0}")]
    InvalidGoldenRatio(f64),
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid enhancement parameters in '{path}': {source}")]
    Invalid { path: String, source: ParamError },
}

/// Tunable knobs of the enhancement layer.
///
/// Set once when an evaluator is built and never mutated afterwards, so every
/// calculation is a pure function of (Z, N, config).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct EnhancementConfig {
    tesla_boost: f64,
    consciousness_level: f64,
    #[serde(skip)]
    golden_ratio: f64,
    error_correction: f64,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            tesla_boost: DEFAULT_TESLA_BOOST,
            consciousness_level: DEFAULT_CONSCIOUSNESS_LEVEL,
            golden_ratio: GOLDEN_RATIO,
            error_correction: DEFAULT_ERROR_CORRECTION,
        }
    }
}

impl EnhancementConfig {
    pub fn new(
        tesla_boost: f64,
        consciousness_level: f64,
        error_correction: f64,
    ) -> Result<Self, ParamError> {
        let config = Self {
            tesla_boost,
            consciousness_level,
            golden_ratio: GOLDEN_RATIO,
            error_correction,
        };
        config.validate()?;
        Ok(config)
    }

    /// Enhancement layer that leaves every value untouched.
    pub fn neutral() -> Self {
        Self {
            tesla_boost: 0.0,
            consciousness_level: 0.5,
            golden_ratio: 1.0,
            error_correction: 1.0,
        }
    }

    pub fn with_tesla_boost(mut self, value: f64) -> Result<Self, ParamError> {
        self.tesla_boost = value;
        self.validate()?;
        Ok(self)
    }

    pub fn with_consciousness_level(mut self, value: f64) -> Result<Self, ParamError> {
        self.consciousness_level = value;
        self.validate()?;
        Ok(self)
    }

    pub fn with_error_correction(mut self, value: f64) -> Result<Self, ParamError> {
        self.error_correction = value;
        self.validate()?;
        Ok(self)
    }

    #[inline]
    pub fn tesla_boost(&self) -> f64 {
        self.tesla_boost
    }

    #[inline]
    pub fn consciousness_level(&self) -> f64 {
        self.consciousness_level
    }

    #[inline]
    pub fn golden_ratio(&self) -> f64 {
        self.golden_ratio
    }

    #[inline]
    pub fn error_correction(&self) -> f64 {
        self.error_correction
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, value) in [
            ("tesla-boost", self.tesla_boost),
            ("consciousness-level", self.consciousness_level),
            ("error-correction", self.error_correction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamError::OutOfUnitRange { name, value });
            }
        }
        if !self.golden_ratio.is_finite() || self.golden_ratio < 1.0 {
            return Err(ParamError::InvalidGoldenRatio(self.golden_ratio));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate().map_err(|e| ParamLoadError::Invalid {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_uses_calibrated_values() {
        let config = EnhancementConfig::default();
        assert_eq!(config.tesla_boost(), 0.15);
        assert_eq!(config.consciousness_level(), 0.82);
        assert_eq!(config.golden_ratio(), GOLDEN_RATIO);
        assert_eq!(config.error_correction(), 0.965);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_rejects_values_outside_unit_interval() {
        assert_eq!(
            EnhancementConfig::new(1.5, 0.5, 0.9),
            Err(ParamError::OutOfUnitRange {
                name: "tesla-boost",
                value: 1.5
            })
        );
        assert!(matches!(
            EnhancementConfig::new(0.1, -0.1, 0.9),
            Err(ParamError::OutOfUnitRange {
                name: "consciousness-level",
                ..
            })
        ));
        assert!(matches!(
            EnhancementConfig::new(0.1, 0.5, f64::NAN),
            Err(ParamError::OutOfUnitRange {
                name: "error-correction",
                ..
            })
        ));
    }

    #[test]
    fn with_setters_replace_a_single_value() {
        let config = EnhancementConfig::default()
            .with_tesla_boost(0.3)
            .unwrap()
            .with_consciousness_level(0.6)
            .unwrap();
        assert_eq!(config.tesla_boost(), 0.3);
        assert_eq!(config.consciousness_level(), 0.6);
        assert_eq!(config.error_correction(), DEFAULT_ERROR_CORRECTION);
        assert!(EnhancementConfig::default().with_error_correction(2.0).is_err());
    }

    #[test]
    fn neutral_config_is_valid() {
        assert!(EnhancementConfig::neutral().validate().is_ok());
    }

    #[test]
    fn load_succeeds_with_partial_toml_and_fills_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("enhancement.toml");
        fs::write(&file_path, "tesla-boost = 0.3\nconsciousness-level = 0.5\n").unwrap();

        let config = EnhancementConfig::load(&file_path).unwrap();
        assert_eq!(config.tesla_boost(), 0.3);
        assert_eq!(config.consciousness_level(), 0.5);
        assert_eq!(config.error_correction(), DEFAULT_ERROR_CORRECTION);
        assert_eq!(config.golden_ratio(), GOLDEN_RATIO);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("non_existent.toml");
        let result = EnhancementConfig::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_unknown_keys() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("unknown.toml");
        fs::write(&file_path, "warp-factor = 9.0\n").unwrap();
        let result = EnhancementConfig::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_does_not_allow_overriding_the_golden_ratio() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("golden.toml");
        fs::write(&file_path, "golden-ratio = 2.0\n").unwrap();
        let result = EnhancementConfig::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_out_of_range_values() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.toml");
        fs::write(&file_path, "error-correction = 1.2\n").unwrap();
        let result = EnhancementConfig::load(&file_path);
        assert!(matches!(
            result,
            Err(ParamLoadError::Invalid {
                source: ParamError::OutOfUnitRange { .. },
                ..
            })
        ));
    }
}
