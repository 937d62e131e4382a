use crate::core::constants::{DEFAULT_MEDICAL_WINDOW, DEFAULT_STABILITY_THRESHOLD};
use crate::core::formula::params::{EnhancementConfig, ParamError};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("Invalid enhancement parameters: {0}")]
    Enhancement(#[from] ParamError),

    #[error("Medical window [{lower}, {upper}] must be a non-empty sub-interval of [0, 1]")]
    MedicalWindow { lower: f64, upper: f64 },

    #[error("Stability threshold must lie in [0, 1], got {0}")]
    StabilityThreshold(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedicalWindow {
    lower: f64,
    upper: f64,
}

impl MedicalWindow {
    pub fn new(lower: f64, upper: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) || lower > upper {
            return Err(ConfigError::MedicalWindow { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[inline]
    pub fn contains(&self, score: f64) -> bool {
        (self.lower..=self.upper).contains(&score)
    }
}

impl Default for MedicalWindow {
    fn default() -> Self {
        let (lower, upper) = DEFAULT_MEDICAL_WINDOW;
        Self { lower, upper }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvaluatorConfig {
    pub enhancement: EnhancementConfig,
    pub medical_window: MedicalWindow,
    pub stability_threshold: StabilityThreshold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityThreshold(f64);

impl StabilityThreshold {
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::StabilityThreshold(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for StabilityThreshold {
    fn default() -> Self {
        Self(DEFAULT_STABILITY_THRESHOLD)
    }
}

#[derive(Default)]
pub struct EvaluatorConfigBuilder {
    enhancement: Option<EnhancementConfig>,
    medical_window: Option<(f64, f64)>,
    stability_threshold: Option<f64>,
}

impl EvaluatorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enhancement(mut self, enhancement: EnhancementConfig) -> Self {
        self.enhancement = Some(enhancement);
        self
    }
    pub fn medical_window(mut self, lower: f64, upper: f64) -> Self {
        self.medical_window = Some((lower, upper));
        self
    }
    pub fn stability_threshold(mut self, threshold: f64) -> Self {
        self.stability_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<EvaluatorConfig, ConfigError> {
        let enhancement = self.enhancement.unwrap_or_default();
        enhancement.validate()?;
        let medical_window = match self.medical_window {
            Some((lower, upper)) => MedicalWindow::new(lower, upper)?,
            None => MedicalWindow::default(),
        };
        let stability_threshold = match self.stability_threshold {
            Some(value) => StabilityThreshold::new(value)?,
            None => StabilityThreshold::default(),
        };
        Ok(EvaluatorConfig {
            enhancement,
            medical_window,
            stability_threshold,
        })
    }
}
