use crate::cli::EvaluatorArgs;
use crate::error::{CliError, Result};
use isoscore::core::constants::DEFAULT_MEDICAL_WINDOW;
use isoscore::core::formula::params::EnhancementConfig;
use isoscore::engine::config::{EvaluatorConfig, EvaluatorConfigBuilder};
use tracing::debug;

/// Merges evaluator settings with precedence: command-line flag, then the
/// parameter file, then the built-in default.
pub fn build_config(
    args: &EvaluatorArgs,
    window: (Option<f64>, Option<f64>),
) -> Result<EvaluatorConfig> {
    let mut enhancement = match &args.config {
        Some(path) => {
            debug!("Loading enhancement parameters from '{}'.", path.display());
            EnhancementConfig::load(path)?
        }
        None => EnhancementConfig::default(),
    };

    if let Some(value) = args.tesla_boost {
        enhancement = enhancement.with_tesla_boost(value).map_err(config_error)?;
    }
    if let Some(value) = args.consciousness_level {
        enhancement = enhancement
            .with_consciousness_level(value)
            .map_err(config_error)?;
    }
    if let Some(value) = args.error_correction {
        enhancement = enhancement
            .with_error_correction(value)
            .map_err(config_error)?;
    }

    let mut builder = EvaluatorConfigBuilder::new().enhancement(enhancement);
    if let Some(threshold) = args.stability_threshold {
        builder = builder.stability_threshold(threshold);
    }
    let (lower, upper) = window;
    if lower.is_some() || upper.is_some() {
        let (default_lower, default_upper) = DEFAULT_MEDICAL_WINDOW;
        builder = builder.medical_window(
            lower.unwrap_or(default_lower),
            upper.unwrap_or(default_upper),
        );
    }

    let config = builder.build().map_err(config_error)?;
    debug!("Resolved evaluator configuration: {:?}", config);
    Ok(config)
}

fn config_error(e: impl std::fmt::Display) -> CliError {
    CliError::Config(e.to_string())
}
