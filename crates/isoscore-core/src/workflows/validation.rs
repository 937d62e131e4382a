use crate::core::catalog::reference::{BindingEnergyBenchmark, StabilityReference};
use crate::core::models::decay::DecayMode;
use crate::core::models::nuclide::Nuclide;
use crate::engine::binding;
use crate::engine::config::EvaluatorConfig;
use crate::engine::stability;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingEnergyCheck {
    pub nuclide: Nuclide,
    pub calculated_mev: f64,
    pub accepted_mev: f64,
}

impl BindingEnergyCheck {
    pub fn error_percent(&self) -> f64 {
        (self.calculated_mev - self.accepted_mev).abs() / self.accepted_mev * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingEnergyValidation {
    pub checks: Vec<BindingEnergyCheck>,
}

impl BindingEnergyValidation {
    /// Mean absolute percent error, `None` for an empty benchmark set.
    pub fn average_error_percent(&self) -> Option<f64> {
        if self.checks.is_empty() {
            return None;
        }
        let total: f64 = self.checks.iter().map(BindingEnergyCheck::error_percent).sum();
        Some(total / self.checks.len() as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityCheck {
    pub nuclide: Nuclide,
    pub expected_stable: bool,
    pub score: f64,
    pub decay_mode: DecayMode,
}

impl StabilityCheck {
    pub fn predicted_stable(&self) -> bool {
        self.decay_mode.is_stable()
    }

    pub fn is_correct(&self) -> bool {
        self.predicted_stable() == self.expected_stable
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StabilityValidation {
    pub checks: Vec<StabilityCheck>,
}

impl StabilityValidation {
    pub fn overall_accuracy(&self) -> Option<f64> {
        accuracy(self.checks.iter())
    }

    pub fn stable_accuracy(&self) -> Option<f64> {
        accuracy(self.checks.iter().filter(|c| c.expected_stable))
    }

    pub fn unstable_accuracy(&self) -> Option<f64> {
        accuracy(self.checks.iter().filter(|c| !c.expected_stable))
    }

    pub fn correct(&self) -> usize {
        self.checks.iter().filter(|c| c.is_correct()).count()
    }
}

fn accuracy<'a>(checks: impl Iterator<Item = &'a StabilityCheck>) -> Option<f64> {
    let (total, correct) = checks.fold((0usize, 0usize), |(total, correct), check| {
        (total + 1, correct + usize::from(check.is_correct()))
    });
    (total > 0).then(|| correct as f64 / total as f64)
}

#[instrument(skip_all, name = "binding_energy_validation")]
pub fn validate_binding_energies(
    benchmarks: &[BindingEnergyBenchmark],
    config: &EvaluatorConfig,
) -> BindingEnergyValidation {
    let checks = benchmarks
        .iter()
        .map(|benchmark| BindingEnergyCheck {
            nuclide: benchmark.nuclide,
            calculated_mev: binding::compute(&benchmark.nuclide, &config.enhancement).value_mev,
            accepted_mev: benchmark.accepted_mev,
        })
        .collect();
    let validation = BindingEnergyValidation { checks };

    if let Some(average) = validation.average_error_percent() {
        info!(
            benchmarks = validation.checks.len(),
            average_error_percent = average,
            "Binding-energy validation finished."
        );
    }
    validation
}

#[instrument(skip_all, name = "stability_validation")]
pub fn validate_stability(
    references: &[StabilityReference],
    config: &EvaluatorConfig,
) -> StabilityValidation {
    let checks = references
        .iter()
        .map(|reference| {
            let assessment = stability::compute(&reference.nuclide, config);
            StabilityCheck {
                nuclide: reference.nuclide,
                expected_stable: reference.stable,
                score: assessment.score,
                decay_mode: assessment.decay_mode,
            }
        })
        .collect();
    let validation = StabilityValidation { checks };

    info!(
        references = validation.checks.len(),
        correct = validation.correct(),
        "Stability validation finished."
    );
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::reference::{BINDING_ENERGY_BENCHMARKS, STABILITY_REFERENCE_SET};

    #[test]
    fn error_percent_is_relative_to_accepted_value() {
        let check = BindingEnergyCheck {
            nuclide: Nuclide::new(6, 6).unwrap(),
            calculated_mev: 110.0,
            accepted_mev: 100.0,
        };
        assert!((check.error_percent() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn binding_validation_reports_exact_helium_and_heavy_overshoot() {
        let validation =
            validate_binding_energies(&BINDING_ENERGY_BENCHMARKS, &EvaluatorConfig::default());
        assert_eq!(validation.checks.len(), BINDING_ENERGY_BENCHMARKS.len());

        let he4 = &validation.checks[0];
        assert_eq!(he4.error_percent(), 0.0);

        let u235 = validation
            .checks
            .iter()
            .find(|c| c.nuclide.label() == "U-235")
            .unwrap();
        assert!(u235.calculated_mev > u235.accepted_mev);
        assert!(u235.error_percent() > 50.0);

        let average = validation.average_error_percent().unwrap();
        assert!(average > 30.0 && average < 45.0);
    }

    #[test]
    fn empty_validations_have_no_accuracy() {
        assert_eq!(BindingEnergyValidation::default().average_error_percent(), None);
        assert_eq!(StabilityValidation::default().overall_accuracy(), None);
    }

    #[test]
    fn stability_validation_matches_calibrated_accuracy() {
        let validation =
            validate_stability(&STABILITY_REFERENCE_SET, &EvaluatorConfig::default());
        assert_eq!(validation.checks.len(), 29);
        assert_eq!(validation.correct(), 19);

        let stable = validation.stable_accuracy().unwrap();
        let unstable = validation.unstable_accuracy().unwrap();
        assert!((stable - 12.0 / 14.0).abs() < 1e-12);
        assert!((unstable - 7.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn stability_validation_misses_light_odd_stable_nuclides() {
        let validation =
            validate_stability(&STABILITY_REFERENCE_SET, &EvaluatorConfig::default());
        let mut missed_stable: Vec<String> = validation
            .checks
            .iter()
            .filter(|c| c.expected_stable && !c.is_correct())
            .map(|c| c.nuclide.label())
            .collect();
        missed_stable.sort();
        assert_eq!(missed_stable, vec!["C-13", "Li-7"]);
    }
}
