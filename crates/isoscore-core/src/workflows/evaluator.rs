use super::medical::{self, MedicalCandidate, MedicalScan};
use super::validation::{self, BindingEnergyValidation, StabilityValidation};
use crate::core::catalog::reference::{
    BINDING_ENERGY_BENCHMARKS, STABILITY_REFERENCE_SET, StabilityReference,
};
use crate::core::models::decay::DecayMode;
use crate::engine::binding::{self, BindingEnergy};
use crate::engine::config::EvaluatorConfig;
use crate::engine::error::EvaluationError;
use crate::engine::progress::ProgressReporter;
use crate::engine::stability::{self, Stability};

/// Entry point for the three evaluations.
///
/// Holds only an immutable [`EvaluatorConfig`]; every method is a pure function of
/// its inputs, so an evaluator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IsotopeEvaluator {
    config: EvaluatorConfig,
}

impl IsotopeEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Total binding energy in MeV.
    pub fn binding_energy(&self, z: i64, n: i64) -> Result<f64, EvaluationError> {
        self.binding_energy_breakdown(z, n).map(|energy| energy.value_mev)
    }

    /// Binding energy together with its regime and the uncorrected SEMF terms.
    pub fn binding_energy_breakdown(
        &self,
        z: i64,
        n: i64,
    ) -> Result<BindingEnergy, EvaluationError> {
        binding::compute_binding_energy(z, n, &self.config.enhancement)
    }

    /// Stability score in [0, 1] and the predicted decay mode.
    pub fn stability(&self, z: i64, n: i64) -> Result<(f64, DecayMode), EvaluationError> {
        self.stability_assessment(z, n)
            .map(|assessment| (assessment.score, assessment.decay_mode))
    }

    pub fn stability_assessment(&self, z: i64, n: i64) -> Result<Stability, EvaluationError> {
        stability::compute_stability(z, n, &self.config)
    }

    /// Ranked candidates whose stability falls inside the medical window.
    pub fn medical_candidates(
        &self,
        z_max: u32,
    ) -> Result<Vec<MedicalCandidate>, EvaluationError> {
        self.medical_scan(z_max, &ProgressReporter::new())
            .map(|scan| scan.candidates)
    }

    pub fn medical_scan(
        &self,
        z_max: u32,
        reporter: &ProgressReporter,
    ) -> Result<MedicalScan, EvaluationError> {
        medical::run(z_max, &self.config, reporter)
    }

    pub fn validate_binding_energies(&self) -> BindingEnergyValidation {
        validation::validate_binding_energies(&BINDING_ENERGY_BENCHMARKS, &self.config)
    }

    /// Scores `references`, or the built-in reference set when `None`.
    pub fn validate_stability(
        &self,
        references: Option<&[StabilityReference]>,
    ) -> StabilityValidation {
        validation::validate_stability(
            references.unwrap_or(&STABILITY_REFERENCE_SET),
            &self.config,
        )
    }
}
