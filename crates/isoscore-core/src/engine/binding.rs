use super::error::EvaluationError;
use crate::core::constants::{
    HEAVY_LOG_SCALE, LIGHT_NUCLEUS_INTERCEPT, LIGHT_NUCLEUS_MAX_A, LIGHT_NUCLEUS_SLOPE,
};
use crate::core::formula::enhancement::BindingEnhancement;
use crate::core::formula::params::EnhancementConfig;
use crate::core::formula::semf::semf_terms;
use crate::core::formula::terms::SemfTerms;
use crate::core::models::nuclide::Nuclide;

/// Measured binding energies (MeV) returned verbatim for the lightest nuclei,
/// where the liquid-drop picture does not apply.
static ANCHORED_BINDING_ENERGIES: [(Nuclide, f64); 5] = [
    (Nuclide::tabulated(1, 0), 0.0),
    (Nuclide::tabulated(1, 1), 2.225),
    (Nuclide::tabulated(1, 2), 8.482),
    (Nuclide::tabulated(2, 1), 7.718),
    (Nuclide::tabulated(2, 2), 28.296),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingRegime {
    Anchored,
    Light,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingEnergy {
    pub nuclide: Nuclide,
    pub value_mev: f64,
    pub regime: BindingRegime,
    pub terms: Option<SemfTerms>,
}

impl BindingEnergy {
    pub fn per_nucleon(&self) -> f64 {
        self.value_mev / self.nuclide.mass_number() as f64
    }
}

pub fn anchored_binding_energy(nuclide: &Nuclide) -> Option<f64> {
    ANCHORED_BINDING_ENERGIES
        .iter()
        .find(|(anchor, _)| anchor == nuclide)
        .map(|&(_, value)| value)
}

pub fn regime_correction(mass_number: u32) -> (BindingRegime, f64) {
    let a = mass_number as f64;
    if mass_number <= LIGHT_NUCLEUS_MAX_A {
        (
            BindingRegime::Light,
            LIGHT_NUCLEUS_INTERCEPT + LIGHT_NUCLEUS_SLOPE * a,
        )
    } else {
        (BindingRegime::Heavy, 1.0 + HEAVY_LOG_SCALE * a.ln())
    }
}

/// Applies, in order: SEMF base, regime correction, Tesla resonance, consciousness,
/// golden ratio, error correction. Anchored nuclei skip every stage.
pub fn compute(nuclide: &Nuclide, config: &EnhancementConfig) -> BindingEnergy {
    if let Some(value_mev) = anchored_binding_energy(nuclide) {
        return BindingEnergy {
            nuclide: *nuclide,
            value_mev,
            regime: BindingRegime::Anchored,
            terms: None,
        };
    }

    let terms = semf_terms(nuclide);
    let (regime, correction) = regime_correction(nuclide.mass_number());
    let corrected = terms.total() * correction;
    let value_mev =
        BindingEnhancement::for_mass_number(nuclide.mass_number(), config).apply(corrected);

    BindingEnergy {
        nuclide: *nuclide,
        value_mev,
        regime,
        terms: Some(terms),
    }
}

pub fn compute_binding_energy(
    z: i64,
    n: i64,
    config: &EnhancementConfig,
) -> Result<BindingEnergy, EvaluationError> {
    let nuclide = Nuclide::new(z, n)?;
    Ok(compute(&nuclide, config))
}
