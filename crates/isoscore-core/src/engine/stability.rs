use super::binding;
use super::config::EvaluatorConfig;
use super::error::EvaluationError;
use crate::core::constants::{
    ALPHA_DECAY_MIN_A, BOUND_BONUS, BOUND_PER_NUCLEON_MEV, DOUBLY_MAGIC_BONUS, LOOSELY_BOUND_PENALTY,
    LOOSELY_BOUND_PER_NUCLEON_MEV, MAGIC_BONUS, POST_LEAD_PENALTY, POST_LEAD_Z,
    RATIO_DEVIATION_PENALTY, STABILITY_BASELINE, TIGHTLY_BOUND_BONUS,
    TIGHTLY_BOUND_PER_NUCLEON_MEV, TRANSURANIC_PENALTY, TRANSURANIC_Z, is_magic,
};
use crate::core::formula::enhancement::StabilityEnhancement;
use crate::core::models::decay::DecayMode;
use crate::core::models::nuclide::{Nuclide, NuclideError};

const ANCHOR_STABLE_SCORE: f64 = 0.8;
const ANCHOR_UNSTABLE_SCORE: f64 = 0.3;
const RATIO_TIE_TOLERANCE: f64 = 1e-9;

/// Light nuclides whose stability is known well enough to bypass the heuristic.
static ANCHORED_STABILITIES: [(Nuclide, bool); 8] = [
    (Nuclide::tabulated(1, 0), false),
    (Nuclide::tabulated(1, 1), true),
    (Nuclide::tabulated(1, 2), false),
    (Nuclide::tabulated(2, 1), true),
    (Nuclide::tabulated(2, 2), true),
    (Nuclide::tabulated(6, 6), true),
    (Nuclide::tabulated(6, 8), false),
    (Nuclide::tabulated(8, 8), true),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stability {
    pub nuclide: Nuclide,
    pub score: f64,
    pub decay_mode: DecayMode,
}

impl Stability {
    pub fn is_stable(&self) -> bool {
        self.decay_mode.is_stable()
    }
}

pub fn stable_band_midpoint(z: u32) -> f64 {
    let z = z as f64;
    if z <= 20.0 {
        1.0
    } else if z <= 40.0 {
        1.0 + 0.015 * (z - 20.0)
    } else {
        1.0 + 0.01 * (z - 20.0)
    }
}

fn anchored_stability(nuclide: &Nuclide) -> Option<f64> {
    ANCHORED_STABILITIES
        .iter()
        .find(|(anchor, _)| anchor == nuclide)
        .map(|&(_, stable)| {
            if stable {
                ANCHOR_STABLE_SCORE
            } else {
                ANCHOR_UNSTABLE_SCORE
            }
        })
}

fn magic_bonus(nuclide: &Nuclide) -> f64 {
    match (is_magic(nuclide.z()), is_magic(nuclide.n())) {
        (true, true) => MAGIC_BONUS + DOUBLY_MAGIC_BONUS,
        (true, false) | (false, true) => MAGIC_BONUS,
        (false, false) => 0.0,
    }
}

fn binding_contribution(per_nucleon_mev: f64) -> f64 {
    if per_nucleon_mev > TIGHTLY_BOUND_PER_NUCLEON_MEV {
        TIGHTLY_BOUND_BONUS
    } else if per_nucleon_mev > BOUND_PER_NUCLEON_MEV {
        BOUND_BONUS
    } else if per_nucleon_mev < LOOSELY_BOUND_PER_NUCLEON_MEV {
        -LOOSELY_BOUND_PENALTY
    } else {
        0.0
    }
}

fn heavy_penalty(z: u32) -> f64 {
    let mut penalty = 0.0;
    if z > POST_LEAD_Z {
        penalty += POST_LEAD_PENALTY;
    }
    if z > TRANSURANIC_Z {
        penalty += TRANSURANIC_PENALTY;
    }
    penalty
}

fn raw_score(nuclide: &Nuclide, ratio: f64, config: &EvaluatorConfig) -> f64 {
    let deviation = (ratio - stable_band_midpoint(nuclide.z())).abs();
    let per_nucleon = binding::compute(nuclide, &config.enhancement).per_nucleon();

    let score = STABILITY_BASELINE - RATIO_DEVIATION_PENALTY * deviation
        + magic_bonus(nuclide)
        + binding_contribution(per_nucleon)
        - heavy_penalty(nuclide.z());

    StabilityEnhancement::for_mass_number(nuclide.mass_number(), &config.enhancement)
        .apply(score)
}

fn classify(nuclide: &Nuclide, score: f64, ratio: f64, threshold: f64) -> DecayMode {
    if score > threshold {
        return DecayMode::Stable;
    }
    let midpoint = stable_band_midpoint(nuclide.z());
    if (ratio - midpoint).abs() <= RATIO_TIE_TOLERANCE {
        DecayMode::Unknown
    } else if ratio > midpoint {
        DecayMode::BetaMinus
    } else if nuclide.mass_number() > ALPHA_DECAY_MIN_A {
        DecayMode::Alpha
    } else {
        DecayMode::BetaPlus
    }
}

pub fn compute(nuclide: &Nuclide, config: &EvaluatorConfig) -> Stability {
    let Some(ratio) = nuclide.neutron_proton_ratio() else {
        return Stability {
            nuclide: *nuclide,
            score: 0.0,
            decay_mode: DecayMode::Unknown,
        };
    };

    let score = anchored_stability(nuclide)
        .unwrap_or_else(|| raw_score(nuclide, ratio, config))
        .clamp(0.0, 1.0);

    Stability {
        nuclide: *nuclide,
        score,
        decay_mode: classify(nuclide, score, ratio, config.stability_threshold.value()),
    }
}

pub fn compute_stability(
    z: i64,
    n: i64,
    config: &EvaluatorConfig,
) -> Result<Stability, EvaluationError> {
    match Nuclide::new(z, n) {
        Ok(nuclide) => Ok(compute(&nuclide, config)),
        Err(NuclideError::EmptyNucleus) => Err(EvaluationError::UndefinedStability),
        Err(e) => Err(e.into()),
    }
}
