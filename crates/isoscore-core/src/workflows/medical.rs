use crate::core::catalog::medical::{MEDICAL_ISOTOPES, MedicalIsotopeRecord, find_medical_isotope};
use crate::core::constants::{
    HALF_LIFE_DIVISOR, HALF_LIFE_EXPONENT, HALF_LIFE_FALLBACK_HOURS, MEDICAL_SCAN_NEUTRONS_ABOVE,
    MEDICAL_SCAN_NEUTRONS_BELOW, MEDICAL_TARGET_SCORE,
};
use crate::core::elements::MAX_TABULATED_Z;
use crate::core::models::decay::DecayMode;
use crate::core::models::nuclide::Nuclide;
use crate::engine::binding;
use crate::engine::config::EvaluatorConfig;
use crate::engine::error::EvaluationError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::stability;
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct MedicalCandidate {
    pub nuclide: Nuclide,
    pub label: String,
    pub score: f64,
    pub decay_mode: DecayMode,
    pub binding_energy_mev: f64,
    pub half_life_hours: f64,
    /// Set when the nuclide is in the medical catalog.
    pub medical_use: Option<&'static str>,
}

impl MedicalCandidate {
    pub fn is_catalogued(&self) -> bool {
        self.medical_use.is_some()
    }
}

/// A (Z, N) pair the scan could not evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedPair {
    pub z: i64,
    pub n: i64,
    pub error: EvaluationError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicalScan {
    pub candidates: Vec<MedicalCandidate>,
    pub skipped: Vec<SkippedPair>,
}

impl MedicalScan {
    /// Catalog entries that surfaced as candidates.
    pub fn recovered(&self) -> Vec<&'static MedicalIsotopeRecord> {
        MEDICAL_ISOTOPES
            .iter()
            .filter(|record| self.contains(&record.nuclide))
            .collect()
    }

    /// Catalog entries the scan did not surface.
    pub fn missed(&self) -> Vec<&'static MedicalIsotopeRecord> {
        MEDICAL_ISOTOPES
            .iter()
            .filter(|record| !self.contains(&record.nuclide))
            .collect()
    }

    fn contains(&self, nuclide: &Nuclide) -> bool {
        self.candidates.iter().any(|c| c.nuclide == *nuclide)
    }
}

type Outcome = Result<MedicalCandidate, SkippedPair>;

/// Rough half-life in hours derived from the stability score.
pub fn estimate_half_life_hours(score: f64) -> f64 {
    if score > 0.0 {
        (HALF_LIFE_EXPONENT * score).exp() / HALF_LIFE_DIVISOR
    } else {
        HALF_LIFE_FALLBACK_HOURS
    }
}

/// Neutron counts scanned for one element: max(0, Z - 10)..=Z + 19.
pub fn scan_row(z: i64) -> impl Iterator<Item = (i64, i64)> {
    let below = i64::from(MEDICAL_SCAN_NEUTRONS_BELOW);
    let above = i64::from(MEDICAL_SCAN_NEUTRONS_ABOVE);
    ((z - below).max(0)..=z + above).map(move |n| (z, n))
}

/// The scan neighbourhood for Z in 1..=z_max, generated row by row.
pub fn scan_pairs(z_max: u32) -> impl Iterator<Item = (i64, i64)> {
    (1..=i64::from(z_max)).flat_map(scan_row)
}

#[instrument(skip_all, name = "medical_scan_workflow", fields(z_max = z_max))]
pub fn run(
    z_max: u32,
    config: &EvaluatorConfig,
    reporter: &ProgressReporter,
) -> Result<MedicalScan, EvaluationError> {
    if !(1..=MAX_TABULATED_Z).contains(&z_max) {
        return Err(EvaluationError::ScanRange {
            z_max,
            max: MAX_TABULATED_Z,
        });
    }
    start_scan(scan_pairs(z_max).count(), reporter);

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<Outcome> = scan_pairs(z_max)
        .filter_map(|(z, n)| evaluate_reported(z, n, config, reporter))
        .collect();

    #[cfg(feature = "parallel")]
    let outcomes: Vec<Outcome> = (1..=i64::from(z_max))
        .into_par_iter()
        .flat_map_iter(scan_row)
        .filter_map(|(z, n)| evaluate_reported(z, n, config, reporter))
        .collect();

    Ok(finish_scan(outcomes, reporter))
}

/// Evaluates each pair independently. A failing pair is recorded in
/// [`MedicalScan::skipped`] and never aborts the scan.
pub fn run_pairs(
    pairs: &[(i64, i64)],
    config: &EvaluatorConfig,
    reporter: &ProgressReporter,
) -> MedicalScan {
    start_scan(pairs.len(), reporter);

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.par_iter();

    let outcomes: Vec<Outcome> = iterator
        .filter_map(|&(z, n)| evaluate_reported(z, n, config, reporter))
        .collect();

    finish_scan(outcomes, reporter)
}

fn start_scan(total_pairs: usize, reporter: &ProgressReporter) {
    info!(pairs = total_pairs, "Starting medical candidate scan.");
    reporter.report(Progress::ScanStart {
        name: "Medical scan",
        total_pairs: total_pairs as u64,
    });
}

fn evaluate_reported(
    z: i64,
    n: i64,
    config: &EvaluatorConfig,
    reporter: &ProgressReporter,
) -> Option<Outcome> {
    let outcome = evaluate_pair(z, n, config);
    match &outcome {
        Ok(Some(candidate)) => reporter.report(Progress::Match {
            nuclide: candidate.nuclide,
            score: candidate.score,
        }),
        Ok(None) => {}
        Err(skipped) => reporter.report(Progress::PairSkipped {
            z,
            n,
            reason: skipped.error.to_string(),
        }),
    }
    reporter.report(Progress::PairEvaluated);
    outcome.transpose()
}

fn finish_scan(outcomes: Vec<Outcome>, reporter: &ProgressReporter) -> MedicalScan {
    let mut scan = MedicalScan::default();
    for outcome in outcomes {
        match outcome {
            Ok(candidate) => scan.candidates.push(candidate),
            Err(skipped) => {
                debug!(z = skipped.z, n = skipped.n, error = %skipped.error, "Skipping pair.");
                scan.skipped.push(skipped);
            }
        }
    }
    scan.candidates.sort_by(rank_candidates);

    info!(
        candidates = scan.candidates.len(),
        skipped = scan.skipped.len(),
        catalogued = scan.candidates.iter().filter(|c| c.is_catalogued()).count(),
        "Medical candidate scan finished."
    );
    reporter.report(Progress::ScanFinish {
        matches: scan.candidates.len(),
    });
    scan
}

fn evaluate_pair(
    z: i64,
    n: i64,
    config: &EvaluatorConfig,
) -> Result<Option<MedicalCandidate>, SkippedPair> {
    let assessment =
        stability::compute_stability(z, n, config).map_err(|error| SkippedPair { z, n, error })?;
    if !config.medical_window.contains(assessment.score) {
        return Ok(None);
    }

    let nuclide = assessment.nuclide;
    let energy = binding::compute(&nuclide, &config.enhancement);
    Ok(Some(MedicalCandidate {
        nuclide,
        label: nuclide.label(),
        score: assessment.score,
        decay_mode: assessment.decay_mode,
        binding_energy_mev: energy.value_mev,
        half_life_hours: estimate_half_life_hours(assessment.score),
        medical_use: find_medical_isotope(&nuclide).map(|record| record.medical_use),
    }))
}

fn rank_candidates(a: &MedicalCandidate, b: &MedicalCandidate) -> Ordering {
    b.is_catalogued()
        .cmp(&a.is_catalogued())
        .then_with(|| {
            let da = (a.score - MEDICAL_TARGET_SCORE).abs();
            let db = (b.score - MEDICAL_TARGET_SCORE).abs();
            da.total_cmp(&db)
        })
        .then_with(|| a.nuclide.cmp(&b.nuclide))
}
