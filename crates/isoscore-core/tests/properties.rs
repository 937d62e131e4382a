//! Property-based tests for the evaluator using proptest.
//!
//! Covers: determinism, domain rejection, stability score bounds under any valid
//! enhancement parameters, and the Tesla resonance stage.

use isoscore::core::constants::resonance_count;
use isoscore::core::formula::params::EnhancementConfig;
use isoscore::engine::config::EvaluatorConfigBuilder;
use isoscore::engine::error::EvaluationError;
use isoscore::workflows::evaluator::IsotopeEvaluator;
use proptest::prelude::*;

fn evaluator_with(tesla: f64, consciousness: f64, correction: f64) -> IsotopeEvaluator {
    let enhancement = EnhancementConfig::new(tesla, consciousness, correction).unwrap();
    IsotopeEvaluator::new(
        EvaluatorConfigBuilder::new()
            .enhancement(enhancement)
            .build()
            .unwrap(),
    )
}

// ── Determinism ──────────────────────────────────────────────────────

proptest! {
    /// Repeated evaluations are bit-identical.
    #[test]
    fn evaluations_are_deterministic(z in 0i64..150, n in 1i64..250) {
        let evaluator = IsotopeEvaluator::default();

        let first = evaluator.binding_energy(z, n).unwrap();
        let second = evaluator.binding_energy(z, n).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());

        let (score_a, mode_a) = evaluator.stability(z, n).unwrap();
        let (score_b, mode_b) = evaluator.stability(z, n).unwrap();
        prop_assert_eq!(score_a.to_bits(), score_b.to_bits());
        prop_assert_eq!(mode_a, mode_b);
    }

    /// Binding energies are finite for every valid nuclide.
    #[test]
    fn binding_energy_is_finite(z in 0i64..300, n in 0i64..400) {
        prop_assume!(z + n > 0);
        let value = IsotopeEvaluator::default().binding_energy(z, n).unwrap();
        prop_assert!(value.is_finite());
    }
}

// ── Domain Rejection ─────────────────────────────────────────────────

proptest! {
    /// Any negative nucleon count is a domain error for both evaluations.
    #[test]
    fn negative_counts_are_rejected(z in -500i64..500, n in -500i64..500) {
        prop_assume!(z < 0 || n < 0);
        let evaluator = IsotopeEvaluator::default();
        let binding_is_domain_error =
            matches!(evaluator.binding_energy(z, n), Err(EvaluationError::Domain { .. }));
        let stability_is_domain_error =
            matches!(evaluator.stability(z, n), Err(EvaluationError::Domain { .. }));
        prop_assert!(binding_is_domain_error);
        prop_assert!(stability_is_domain_error);
    }
}

// ── Score Bounds ─────────────────────────────────────────────────────

proptest! {
    /// The stability score stays in [0, 1] for any valid parameter set.
    #[test]
    fn stability_score_is_bounded(
        z in 0i64..200,
        n in 1i64..300,
        tesla in 0.0f64..=1.0,
        consciousness in 0.0f64..=1.0,
        correction in 0.0f64..=1.0,
    ) {
        let evaluator = evaluator_with(tesla, consciousness, correction);
        let (score, _) = evaluator.stability(z, n).unwrap();
        prop_assert!((0.0..=1.0).contains(&score));
    }
}

// ── Tesla Resonance ──────────────────────────────────────────────────

proptest! {
    /// The resonance stage scales the energy by 1 + boost * count / 3 and nothing else.
    #[test]
    fn tesla_stage_is_proportional_to_resonance_count(
        z in 3i64..110,
        extra in 0i64..40,
        boost in 0.0f64..=1.0,
    ) {
        let n = z + extra;
        let plain = evaluator_with(0.0, 0.82, 0.965).binding_energy(z, n).unwrap();
        let boosted = evaluator_with(boost, 0.82, 0.965).binding_energy(z, n).unwrap();

        let count = resonance_count((z + n) as u32) as f64;
        let expected = 1.0 + boost * count / 3.0;
        prop_assert!((boosted / plain - expected).abs() < 1e-9);
    }
}
