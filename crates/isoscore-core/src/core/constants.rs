use phf::{Set, phf_set};

// Semi-empirical mass formula coefficients (MeV).
pub const A_VOLUME: f64 = 15.8;
pub const A_SURFACE: f64 = 18.3;
pub const A_COULOMB: f64 = 0.714;
pub const A_ASYMMETRY: f64 = 23.2;
pub const A_PAIRING: f64 = 12.0;

pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

pub const TESLA_DIVISORS: [u32; 3] = [3, 6, 9];

static MAGIC_NUMBERS: Set<u32> = phf_set! { 2u32, 8u32, 20u32, 28u32, 50u32, 82u32, 126u32 };

// Light-nucleus correction: m(A) = intercept + slope * A for A <= 20.
// Calibrated against the C-12 and O-16 regression anchors under the default enhancement.
pub const LIGHT_NUCLEUS_MAX_A: u32 = 20;
pub const LIGHT_NUCLEUS_INTERCEPT: f64 = 1.051_470_55;
pub const LIGHT_NUCLEUS_SLOPE: f64 = -0.003_864_16;

// (1 + HEAVY_LOG_SCALE * ln A) for A > 20.
pub const HEAVY_LOG_SCALE: f64 = 0.15;

pub const BINDING_CONSCIOUSNESS_WEIGHT: f64 = 0.05;
pub const GOLDEN_RATIO_WEIGHT: f64 = 0.01;
pub const STABILITY_CONSCIOUSNESS_WEIGHT: f64 = 0.125;
pub const STABILITY_TESLA_WEIGHT: f64 = 0.1;

pub const STABILITY_BASELINE: f64 = 0.5;
pub const RATIO_DEVIATION_PENALTY: f64 = 0.3;
pub const MAGIC_BONUS: f64 = 0.25;
pub const DOUBLY_MAGIC_BONUS: f64 = 0.25;

pub const TIGHTLY_BOUND_PER_NUCLEON_MEV: f64 = 8.5;
pub const TIGHTLY_BOUND_BONUS: f64 = 0.15;
pub const BOUND_PER_NUCLEON_MEV: f64 = 7.5;
pub const BOUND_BONUS: f64 = 0.1;
pub const LOOSELY_BOUND_PER_NUCLEON_MEV: f64 = 6.0;
pub const LOOSELY_BOUND_PENALTY: f64 = 0.2;

pub const POST_LEAD_Z: u32 = 82;
pub const POST_LEAD_PENALTY: f64 = 0.3;
pub const TRANSURANIC_Z: u32 = 92;
pub const TRANSURANIC_PENALTY: f64 = 0.5;

pub const ALPHA_DECAY_MIN_A: u32 = 150;

pub const DEFAULT_STABILITY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MEDICAL_WINDOW: (f64, f64) = (0.2, 0.7);
pub const MEDICAL_TARGET_SCORE: f64 = 0.4;

// N in [Z - below, Z + above] around each scanned element.
pub const MEDICAL_SCAN_NEUTRONS_BELOW: u32 = 10;
pub const MEDICAL_SCAN_NEUTRONS_ABOVE: u32 = 19;

// Half-life estimate in hours: exp(exponent * score) / divisor, or the fallback for score <= 0.
pub const HALF_LIFE_EXPONENT: f64 = 10.0;
pub const HALF_LIFE_DIVISOR: f64 = 100.0;
pub const HALF_LIFE_FALLBACK_HOURS: f64 = 0.1;

#[inline]
pub fn is_magic(count: u32) -> bool {
    MAGIC_NUMBERS.contains(&count)
}

#[inline]
pub fn resonance_count(mass_number: u32) -> u32 {
    TESLA_DIVISORS
        .iter()
        .filter(|&&d| mass_number % d == 0)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_magic_recognizes_all_shell_closures() {
        for m in [2, 8, 20, 28, 50, 82, 126] {
            assert!(is_magic(m), "{m} should be magic");
        }
    }

    #[test]
    fn is_magic_rejects_neighbours_of_shell_closures() {
        for m in [0, 1, 3, 7, 9, 21, 27, 51, 83, 125, 127, 184] {
            assert!(!is_magic(m), "{m} should not be magic");
        }
    }

    #[test]
    fn resonance_count_counts_matching_divisors() {
        assert_eq!(resonance_count(4), 0);
        assert_eq!(resonance_count(3), 1);
        assert_eq!(resonance_count(6), 2);
        assert_eq!(resonance_count(9), 2);
        assert_eq!(resonance_count(12), 2);
        assert_eq!(resonance_count(18), 3);
        assert_eq!(resonance_count(90), 3);
    }

    #[test]
    fn golden_ratio_satisfies_its_defining_identity() {
        assert!((GOLDEN_RATIO * GOLDEN_RATIO - GOLDEN_RATIO - 1.0).abs() < 1e-12);
    }
}
