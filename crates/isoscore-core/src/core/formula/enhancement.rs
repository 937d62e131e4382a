use super::params::EnhancementConfig;
use crate::core::constants::{
    BINDING_CONSCIOUSNESS_WEIGHT, GOLDEN_RATIO_WEIGHT, STABILITY_CONSCIOUSNESS_WEIGHT,
    STABILITY_TESLA_WEIGHT, resonance_count,
};

/// `1 + boost * count / 3`, where `count` is the number of {3, 6, 9} dividing A.
#[inline]
pub fn tesla_factor(mass_number: u32, tesla_boost: f64) -> f64 {
    1.0 + tesla_boost * resonance_count(mass_number) as f64 / 3.0
}

/// `1 + (level - 0.5) * weight`; levels below one half damp the value.
#[inline]
pub fn consciousness_factor(level: f64, weight: f64) -> f64 {
    1.0 + (level - 0.5) * weight
}

/// `1 + (phi - 1) * weight`.
#[inline]
pub fn golden_ratio_factor(golden_ratio: f64, weight: f64) -> f64 {
    1.0 + (golden_ratio - 1.0) * weight
}

/// Multiplicative stages applied to a binding energy, in application order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingEnhancement {
    pub tesla: f64,
    pub consciousness: f64,
    pub golden_ratio: f64,
    pub error_correction: f64,
}

impl BindingEnhancement {
    pub fn for_mass_number(mass_number: u32, config: &EnhancementConfig) -> Self {
        Self {
            tesla: tesla_factor(mass_number, config.tesla_boost()),
            consciousness: consciousness_factor(
                config.consciousness_level(),
                BINDING_CONSCIOUSNESS_WEIGHT,
            ),
            golden_ratio: golden_ratio_factor(config.golden_ratio(), GOLDEN_RATIO_WEIGHT),
            error_correction: config.error_correction(),
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let value = value * self.tesla;
        let value = value * self.consciousness;
        let value = value * self.golden_ratio;
        value * self.error_correction
    }
}

/// Nudges applied to a raw stability score before clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityEnhancement {
    pub tesla_nudge: f64,
    pub consciousness: f64,
    pub golden_ratio: f64,
}

impl StabilityEnhancement {
    pub fn for_mass_number(mass_number: u32, config: &EnhancementConfig) -> Self {
        Self {
            tesla_nudge: (tesla_factor(mass_number, config.tesla_boost()) - 1.0)
                * STABILITY_TESLA_WEIGHT,
            consciousness: consciousness_factor(
                config.consciousness_level(),
                STABILITY_CONSCIOUSNESS_WEIGHT,
            ),
            golden_ratio: golden_ratio_factor(config.golden_ratio(), GOLDEN_RATIO_WEIGHT),
        }
    }

    pub fn apply(&self, score: f64) -> f64 {
        let score = score + self.tesla_nudge;
        let score = score * self.consciousness;
        score * self.golden_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn tesla_factor_is_proportional_to_resonance_count() {
        assert!(f64_approx_equal(tesla_factor(4, 0.15), 1.0));
        assert!(f64_approx_equal(tesla_factor(3, 0.15), 1.05));
        assert!(f64_approx_equal(tesla_factor(12, 0.15), 1.10));
        assert!(f64_approx_equal(tesla_factor(18, 0.15), 1.15));
    }

    #[test]
    fn tesla_factor_with_zero_boost_is_identity() {
        assert!(f64_approx_equal(tesla_factor(18, 0.0), 1.0));
    }

    #[test]
    fn consciousness_factor_is_neutral_at_one_half() {
        assert!(f64_approx_equal(consciousness_factor(0.5, 0.05), 1.0));
        assert!(consciousness_factor(0.82, 0.05) > 1.0);
        assert!(consciousness_factor(0.2, 0.05) < 1.0);
    }

    #[test]
    fn golden_ratio_factor_is_a_small_boost() {
        let factor = golden_ratio_factor(crate::core::constants::GOLDEN_RATIO, 0.01);
        assert!(factor > 1.006 && factor < 1.007);
    }

    #[test]
    fn neutral_binding_enhancement_is_identity() {
        let enhancement = BindingEnhancement::for_mass_number(18, &EnhancementConfig::neutral());
        assert!(f64_approx_equal(enhancement.apply(123.4), 123.4));
    }

    #[test]
    fn binding_enhancement_grows_with_resonance_count() {
        let config = EnhancementConfig::default();
        let base = 100.0;
        let none = BindingEnhancement::for_mass_number(4, &config).apply(base);
        let one = BindingEnhancement::for_mass_number(3, &config).apply(base);
        let two = BindingEnhancement::for_mass_number(6, &config).apply(base);
        let three = BindingEnhancement::for_mass_number(18, &config).apply(base);
        assert!(none < one && one < two && two < three);
        assert!(f64_approx_equal(two - one, one - none));
        assert!(f64_approx_equal(three - two, one - none));
    }

    #[test]
    fn binding_enhancement_is_a_small_perturbation() {
        let enhancement = BindingEnhancement::for_mass_number(18, &EnhancementConfig::default());
        let ratio = enhancement.apply(1.0);
        assert!(ratio > 1.0 && ratio < 1.2);
    }

    #[test]
    fn neutral_stability_enhancement_is_identity() {
        let enhancement =
            StabilityEnhancement::for_mass_number(90, &EnhancementConfig::neutral());
        assert!(f64_approx_equal(enhancement.apply(0.42), 0.42));
    }

    #[test]
    fn stability_tesla_nudge_is_additive() {
        let config = EnhancementConfig::default();
        let resonant = StabilityEnhancement::for_mass_number(18, &config);
        let plain = StabilityEnhancement::for_mass_number(4, &config);
        assert!(f64_approx_equal(plain.tesla_nudge, 0.0));
        assert!(f64_approx_equal(resonant.tesla_nudge, 0.015));
    }
}
