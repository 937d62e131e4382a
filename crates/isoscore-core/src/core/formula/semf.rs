use super::terms::SemfTerms;
use crate::core::constants::{A_ASYMMETRY, A_COULOMB, A_PAIRING, A_SURFACE, A_VOLUME};
use crate::core::models::nuclide::Nuclide;

#[inline]
pub fn volume_term(a: f64) -> f64 {
    A_VOLUME * a
}

#[inline]
pub fn surface_term(a: f64) -> f64 {
    -A_SURFACE * a.powf(2.0 / 3.0)
}

#[inline]
pub fn coulomb_term(z: f64, a: f64) -> f64 {
    -A_COULOMB * z * (z - 1.0) / a.cbrt()
}

#[inline]
pub fn asymmetry_term(z: f64, n: f64, a: f64) -> f64 {
    -A_ASYMMETRY * (n - z).powi(2) / a
}

/// Even-even nuclei gain `a_p / sqrt(A)`, odd-odd nuclei lose it, mixed parity is zero.
#[inline]
pub fn pairing_term(nuclide: &Nuclide) -> f64 {
    let magnitude = A_PAIRING / (nuclide.mass_number() as f64).sqrt();
    if nuclide.is_even_even() {
        magnitude
    } else if nuclide.is_odd_odd() {
        -magnitude
    } else {
        0.0
    }
}

pub fn semf_terms(nuclide: &Nuclide) -> SemfTerms {
    let z = nuclide.z() as f64;
    let n = nuclide.n() as f64;
    let a = nuclide.mass_number() as f64;
    SemfTerms::new(
        volume_term(a),
        surface_term(a),
        coulomb_term(z, a),
        asymmetry_term(z, n, a),
        pairing_term(nuclide),
    )
}
