/// Per-term breakdown of the semi-empirical mass formula, in MeV.
///
/// Binding contributions are positive, so the surface, Coulomb and asymmetry terms
/// are normally negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SemfTerms {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    pub pairing: f64,
}

impl SemfTerms {
    pub fn new(volume: f64, surface: f64, coulomb: f64, asymmetry: f64, pairing: f64) -> Self {
        Self {
            volume,
            surface,
            coulomb,
            asymmetry,
            pairing,
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.volume + self.surface + self.coulomb + self.asymmetry + self.pairing
    }
}
