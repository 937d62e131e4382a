use crate::core::elements::element_symbol;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NuclideError {
    #[error("Nucleon counts must be non-negative (Z={z}, N={n})")]
    NegativeCount { z: i64, n: i64 },

    #[error("Nucleon counts are too large to represent (Z={z}, N={n})")]
    OutOfRange { z: i64, n: i64 },

    #[error("Mass number A = Z + N must be at least 1")]
    EmptyNucleus,
}

/// An isotope identified by its proton count `z` and neutron count `n`.
///
/// Construction guarantees `A = z + n >= 1` and that `A` fits in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nuclide {
    z: u32,
    n: u32,
}

impl Nuclide {
    pub fn new(z: i64, n: i64) -> Result<Self, NuclideError> {
        if z < 0 || n < 0 {
            return Err(NuclideError::NegativeCount { z, n });
        }
        let (Ok(zu), Ok(nu)) = (u32::try_from(z), u32::try_from(n)) else {
            return Err(NuclideError::OutOfRange { z, n });
        };
        if zu.checked_add(nu).is_none() {
            return Err(NuclideError::OutOfRange { z, n });
        }
        if zu == 0 && nu == 0 {
            return Err(NuclideError::EmptyNucleus);
        }
        Ok(Self { z: zu, n: nu })
    }

    /// Constructor for compile-time tables; an empty nucleus fails const evaluation.
    pub const fn tabulated(z: u32, n: u32) -> Self {
        assert!(z > 0 || n > 0, "tabulated nuclide must have at least one nucleon");
        Self { z, n }
    }

    #[inline]
    pub fn z(&self) -> u32 {
        self.z
    }

    #[inline]
    pub fn n(&self) -> u32 {
        self.n
    }

    #[inline]
    pub fn mass_number(&self) -> u32 {
        self.z + self.n
    }

    pub fn symbol(&self) -> Option<&'static str> {
        element_symbol(self.z)
    }

    /// `"Fe-56"` style label; proton counts beyond the symbol table render as `"Z119-300"`.
    pub fn label(&self) -> String {
        match self.symbol() {
            Some(symbol) => format!("{}-{}", symbol, self.mass_number()),
            None => format!("Z{}-{}", self.z, self.mass_number()),
        }
    }

    /// N/Z, undefined for a nucleus without protons.
    pub fn neutron_proton_ratio(&self) -> Option<f64> {
        (self.z > 0).then(|| self.n as f64 / self.z as f64)
    }

    pub fn is_even_even(&self) -> bool {
        self.z % 2 == 0 && self.n % 2 == 0
    }

    pub fn is_odd_odd(&self) -> bool {
        self.z % 2 == 1 && self.n % 2 == 1
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
