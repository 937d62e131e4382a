use crate::core::models::nuclide::NuclideError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Domain error: {source}")]
    Domain {
        #[from]
        source: NuclideError,
    },

    #[error("Stability is undefined for the empty nucleus (Z=0, N=0)")]
    UndefinedStability,

    #[error("Scan limit Z={z_max} lies outside 1..={max}")]
    ScanRange { z_max: u32, max: u32 },
}
