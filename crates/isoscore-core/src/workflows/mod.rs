//! # Workflows Module
//!
//! The public entry points of the library.
//!
//! - **Evaluator** ([`evaluator`]) - [`IsotopeEvaluator`](evaluator::IsotopeEvaluator), the
//!   single-nuclide binding-energy and stability evaluations plus the batch helpers below.
//! - **Medical scan** ([`medical`]) - sweeps the (Z, N) neighbourhood of the valley of
//!   stability for nuclides inside the medical window and ranks them against the catalog.
//! - **Validation** ([`validation`]) - compares calculated values with accepted binding
//!   energies and stability labels.

pub mod evaluator;
pub mod medical;
pub mod validation;
