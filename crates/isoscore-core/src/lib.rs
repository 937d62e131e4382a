//! # Isoscore Core Library
//!
//! A heuristic evaluator for nuclear binding energy and stability, with a filter that
//! screens isotopes for medical use.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that each concern can be tested in
//! isolation.
//!
//! - **[`core`]: The Foundation.** Stateless data: physical constants and coefficient tables,
//!   the element symbol table, the [`Nuclide`](core::models::nuclide::Nuclide) model, the
//!   pure semi-empirical mass formula terms, the enhancement layer, and the static catalogs.
//!
//! - **[`engine`]: The Logic Core.** The two scoring computations (binding energy and
//!   stability), the immutable evaluator configuration, the error type, and progress
//!   reporting for batch scans.
//!
//! - **[`workflows`]: The Public API.** [`IsotopeEvaluator`](workflows::evaluator::IsotopeEvaluator)
//!   exposes the three pure operations (`binding_energy`, `stability`, `medical_candidates`),
//!   while the batch workflows run the medical scan and the validation against reference data.

pub mod core;
pub mod engine;
pub mod workflows;
