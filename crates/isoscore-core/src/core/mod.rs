//! # Core Module
//!
//! Stateless building blocks of the evaluator.
//!
//! - **Coefficients** ([`constants`]) - mass-formula coefficients, magic numbers, resonance
//!   divisors and the calibration constants of both scoring heuristics
//! - **Elements** ([`elements`]) - element symbol lookup indexed by proton count
//! - **Models** ([`models`]) - the validated nuclide value type and the decay mode label
//! - **Formula** ([`formula`]) - semi-empirical mass formula terms, the enhancement layer
//!   and its tunable parameters
//! - **Catalogs** ([`catalog`]) - the medical isotope table and the reference data used
//!   for validation

pub mod catalog;
pub mod constants;
pub mod elements;
pub mod formula;
pub mod models;
