//! # Models
//!
//! Value types shared by every layer of the evaluator.
//!
//! - [`nuclide`] - the validated (Z, N) pair and its derived quantities
//! - [`decay`] - the decay mode label attached to a stability score

pub mod decay;
pub mod nuclide;
