//! # Formula Module
//!
//! Pure mathematical pieces of the evaluator. Nothing here knows about regimes,
//! anchors or thresholds; the [`engine`](crate::engine) composes these pieces into the
//! binding-energy and stability pipelines.
//!
//! - [`semf`] - the five terms of the semi-empirical (Bethe-Weizsäcker) mass formula
//! - [`terms`] - the per-term breakdown returned alongside a binding energy
//! - [`enhancement`] - Tesla resonance, consciousness and golden-ratio adjustments
//! - [`params`] - the tunable [`EnhancementConfig`](params::EnhancementConfig) and its
//!   TOML loader

pub mod enhancement;
pub mod params;
pub mod semf;
pub mod terms;
