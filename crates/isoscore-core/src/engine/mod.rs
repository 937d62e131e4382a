//! # Engine Module
//!
//! The two scoring pipelines and the state they share.
//!
//! - [`binding`] - total binding energy: anchors, SEMF base, regime correction, enhancement
//! - [`stability`] - bounded stability score and decay-mode classification
//! - [`config`] - the immutable [`EvaluatorConfig`](config::EvaluatorConfig) and its builder
//! - [`error`] - per-evaluation error kinds
//! - [`progress`] - progress events emitted by batch workflows

pub mod binding;
pub mod config;
pub mod error;
pub mod progress;
pub mod stability;
