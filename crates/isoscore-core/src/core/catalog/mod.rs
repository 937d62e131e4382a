//! # Catalogs
//!
//! Static, read-only tables that the workflows join against.
//!
//! - [`medical`] - the six reference isotopes with established clinical use
//! - [`reference`] - accepted binding energies and stability labels used to validate
//!   the heuristics, plus a CSV loader for caller-supplied stability references

pub mod medical;
pub mod reference;
