//! Core data types and structures
//!
//! Report-facing data, separated from the oracle and the commands that
//! produce it.

pub mod types;

pub use types::*;
