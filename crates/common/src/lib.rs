//! Common utilities used across the excise crates.
//!
//! This crate provides the index-set helpers shared by the removal algorithms,
//! including validation of caller-supplied positions and normalization of
//! arbitrary index collections.

/// Error types for index-set validation
pub mod error;

/// General utility functions and types for common tasks.
pub mod utils;
