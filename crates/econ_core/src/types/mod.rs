//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for parameter domains and sampled curves
//!
//! # Re-exports
//!
//! [`DomainError`] and [`CurveError`] are re-exported at this module level.

pub mod error;

pub use error::{CurveError, DomainError};
