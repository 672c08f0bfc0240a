//! # econ_core: Numeric Foundation for Microeconomic Models
//!
//! ## Layer 1 (Foundation) Role
//!
//! econ_core is the bottom layer of the model library, providing:
//! - Numeric-safety helpers: checked powers, floored division (`math::numeric`)
//! - Evenly spaced grids (`math::grid`)
//! - Sampled curves with validated invariants (`math::curve`)
//! - Point-wise lower envelopes and sampled extrema (`math::envelope`)
//! - Piecewise-linear crossing detection (`math::crossings`)
//! - Error types: `DomainError`, `CurveError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other econ_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use econ_core::math::crossings::find_crossings;
//! use econ_core::math::curve::SampledCurve;
//! use econ_core::math::grid::linspace;
//!
//! // Average cost 100/L + 9 against a price of 12
//! let grid = linspace(1.0_f64, 50.0, 491).unwrap();
//! let cost = SampledCurve::from_fn(&grid, |l| Ok::<_, econ_core::types::CurveError>(100.0 / l + 9.0)).unwrap();
//!
//! let roots = find_crossings(&cost, 12.0);
//! assert_eq!(roots.len(), 1);
//! assert!((roots[0] - 100.0 / 3.0).abs() < 0.1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SampledCurve`, extrema and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
