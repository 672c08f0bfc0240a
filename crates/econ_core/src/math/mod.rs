//! Mathematical utilities for model evaluation.
//!
//! This module provides:
//! - `numeric`: Checked powers, floored and guarded division, finiteness checks
//! - `grid`: Evenly spaced, strictly increasing grids
//! - `curve`: `SampledCurve`, an ordered set of `(x, y)` samples
//! - `envelope`: Point-wise lower envelope of curves sharing a grid
//! - `crossings`: Piecewise-linear zero-crossing detection on sampled curves
//!
//! ## Sampled Semantics
//!
//! Everything above the `numeric` helpers works on finite samples: minima
//! are the minimum over the sampled grid points and crossings are linear
//! interpolations between adjacent samples. Accuracy is bounded by grid
//! resolution.

pub mod crossings;
pub mod curve;
pub mod envelope;
pub mod grid;
pub mod numeric;
