//! Evenly spaced evaluation grids.

use super::numeric::{from_f64, to_f64};
use crate::types::CurveError;
use num_traits::Float;

/// Returns `n` evenly spaced values over the closed interval `[start, end]`.
///
/// Both endpoints are included and the last value is exactly `end`. The
/// result is strictly increasing, so it can serve directly as the `x` axis
/// of a [`SampledCurve`](super::curve::SampledCurve).
///
/// # Errors
///
/// * `CurveError::InsufficientData` - `n < 2`
/// * `CurveError::InvalidGrid` - non-finite bounds, `start >= end`, a range
///   whose width overflows, or a range too narrow to hold `n` distinct values
///
/// # Example
///
/// ```
/// use econ_core::math::grid::linspace;
///
/// let grid = linspace(1.0_f64, 3.0, 5).unwrap();
/// assert_eq!(grid, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
/// ```
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Result<Vec<T>, CurveError> {
    if n < 2 {
        return Err(CurveError::InsufficientData { got: n, need: 2 });
    }

    if !start.is_finite() || !end.is_finite() {
        return Err(CurveError::InvalidGrid(format!(
            "bounds must be finite: [{}, {}]",
            to_f64(start),
            to_f64(end)
        )));
    }

    if start >= end {
        return Err(CurveError::InvalidGrid(format!(
            "start {} must be less than end {}",
            to_f64(start),
            to_f64(end)
        )));
    }

    let last = n - 1;
    let span = end - start;
    if !span.is_finite() {
        return Err(CurveError::InvalidGrid(format!(
            "range [{}, {}] overflows",
            to_f64(start),
            to_f64(end)
        )));
    }
    let denominator: T = from_f64(last as f64);

    let mut grid = Vec::with_capacity(n);
    for i in 0..last {
        let step: T = from_f64(i as f64);
        grid.push(start + span * step / denominator);
    }
    grid.push(end);

    if let Some(index) = (1..n).find(|&i| grid[i] <= grid[i - 1]) {
        return Err(CurveError::InvalidGrid(format!(
            "range [{}, {}] too narrow for {} distinct points (collision at index {})",
            to_f64(start),
            to_f64(end),
            n,
            index
        )));
    }

    Ok(grid)
}

/// Grid spacing of an evenly spaced grid, `(end - start) / (n - 1)`.
///
/// Crossing locations found on a [`linspace`] grid are accurate to within
/// this step.
///
/// # Errors
///
/// * `CurveError::InsufficientData` - `n < 2`
pub fn resolution<T: Float>(start: T, end: T, n: usize) -> Result<T, CurveError> {
    if n < 2 {
        return Err(CurveError::InsufficientData { got: n, need: 2 });
    }
    Ok((end - start) / from_f64((n - 1) as f64))
}
