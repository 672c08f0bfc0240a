//! Point-wise lower envelope of sampled curves.
//!
//! The long-run average cost curve is the lower envelope of the short-run
//! curves of every available technique: at each quantity the firm picks
//! the cheapest technique. On sampled data this is a point-wise minimum
//! across curves that share one grid.

use super::curve::{CurveExtremum, SampledCurve};
use crate::types::CurveError;
use num_traits::Float;

/// Point-wise minimum of `curves` at every grid index.
///
/// # Invariant
///
/// `envelope.ys()[i] <= curve.ys()[i]` for every input curve and index, with
/// equality for at least one curve at each index.
///
/// # Errors
///
/// * `CurveError::InsufficientData` - `curves` is empty
/// * `CurveError::GridMismatch` - the curves are not sampled on one grid
///
/// # Example
///
/// ```
/// use econ_core::math::curve::SampledCurve;
/// use econ_core::math::envelope::lower_envelope;
///
/// let a = SampledCurve::new(vec![1.0, 2.0, 3.0], vec![5.0, 3.0, 1.0]).unwrap();
/// let b = SampledCurve::new(vec![1.0, 2.0, 3.0], vec![2.0, 3.5, 4.0]).unwrap();
///
/// let envelope = lower_envelope(&[a, b]).unwrap();
/// assert_eq!(envelope.ys(), &[2.0, 3.0, 1.0]);
/// ```
pub fn lower_envelope<T: Float>(curves: &[SampledCurve<T>]) -> Result<SampledCurve<T>, CurveError> {
    let (first, rest) = curves.split_first().ok_or(CurveError::InsufficientData {
        got: 0,
        need: 1,
    })?;

    let mut ys = first.ys().to_vec();
    for curve in rest {
        first.check_same_grid(curve)?;
        for (lowest, &y) in ys.iter_mut().zip(curve.ys()) {
            if y < *lowest {
                *lowest = y;
            }
        }
    }

    SampledCurve::new(first.xs().to_vec(), ys)
}

/// For each grid index, the position in `curves` of the curve attaining
/// the envelope. Ties resolve to the earliest curve.
///
/// # Errors
///
/// Same as [`lower_envelope`].
pub fn envelope_owners<T: Float>(curves: &[SampledCurve<T>]) -> Result<Vec<usize>, CurveError> {
    let (first, rest) = curves.split_first().ok_or(CurveError::InsufficientData {
        got: 0,
        need: 1,
    })?;
    for curve in rest {
        first.check_same_grid(curve)?;
    }

    let owners = (0..first.len())
        .map(|i| {
            let mut owner = 0;
            for (k, curve) in curves.iter().enumerate().skip(1) {
                if curve.ys()[i] < curves[owner].ys()[i] {
                    owner = k;
                }
            }
            owner
        })
        .collect();

    Ok(owners)
}

/// Sampled minimum of every curve, in input order.
///
/// This is the minimum over the supplied grid, not an analytic minimum:
/// for a strictly decreasing curve it is the right edge of the grid.
pub fn sampled_minima<T: Float>(curves: &[SampledCurve<T>]) -> Vec<CurveExtremum<T>> {
    curves.iter().map(SampledCurve::argmin).collect()
}
