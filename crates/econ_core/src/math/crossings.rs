//! Piecewise-linear crossing detection.
//!
//! Locates where a sampled curve crosses a constant level (break-even
//! quantity where average cost meets price) or where two curves sampled on
//! the same grid intersect.
//!
//! ## Algorithm
//!
//! With `d[i] = y[i] - target` (or `ya[i] - yb[i]`), every adjacent pair
//! whose signs multiply to a negative number brackets a crossing, located
//! by linear interpolation:
//!
//! ```text
//! x_root = x[i] - d[i] * (x[i+1] - x[i]) / (d[i+1] - d[i])
//! ```
//!
//! ## Limitations
//!
//! This is a piecewise-linear approximation, not a function-level root
//! solver: accuracy is bounded by the grid step. A sample landing exactly
//! on the target has sign zero, fails the product test and is not
//! reported; neither is a tangency that does not change sign.

use super::curve::SampledCurve;
use crate::types::CurveError;
use num_traits::Float;

/// Direction in which the difference changes sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossingDirection {
    /// Difference goes from negative to positive (curve rises through target).
    Upward,
    /// Difference goes from positive to negative (curve falls through target).
    Downward,
}

/// A located crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossing<T> {
    /// Interpolated x-coordinate of the crossing
    pub x: T,
    /// Index `i` of the bracketing segment `[x[i], x[i+1]]`
    pub segment: usize,
    /// Sign change direction
    pub direction: CrossingDirection,
}

#[inline]
fn sign<T: Float>(value: T) -> i8 {
    if value > T::zero() {
        1
    } else if value < T::zero() {
        -1
    } else {
        0
    }
}

/// Locate sign changes of `diffs` over the grid `xs`.
///
/// `xs` and `diffs` must have equal length; extra trailing elements of the
/// longer slice are ignored.
pub fn locate_sign_changes<T: Float>(xs: &[T], diffs: &[T]) -> Vec<Crossing<T>> {
    let n = xs.len().min(diffs.len());
    let mut crossings = Vec::new();

    for i in 0..n.saturating_sub(1) {
        let (d0, d1) = (diffs[i], diffs[i + 1]);
        if sign(d0) * sign(d1) >= 0 {
            continue;
        }

        let (x0, x1) = (xs[i], xs[i + 1]);
        let x = x0 - d0 * (x1 - x0) / (d1 - d0);
        let direction = if d0 < T::zero() {
            CrossingDirection::Upward
        } else {
            CrossingDirection::Downward
        };

        crossings.push(Crossing {
            x,
            segment: i,
            direction,
        });
    }

    crossings
}

/// Crossings of `curve` with the horizontal line `y = target`, with
/// direction information.
pub fn crossings_with_level<T: Float>(curve: &SampledCurve<T>, target: T) -> Vec<Crossing<T>> {
    let diffs: Vec<T> = curve.ys().iter().map(|&y| y - target).collect();
    locate_sign_changes(curve.xs(), &diffs)
}

/// Roots of `curve(x) = target`, in increasing x order.
///
/// Returns an empty vector when the curve never crosses the level,
/// including when it is flat at exactly `target`.
///
/// # Example
///
/// ```
/// use econ_core::math::crossings::find_crossings;
/// use econ_core::math::curve::SampledCurve;
///
/// let curve = SampledCurve::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 0.0]).unwrap();
/// assert_eq!(find_crossings(&curve, 1.0), vec![0.5, 1.5]);
/// assert!(find_crossings(&curve, 3.0).is_empty());
/// ```
pub fn find_crossings<T: Float>(curve: &SampledCurve<T>, target: T) -> Vec<T> {
    crossings_with_level(curve, target)
        .into_iter()
        .map(|c| c.x)
        .collect()
}

/// Crossings of two curves sampled on the same grid, with direction
/// information relative to `a - b`.
///
/// # Errors
///
/// * `CurveError::GridMismatch` - the curves do not share a grid
pub fn crossings_between<T: Float>(
    a: &SampledCurve<T>,
    b: &SampledCurve<T>,
) -> Result<Vec<Crossing<T>>, CurveError> {
    a.check_same_grid(b)?;
    let diffs: Vec<T> = a
        .ys()
        .iter()
        .zip(b.ys())
        .map(|(&ya, &yb)| ya - yb)
        .collect();
    Ok(locate_sign_changes(a.xs(), &diffs))
}

/// Intersection points of two curves sampled on the same grid.
///
/// # Errors
///
/// * `CurveError::GridMismatch` - the curves do not share a grid
///
/// # Example
///
/// ```
/// use econ_core::math::crossings::find_curve_crossings;
/// use econ_core::math::curve::SampledCurve;
///
/// let rising = SampledCurve::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();
/// let falling = SampledCurve::new(vec![0.0, 1.0, 2.0], vec![1.5, 1.0, 0.5]).unwrap();
/// // Intersection lands exactly on a grid point: product test is zero
/// assert!(find_curve_crossings(&rising, &falling).unwrap().is_empty());
/// ```
pub fn find_curve_crossings<T: Float>(
    a: &SampledCurve<T>,
    b: &SampledCurve<T>,
) -> Result<Vec<T>, CurveError> {
    Ok(crossings_between(a, b)?.into_iter().map(|c| c.x).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::grid::{linspace, resolution};
    use approx::assert_relative_eq;

    fn curve_from<F: Fn(f64) -> f64>(grid: &[f64], f: F) -> SampledCurve<f64> {
        SampledCurve::from_fn(grid, |x| Ok::<_, CurveError>(f(x))).unwrap()
    }

    #[test]
    fn test_break_even_average_cost() {
        // CM(L) = 100/L + 9 meets P = 12 at L = 100/3
        let grid = linspace(1.0, 50.0, 300).unwrap();
        let cost = curve_from(&grid, |l| 100.0 / l + 9.0);

        let roots = find_crossings(&cost, 12.0);
        assert_eq!(roots.len(), 1);

        let step = resolution(1.0, 50.0, 300).unwrap();
        assert!((roots[0] - 100.0 / 3.0).abs() < step);
    }

    #[test]
    fn test_exact_linear_crossing() {
        let grid = linspace(0.0, 10.0, 11).unwrap();
        let line = curve_from(&grid, |x| 2.0 * x - 5.5);
        let crossings = crossings_with_level(&line, 0.0);

        assert_eq!(crossings.len(), 1);
        assert_relative_eq!(crossings[0].x, 2.75, epsilon = 1e-12);
        assert_eq!(crossings[0].segment, 2);
        assert_eq!(crossings[0].direction, CrossingDirection::Upward);
    }

    #[test]
    fn test_multiple_crossings_in_order() {
        let grid = linspace(0.0, 4.0 * std::f64::consts::PI, 401).unwrap();
        let wave = curve_from(&grid, |x| (x + 0.1).sin());
        let crossings = crossings_with_level(&wave, 0.0);

        assert_eq!(crossings.len(), 4);
        for pair in crossings.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        assert_eq!(crossings[0].direction, CrossingDirection::Downward);
        assert_eq!(crossings[1].direction, CrossingDirection::Upward);
    }

    #[test]
    fn test_no_crossing_returns_empty() {
        let grid = linspace(1.0, 50.0, 100).unwrap();
        let cost = curve_from(&grid, |l| 100.0 / l + 9.0);
        assert!(find_crossings(&cost, 5.0).is_empty());
    }

    #[test]
    fn test_flat_curve_at_target_returns_empty() {
        let grid = linspace(0.0, 1.0, 5).unwrap();
        let flat = curve_from(&grid, |_| 12.0);
        assert!(find_crossings(&flat, 12.0).is_empty());
    }

    #[test]
    fn test_exact_grid_hit_is_not_reported() {
        let xs = vec![0.0, 1.0, 2.0];
        let curve = SampledCurve::new(xs, vec![-1.0, 0.0, 1.0]).unwrap();
        assert!(find_crossings(&curve, 0.0).is_empty());
    }

    #[test]
    fn test_curve_crossings() {
        let grid = linspace(1.0, 10.0, 91).unwrap();
        let a = curve_from(&grid, |x| x);
        let b = curve_from(&grid, |x| 12.05 - x);

        let roots = find_curve_crossings(&a, &b).unwrap();
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 6.025, epsilon = 1e-9);
    }

    #[test]
    fn test_curve_crossings_grid_mismatch() {
        let a = curve_from(&linspace(0.0, 1.0, 3).unwrap(), |x| x);
        let b = curve_from(&linspace(0.0, 1.0, 4).unwrap(), |x| x);
        assert!(matches!(
            find_curve_crossings(&a, &b),
            Err(CurveError::GridMismatch(_))
        ));
    }

    #[test]
    fn test_locate_sign_changes_tolerates_uneven_lengths() {
        let crossings = locate_sign_changes(&[0.0, 1.0, 2.0], &[-1.0, 1.0]);
        assert_eq!(crossings.len(), 1);
        assert!(locate_sign_changes::<f64>(&[], &[]).is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(300))]

            #[test]
            fn test_roots_lie_inside_their_bracket(
                ys in prop::collection::vec(-100.0..100.0_f64, 2..100),
                target in -50.0..50.0_f64
            ) {
                let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64).collect();
                let curve = SampledCurve::new(xs.clone(), ys).unwrap();

                for crossing in crossings_with_level(&curve, target) {
                    let i = crossing.segment;
                    prop_assert!(crossing.x >= xs[i] && crossing.x <= xs[i + 1]);
                }
            }

            #[test]
            fn test_single_crossing_of_monotone_line(
                slope in 0.1..10.0_f64,
                root in 1.5..48.5_f64
            ) {
                let grid = linspace(1.0, 50.0, 200).unwrap();
                let line = curve_from(&grid, |x| slope * (x - root));
                let roots = find_crossings(&line, 0.0);
                prop_assert!(roots.len() <= 1);
                if let Some(&r) = roots.first() {
                    prop_assert!((r - root).abs() < 1e-6);
                }
            }
        }
    }
}
