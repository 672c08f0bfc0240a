//! Isoquants of a Cobb–Douglas technology.
//!
//! For a fixed output level `Q`, solving `Q = A·K^a·L^b` for labour gives
//! `L(K) = (Q / (A·K^a))^(1/b)`.

use econ_core::math::curve::SampledCurve;
use econ_core::math::grid::linspace;
use econ_core::math::numeric::{checked_powf, ensure_finite, from_f64, require_positive};
use econ_core::types::DomainError;
use num_traits::Float;

use crate::error::{ModelError, Result};
use crate::production::CobbDouglas;

/// Labour needed to produce `level` with `capital`.
///
/// # Errors
/// * `DomainError::NonPositive` - `A`, `b`, `capital` or `level` is not
///   strictly positive
/// * `DomainError::NonFinite` - the result overflows
///
/// # Examples
/// ```
/// use econ_models::isoquant::isoquant_labor;
/// use econ_models::production::CobbDouglas;
///
/// let tech = CobbDouglas::new(1.0_f64, 0.5, 0.5).unwrap();
/// let l = isoquant_labor(&tech, 4.0, 6.0).unwrap();
/// assert!((l - 9.0).abs() < 1e-10);
/// ```
pub fn isoquant_labor<T: Float>(
    technology: &CobbDouglas<T>,
    capital: T,
    level: T,
) -> std::result::Result<T, DomainError> {
    let a = require_positive(
        technology.total_factor_productivity,
        "total_factor_productivity",
    )?;
    let beta = require_positive(technology.labor_elasticity, "labor_elasticity")?;
    let k = require_positive(capital, "capital")?;
    let q = require_positive(level, "output_level")?;

    let k_term = checked_powf(k, technology.capital_elasticity, "capital")?;
    let ratio = ensure_finite(q / (a * k_term), "isoquant ratio")?;
    ensure_finite(ratio.powf(T::one() / beta), "isoquant labor")
}

/// One isoquant sampled over a capital grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Isoquant<T: Float> {
    /// Output level `Q`
    pub level: T,
    /// `(K, L(K))` samples
    pub curve: SampledCurve<T>,
}

/// Sample the isoquant for `level` over `capital_grid`.
pub fn isoquant_curve<T: Float>(
    technology: &CobbDouglas<T>,
    capital_grid: &[T],
    level: T,
) -> Result<Isoquant<T>> {
    let curve = SampledCurve::from_fn(capital_grid, |k| {
        isoquant_labor(technology, k, level).map_err(ModelError::from)
    })?;
    Ok(Isoquant { level, curve })
}

/// `n` output levels evenly spaced on `[0.4·Q, 2·Q]`.
///
/// # Errors
/// * `CurveError::InvalidGrid` - `output <= 0`
/// * `CurveError::InsufficientData` - `n < 2`
pub fn isoquant_levels<T: Float>(output: T, n: usize) -> Result<Vec<T>> {
    Ok(linspace(output * from_f64(0.4), output * from_f64(2.0), n)?)
}

/// Isoquant family for every level in `levels`.
pub fn isoquant_family<T: Float>(
    technology: &CobbDouglas<T>,
    capital_grid: &[T],
    levels: &[T],
) -> Result<Vec<Isoquant<T>>> {
    levels
        .iter()
        .map(|&level| isoquant_curve(technology, capital_grid, level))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_isoquant_reproduces_level() {
        let tech = CobbDouglas::new(1.5_f64, 0.3, 0.6).unwrap();
        let grid = linspace(1.0, 30.0, 50).unwrap();
        let iso = isoquant_curve(&tech, &grid, 12.0).unwrap();
        for (k, l) in iso.curve.points() {
            assert_relative_eq!(tech.output(k, l).unwrap(), 12.0, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_isoquant_is_downward_sloping() {
        let tech = CobbDouglas::new(1.0_f64, 0.5, 0.5).unwrap();
        let grid = linspace(1.0, 30.0, 50).unwrap();
        let iso = isoquant_curve(&tech, &grid, 7.0).unwrap();
        assert!(iso.curve.ys().windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_isoquant_requires_labor_elasticity() {
        let tech = CobbDouglas::new(1.0_f64, 0.5, 0.0).unwrap();
        let err = isoquant_labor(&tech, 1.0, 1.0).unwrap_err();
        assert_eq!(err.parameter(), Some("labor_elasticity"));
    }

    #[test]
    fn test_isoquant_requires_positive_level() {
        let tech = CobbDouglas::new(1.0_f64, 0.5, 0.5).unwrap();
        assert!(isoquant_labor(&tech, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_isoquant_levels() {
        let levels = isoquant_levels(10.0_f64, 6).unwrap();
        assert_eq!(levels.len(), 6);
        assert_relative_eq!(levels[0], 4.0, epsilon = 1e-12);
        assert_relative_eq!(levels[5], 20.0, epsilon = 1e-12);
        assert!(isoquant_levels(0.0_f64, 6).is_err());
    }

    #[test]
    fn test_isoquant_family_ordering() {
        let tech = CobbDouglas::new(1.0_f64, 0.5, 0.5).unwrap();
        let grid = linspace(1.0, 30.0, 50).unwrap();
        let levels = isoquant_levels(7.0, 6).unwrap();
        let family = isoquant_family(&tech, &grid, &levels).unwrap();
        assert_eq!(family.len(), 6);
        // Higher output requires more labour at every capital level
        for pair in family.windows(2) {
            for (lo, hi) in pair[0].curve.ys().iter().zip(pair[1].curve.ys()) {
                assert!(hi > lo);
            }
        }
    }
}
