//! Labour demand from a linear value-of-marginal-product schedule.
//!
//! `VMP(L) = m·L + b` with `m < 0`. A profit-maximising firm hires until
//! `VMP(L) = W`, so employment at wage `W` is `(b − W) / (−m)`.

use econ_core::math::curve::SampledCurve;
use econ_core::math::numeric::{ensure_finite, from_f64, require_finite, to_f64, DEFAULT_EPSILON};
use num_traits::Float;

use crate::error::{ModelError, Result};

/// Linear value-of-marginal-product schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueMarginalProduct<T> {
    /// Slope `m`, strictly negative
    pub slope: T,
    /// Intercept `b`
    pub intercept: T,
}

impl<T: Float> ValueMarginalProduct<T> {
    /// Create a schedule with the default flatness threshold.
    ///
    /// # Errors
    /// * `ModelError::InvalidParameter` - `slope >= -1e-9`
    pub fn new(slope: T, intercept: T) -> Result<Self> {
        Self::with_epsilon(slope, intercept, from_f64(DEFAULT_EPSILON))
    }

    /// Create a schedule, rejecting slopes with `slope >= -epsilon`.
    pub fn with_epsilon(slope: T, intercept: T, epsilon: T) -> Result<Self> {
        let slope = require_finite(slope, "slope")?;
        let intercept = require_finite(intercept, "intercept")?;
        if slope >= -epsilon {
            return Err(ModelError::invalid_parameter(
                "slope",
                format!(
                    "value of marginal product must slope downward, got {}",
                    to_f64(slope)
                ),
            ));
        }
        Ok(Self { slope, intercept })
    }

    /// `VMP(L)`.
    #[inline]
    pub fn value(&self, labor: T) -> T {
        self.slope * labor + self.intercept
    }

    /// Employment at which `VMP(L) = W`.
    ///
    /// The result may be negative or exceed any display range; clipping is
    /// left to the caller.
    ///
    /// # Examples
    /// ```
    /// use econ_models::labor_demand::ValueMarginalProduct;
    ///
    /// let vmp = ValueMarginalProduct::new(-0.6_f64, 18.0).unwrap();
    /// assert!((vmp.employment_at_wage(12.0).unwrap() - 10.0).abs() < 1e-12);
    /// ```
    pub fn employment_at_wage(&self, wage: T) -> Result<T> {
        let w = require_finite(wage, "wage")?;
        Ok(ensure_finite((self.intercept - w) / (-self.slope), "employment")?)
    }

    /// Sample the schedule over `grid`.
    pub fn curve(&self, grid: &[T]) -> Result<SampledCurve<T>> {
        SampledCurve::from_fn(grid, |l| Ok::<_, ModelError>(self.value(l)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_employment_levels() {
        let vmp1 = ValueMarginalProduct::new(-0.6_f64, 18.0).unwrap();
        let vmp2 = ValueMarginalProduct::new(-0.6_f64, 16.0).unwrap();
        assert_relative_eq!(vmp1.employment_at_wage(12.0).unwrap(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(
            vmp2.employment_at_wage(8.0).unwrap(),
            40.0 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_employment_falls_with_wage() {
        let vmp = ValueMarginalProduct::new(-0.6_f64, 18.0).unwrap();
        assert!(vmp.employment_at_wage(8.0).unwrap() > vmp.employment_at_wage(12.0).unwrap());
    }

    #[test]
    fn test_vmp_at_employment_equals_wage() {
        let vmp = ValueMarginalProduct::new(-1.3_f64, 25.0).unwrap();
        let e = vmp.employment_at_wage(7.5).unwrap();
        assert_relative_eq!(vmp.value(e), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_or_rising_slope_rejected() {
        for slope in [0.0_f64, 1e-12, 0.5] {
            let err = ValueMarginalProduct::new(slope, 18.0).unwrap_err();
            assert_eq!(err.parameter(), Some("slope"));
        }
    }

    #[test]
    fn test_curve_is_linear() {
        let vmp = ValueMarginalProduct::new(-0.5_f64, 10.0).unwrap();
        let curve = vmp.curve(&[0.0, 10.0, 20.0]).unwrap();
        assert_eq!(curve.ys(), &[10.0, 5.0, 0.0]);
    }
}
