//! Returns-to-scale classification from production elasticities.

use econ_core::math::numeric::{from_f64, require_non_negative, DEFAULT_TOLERANCE};
use econ_core::types::DomainError;
use num_traits::Float;
use std::fmt;

/// Returns to scale of a Cobb–Douglas technology.
///
/// # Examples
/// ```
/// use econ_models::returns::ReturnsToScale;
///
/// assert_eq!(ReturnsToScale::classify(0.7_f64, 0.7).unwrap().kind, ReturnsToScale::Increasing);
/// assert_eq!(ReturnsToScale::classify(0.5_f64, 0.5).unwrap().kind, ReturnsToScale::Constant);
/// assert_eq!(ReturnsToScale::classify(0.3_f64, 0.3).unwrap().kind, ReturnsToScale::Decreasing);
/// assert!(ReturnsToScale::classify(f64::NAN, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReturnsToScale {
    /// `a + b > 1`
    Increasing,
    /// `a + b = 1` within tolerance
    Constant,
    /// `a + b < 1`
    Decreasing,
}

/// Classification together with the elasticity sum it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnsClassification<T> {
    /// Returns-to-scale kind
    pub kind: ReturnsToScale,
    /// `laborElasticity + capitalElasticity`
    pub elasticity_sum: T,
}

impl ReturnsToScale {
    /// Classify with the default tolerance (`1e-6`).
    pub fn classify<T: Float>(
        labor_elasticity: T,
        capital_elasticity: T,
    ) -> Result<ReturnsClassification<T>, DomainError> {
        Self::classify_with_tolerance(
            labor_elasticity,
            capital_elasticity,
            from_f64(DEFAULT_TOLERANCE),
        )
    }

    /// Classify `s = labor + capital` against `1 ± tolerance`.
    ///
    /// Values exactly at `1 ± tolerance` are `Constant`.
    ///
    /// # Errors
    /// * `DomainError::NonFiniteInput` - an elasticity or the tolerance is
    ///   NaN or infinite
    /// * `DomainError::Negative` - an elasticity or the tolerance is negative
    pub fn classify_with_tolerance<T: Float>(
        labor_elasticity: T,
        capital_elasticity: T,
        tolerance: T,
    ) -> Result<ReturnsClassification<T>, DomainError> {
        let labor = require_non_negative(labor_elasticity, "labor_elasticity")?;
        let capital = require_non_negative(capital_elasticity, "capital_elasticity")?;
        let tolerance = require_non_negative(tolerance, "tolerance")?;
        let sum = labor + capital;
        let kind = if sum > T::one() + tolerance {
            ReturnsToScale::Increasing
        } else if sum < T::one() - tolerance {
            ReturnsToScale::Decreasing
        } else {
            ReturnsToScale::Constant
        };
        Ok(ReturnsClassification {
            kind,
            elasticity_sum: sum,
        })
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ReturnsToScale::Increasing => "Increasing returns to scale (IRS)",
            ReturnsToScale::Constant => "Constant returns to scale (CRS)",
            ReturnsToScale::Decreasing => "Decreasing returns to scale (DRS)",
        }
    }
}

impl fmt::Display for ReturnsToScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
