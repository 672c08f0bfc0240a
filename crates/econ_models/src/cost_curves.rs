//! Illustrative short-run average cost shapes.
//!
//! The shapes used to draw textbook cost diagrams: a hyperbolic average
//! fixed cost, a variable cost that is flat up to a capacity limit and
//! rises beyond it, and U-shaped quadratic averages.

use econ_core::math::curve::SampledCurve;
use econ_core::math::numeric::{
    checked_powf, ensure_finite, from_f64, require_finite, require_non_negative, require_positive,
};
use econ_core::types::DomainError;
use num_traits::Float;

use crate::error::{ModelError, Result};

/// Average cost as a function of output `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "snake_case"))]
pub enum AverageCostShape<T> {
    /// `CF / y`, defined for `y > 0`
    FixedAverage {
        /// Fixed cost `CF`
        fixed_cost: T,
    },
    /// `base` below capacity, `base + 0.5·(y − capacity)^exponent` from it on
    CapacityConstrained {
        /// Flat average variable cost below capacity
        base: T,
        /// Output at which costs start rising
        capacity: T,
        /// Power of the rising segment
        exponent: T,
    },
    /// `floor + curvature·(y − center)^2`
    Quadratic {
        /// Minimum value, attained at `center`
        floor: T,
        /// Quadratic coefficient
        curvature: T,
        /// Output at the bottom of the U
        center: T,
    },
}

impl<T: Float> AverageCostShape<T> {
    /// Average cost at output `y`.
    ///
    /// # Errors
    /// * `DomainError::NonPositive` - `y <= 0` for `FixedAverage`
    /// * `DomainError::NonFinite` - the value overflows
    ///
    /// # Examples
    /// ```
    /// use econ_models::cost_curves::AverageCostShape;
    ///
    /// let avc = AverageCostShape::CapacityConstrained { base: 20.0_f64, capacity: 40.0, exponent: 2.0 };
    /// assert_eq!(avc.value(10.0).unwrap(), 20.0);
    /// assert_eq!(avc.value(44.0).unwrap(), 28.0);
    /// ```
    pub fn value(&self, output: T) -> std::result::Result<T, DomainError> {
        let y = require_finite(output, "output")?;
        let value = match *self {
            AverageCostShape::FixedAverage { fixed_cost } => {
                let y = require_positive(y, "output")?;
                fixed_cost / y
            }
            AverageCostShape::CapacityConstrained {
                base,
                capacity,
                exponent,
            } => {
                if y < capacity {
                    base
                } else {
                    let gap = y - capacity;
                    if gap == T::zero() {
                        base
                    } else {
                        base + from_f64::<T>(0.5) * checked_powf(gap, exponent, "capacity gap")?
                    }
                }
            }
            AverageCostShape::Quadratic {
                floor,
                curvature,
                center,
            } => {
                let d = y - center;
                floor + curvature * d * d
            }
        };
        ensure_finite(value, "average cost")
    }

    /// Validate shape parameters.
    ///
    /// Fixed cost, capacity and curvature must be non-negative; the
    /// capacity exponent must be positive.
    pub fn validate(&self) -> std::result::Result<(), DomainError> {
        match *self {
            AverageCostShape::FixedAverage { fixed_cost } => {
                require_non_negative(fixed_cost, "fixed_cost")?;
            }
            AverageCostShape::CapacityConstrained {
                base,
                capacity,
                exponent,
            } => {
                require_finite(base, "base")?;
                require_non_negative(capacity, "capacity")?;
                require_positive(exponent, "exponent")?;
            }
            AverageCostShape::Quadratic {
                floor,
                curvature,
                center,
            } => {
                require_finite(floor, "floor")?;
                require_non_negative(curvature, "curvature")?;
                require_finite(center, "center")?;
            }
        }
        Ok(())
    }

    /// Sample the shape over `grid`.
    pub fn curve(&self, grid: &[T]) -> Result<SampledCurve<T>> {
        self.validate()?;
        SampledCurve::from_fn(grid, |y| self.value(y).map_err(ModelError::from))
    }
}
