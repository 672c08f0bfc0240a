//! Cost, revenue and profit.
//!
//! - `CT = w·L`
//! - `CM = CT / max(Q, ε)`
//! - `IT = P·Q`
//! - `profit = IT − CT`
//! - `CMg = w / max(PMgL, ε)`
//!
//! `ε` is a numeric-safety floor that keeps averages finite at zero output;
//! it is not a modelling assumption. The default is
//! [`DEFAULT_EPSILON`](econ_core::math::numeric::DEFAULT_EPSILON) and can be
//! tuned through [`ModelConfig`](crate::config::ModelConfig).

use econ_core::math::numeric::{
    ensure_finite, floored_divide, from_f64, require_finite, require_non_negative,
    require_positive, DEFAULT_EPSILON,
};
use econ_core::types::DomainError;
use num_traits::Float;

/// Total cost `CT = w·L`.
///
/// # Errors
/// * `DomainError::Negative` - `wage` or `labor` is negative
pub fn total_cost<T: Float>(wage: T, labor: T) -> Result<T, DomainError> {
    let w = require_non_negative(wage, "wage")?;
    let l = require_non_negative(labor, "labor")?;
    ensure_finite(w * l, "total cost")
}

/// Average cost `CT / max(Q, ε)` with the default floor.
///
/// # Examples
/// ```
/// use econ_models::cost::average_cost;
///
/// assert_eq!(average_cost(100.0_f64, 4.0).unwrap(), 25.0);
/// assert!(average_cost(100.0_f64, 0.0).unwrap().is_finite());
/// assert!(average_cost(1e300_f64, 0.0).is_err());
/// ```
#[inline]
pub fn average_cost<T: Float>(total_cost: T, output: T) -> Result<T, DomainError> {
    average_cost_with_floor(total_cost, output, from_f64(DEFAULT_EPSILON))
}

/// Average cost `CT / max(Q, epsilon)`.
///
/// # Errors
/// * `DomainError::NonFiniteInput` - an input is NaN or infinite
/// * `DomainError::NonPositive` - `epsilon <= 0`
/// * `DomainError::NonFinite` - the quotient overflows
pub fn average_cost_with_floor<T: Float>(
    total_cost: T,
    output: T,
    epsilon: T,
) -> Result<T, DomainError> {
    let ct = require_finite(total_cost, "total_cost")?;
    let q = require_finite(output, "output")?;
    let eps = require_positive(epsilon, "epsilon")?;
    ensure_finite(floored_divide(ct, q, eps), "average cost")
}

/// Total revenue `IT = P·Q`.
///
/// # Errors
/// * `DomainError::Negative` - `price` is negative
/// * `DomainError::NonFiniteInput` - `output` is NaN or infinite
pub fn total_revenue<T: Float>(price: T, output: T) -> Result<T, DomainError> {
    let p = require_non_negative(price, "price")?;
    let q = require_finite(output, "output")?;
    ensure_finite(p * q, "total revenue")
}

/// Profit `IT − CT`.
///
/// # Errors
/// * `DomainError::NonFiniteInput` - an input is NaN or infinite
/// * `DomainError::NonFinite` - the difference overflows
pub fn profit<T: Float>(total_revenue: T, total_cost: T) -> Result<T, DomainError> {
    let it = require_finite(total_revenue, "total_revenue")?;
    let ct = require_finite(total_cost, "total_cost")?;
    ensure_finite(it - ct, "profit")
}

/// Marginal cost `w / max(PMgL, ε)` with the default floor.
#[inline]
pub fn marginal_cost<T: Float>(wage: T, marginal_product_labor: T) -> Result<T, DomainError> {
    marginal_cost_with_floor(wage, marginal_product_labor, from_f64(DEFAULT_EPSILON))
}

/// Marginal cost `w / max(PMgL, epsilon)`.
///
/// # Errors
/// * `DomainError::NonFiniteInput` - an input is NaN or infinite
/// * `DomainError::NonPositive` - `epsilon <= 0`
/// * `DomainError::NonFinite` - the quotient overflows
pub fn marginal_cost_with_floor<T: Float>(
    wage: T,
    marginal_product_labor: T,
    epsilon: T,
) -> Result<T, DomainError> {
    let w = require_finite(wage, "wage")?;
    let mp = require_finite(marginal_product_labor, "marginal_product_labor")?;
    let eps = require_positive(epsilon, "epsilon")?;
    ensure_finite(floored_divide(w, mp, eps), "marginal cost")
}

/// Input prices paired with a production point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostParameters<T> {
    /// Wage per labour unit `w >= 0`
    pub wage: T,
    /// Output price `P >= 0`
    pub price: T,
}

/// Cost, revenue and profit at one production point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostPoint<T> {
    /// Total cost `CT`
    pub total_cost: T,
    /// Average cost `CM`
    pub average_cost: T,
    /// Total revenue `IT`
    pub total_revenue: T,
    /// Profit `IT − CT`
    pub profit: T,
}

impl<T: Float> CostParameters<T> {
    /// Create validated cost parameters.
    pub fn new(wage: T, price: T) -> Result<Self, DomainError> {
        Ok(Self {
            wage: require_non_negative(wage, "wage")?,
            price: require_non_negative(price, "price")?,
        })
    }

    /// Evaluate cost metrics for `labor` units producing `output`.
    ///
    /// # Examples
    /// ```
    /// use econ_models::cost::CostParameters;
    ///
    /// let prices = CostParameters::new(100.0_f64, 50.0).unwrap();
    /// let point = prices.evaluate(4.0, 10.0, 1e-9).unwrap();
    /// assert_eq!(point.total_cost, 400.0);
    /// assert_eq!(point.average_cost, 40.0);
    /// assert_eq!(point.profit, 100.0);
    /// ```
    pub fn evaluate(&self, labor: T, output: T, epsilon: T) -> Result<CostPoint<T>, DomainError> {
        let total_cost = total_cost(self.wage, labor)?;
        let total_revenue = total_revenue(self.price, output)?;
        Ok(CostPoint {
            total_cost,
            average_cost: average_cost_with_floor(total_cost, output, epsilon)?,
            total_revenue,
            profit: profit(total_revenue, total_cost)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_total_cost() {
        assert_eq!(total_cost(100.0_f64, 5.0).unwrap(), 500.0);
        assert_eq!(total_cost(0.0_f64, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_total_cost_rejects_negative_wage() {
        let err = total_cost(-5.0_f64, 1.0).unwrap_err();
        assert_eq!(err.parameter(), Some("wage"));
        assert_eq!(
            err.to_string(),
            "Parameter `wage` = -5 must be non-negative"
        );
    }

    #[test]
    fn test_average_cost_floor() {
        assert_eq!(average_cost(10.0_f64, 2.0).unwrap(), 5.0);
        assert_relative_eq!(average_cost(10.0_f64, 0.0).unwrap(), 1e10, max_relative = 1e-12);
        assert_relative_eq!(
            average_cost_with_floor(10.0_f64, 0.0, 1e-3).unwrap(),
            1e4,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_average_cost_zero_cost_zero_output() {
        assert_eq!(average_cost(0.0_f64, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_revenue_and_profit() {
        let it = total_revenue(50.0_f64, 10.0).unwrap();
        assert_eq!(it, 500.0);
        assert_eq!(profit(it, 400.0).unwrap(), 100.0);
        assert!(total_revenue(-1.0_f64, 10.0).is_err());
        assert!(total_revenue(1.0_f64, f64::INFINITY).is_err());
    }

    #[test]
    fn test_marginal_cost() {
        assert_eq!(marginal_cost(100.0_f64, 4.0).unwrap(), 25.0);
        assert!(marginal_cost(100.0_f64, 0.0).unwrap().is_finite());
        // Negative marginal product is floored as well
        assert_relative_eq!(marginal_cost(1.0_f64, -2.0).unwrap(), 1e9, max_relative = 1e-12);
    }

    #[test]
    fn test_overflow_is_domain_error() {
        assert!(matches!(
            average_cost(1e300_f64, 0.0),
            Err(DomainError::NonFinite { .. })
        ));
        assert!(matches!(
            marginal_cost(f64::MAX, 0.5),
            Err(DomainError::NonFinite { .. })
        ));
        assert!(matches!(
            profit(-f64::MAX, f64::MAX),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_nan_input_is_not_floored() {
        // max(NaN, ε) = ε would turn NaN output into a finite average
        let err = average_cost(100.0_f64, f64::NAN).unwrap_err();
        assert_eq!(err.parameter(), Some("output"));

        let err = marginal_cost(100.0_f64, f64::NAN).unwrap_err();
        assert_eq!(err.parameter(), Some("marginal_product_labor"));

        assert_eq!(
            profit(f64::INFINITY, 1.0).unwrap_err().parameter(),
            Some("total_revenue")
        );
    }

    #[test]
    fn test_non_positive_floor_rejected() {
        let err = average_cost_with_floor(1.0_f64, 0.0, 0.0).unwrap_err();
        assert_eq!(err.parameter(), Some("epsilon"));
    }

    #[test]
    fn test_cost_parameters_validation() {
        assert!(CostParameters::new(-1.0_f64, 1.0).is_err());
        assert_eq!(
            CostParameters::new(1.0_f64, -1.0).unwrap_err().parameter(),
            Some("price")
        );
    }
}
