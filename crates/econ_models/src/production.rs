//! Production functions and marginal/average products.
//!
//! ## Formulas
//!
//! - Linear: `Q = K + L`
//! - Cobb–Douglas: `Q = A·K^a·L^b`
//! - Exponential in labour: `Q = x·e^(β·L)·K`
//! - `PMgL = A·b·K^a·L^(b-1)`, `PMgK = A·a·K^(a-1)·L^b`
//! - `PMe = Q / input`, defined as `0` for a zero input
//!
//! Elasticities are free parameters (they need not sum to one), so a single
//! Cobb–Douglas family covers increasing, constant and decreasing returns
//! to scale.
//!
//! ## Domain
//!
//! Capital and labour must be non-negative. Fractional powers of a zero
//! input are rejected with a [`DomainError`] naming the input; callers must
//! keep inputs strictly positive when elasticities are non-integer.

use econ_core::math::numeric::{
    checked_powf, divide_or_zero, ensure_finite, require_finite, require_non_negative,
};
use econ_core::types::DomainError;
use num_traits::Float;

use crate::returns::{ReturnsClassification, ReturnsToScale};

/// Marginal product of an input.
///
/// The linear technology has a constant, unit marginal product for each
/// input; it is flagged as `Unit` so callers can present it as a special
/// case rather than a computed value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MarginalProduct<T> {
    /// Constant unit marginal product (linear technology).
    Unit,
    /// Computed marginal product.
    Value(T),
}

impl<T: Float> MarginalProduct<T> {
    /// Numeric value; `Unit` is one.
    #[inline]
    pub fn value(&self) -> T {
        match self {
            MarginalProduct::Unit => T::one(),
            MarginalProduct::Value(v) => *v,
        }
    }

    /// True for the linear special case.
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, MarginalProduct::Unit)
    }
}

/// Linear production `Q = K + L`.
///
/// # Errors
/// * `DomainError::NonFiniteInput` - either input is NaN or infinite
/// * `DomainError::NonFinite` - the sum overflows
///
/// # Examples
/// ```
/// use econ_models::production::produce_linear;
///
/// assert_eq!(produce_linear(10.0_f64, 5.0).unwrap(), 15.0);
/// ```
pub fn produce_linear<T: Float>(capital: T, labor: T) -> Result<T, DomainError> {
    let capital = require_finite(capital, "capital")?;
    let labor = require_finite(labor, "labor")?;
    ensure_finite(capital + labor, "output")
}

/// Marginal product of either input under linear production.
#[inline]
pub fn linear_marginal_product<T: Float>() -> MarginalProduct<T> {
    MarginalProduct::Unit
}

/// Cobb–Douglas production `Q = A·K^a·L^b`.
///
/// # Errors
/// * `DomainError::Negative` - `A`, `K`, `L`, `a` or `b` is negative
/// * `DomainError::FractionalPowerOfNonPositive` - `K == 0` with
///   non-integer `a`, or `L == 0` with non-integer `b`
/// * `DomainError::NonFinite` - the result overflows
///
/// # Examples
/// ```
/// use econ_models::production::produce_cobb_douglas;
///
/// let q = produce_cobb_douglas(1.0_f64, 4.0, 9.0, 0.5, 0.5).unwrap();
/// assert!((q - 6.0).abs() < 1e-12);
///
/// assert!(produce_cobb_douglas(1.0_f64, 0.0, 9.0, 0.5, 0.5).is_err());
/// ```
pub fn produce_cobb_douglas<T: Float>(
    total_factor_productivity: T,
    capital: T,
    labor: T,
    capital_elasticity: T,
    labor_elasticity: T,
) -> Result<T, DomainError> {
    let a = require_non_negative(total_factor_productivity, "total_factor_productivity")?;
    let alpha = require_non_negative(capital_elasticity, "capital_elasticity")?;
    let beta = require_non_negative(labor_elasticity, "labor_elasticity")?;
    let capital = require_non_negative(capital, "capital")?;
    let labor = require_non_negative(labor, "labor")?;

    let k = checked_powf(capital, alpha, "capital")?;
    let l = checked_powf(labor, beta, "labor")?;
    ensure_finite(a * k * l, "output")
}

/// Marginal product of labour `A·b·K^a·L^(b-1)`.
///
/// A zero labour elasticity gives a zero marginal product without
/// evaluating `L^(-1)`.
///
/// # Errors
/// Same domain rules as [`produce_cobb_douglas`]; additionally `L == 0`
/// with `0 < b < 1` is rejected because `L^(b-1)` divides by zero.
pub fn marginal_product_labor<T: Float>(
    total_factor_productivity: T,
    capital: T,
    labor: T,
    capital_elasticity: T,
    labor_elasticity: T,
) -> Result<T, DomainError> {
    let a = require_non_negative(total_factor_productivity, "total_factor_productivity")?;
    let alpha = require_non_negative(capital_elasticity, "capital_elasticity")?;
    let beta = require_non_negative(labor_elasticity, "labor_elasticity")?;
    let capital = require_non_negative(capital, "capital")?;
    let labor = require_non_negative(labor, "labor")?;

    if beta == T::zero() {
        return Ok(T::zero());
    }

    let k = checked_powf(capital, alpha, "capital")?;
    let l = checked_powf(labor, beta - T::one(), "labor")?;
    ensure_finite(a * beta * k * l, "marginal product of labor")
}

/// Marginal product of capital `A·a·K^(a-1)·L^b`.
///
/// A zero capital elasticity gives a zero marginal product without
/// evaluating `K^(-1)`.
///
/// # Errors
/// Mirror image of [`marginal_product_labor`].
pub fn marginal_product_capital<T: Float>(
    total_factor_productivity: T,
    capital: T,
    labor: T,
    capital_elasticity: T,
    labor_elasticity: T,
) -> Result<T, DomainError> {
    let a = require_non_negative(total_factor_productivity, "total_factor_productivity")?;
    let alpha = require_non_negative(capital_elasticity, "capital_elasticity")?;
    let beta = require_non_negative(labor_elasticity, "labor_elasticity")?;
    let capital = require_non_negative(capital, "capital")?;
    let labor = require_non_negative(labor, "labor")?;

    if alpha == T::zero() {
        return Ok(T::zero());
    }

    let k = checked_powf(capital, alpha - T::one(), "capital")?;
    let l = checked_powf(labor, beta, "labor")?;
    ensure_finite(a * alpha * k * l, "marginal product of capital")
}

/// Average product `Q / input`, defined as `0` when `input == 0`.
///
/// # Errors
/// * `DomainError::NonFiniteInput` - an input is NaN or infinite
/// * `DomainError::NonFinite` - the quotient overflows
///
/// # Examples
/// ```
/// use econ_models::production::average_product;
///
/// assert_eq!(average_product(10.0_f64, 4.0).unwrap(), 2.5);
/// assert_eq!(average_product(10.0_f64, 0.0).unwrap(), 0.0);
/// ```
pub fn average_product<T: Float>(output: T, input: T) -> Result<T, DomainError> {
    let q = require_finite(output, "output")?;
    let x = require_finite(input, "input")?;
    ensure_finite(divide_or_zero(q, x), "average product")
}

/// Exponential-in-labour production `Q = x·e^(β·L)·K`.
///
/// # Errors
/// * `DomainError::NonFiniteInput` - an input is NaN or infinite
/// * `DomainError::NonFinite` - `e^(β·L)` overflows
///
/// # Examples
/// ```
/// use econ_models::production::produce_exponential;
///
/// let q = produce_exponential(10.0_f64, 0.0, 10.0, 0.15).unwrap();
/// assert_eq!(q, 100.0);
/// ```
pub fn produce_exponential<T: Float>(
    scale: T,
    labor: T,
    capital: T,
    growth_rate: T,
) -> Result<T, DomainError> {
    let x = require_finite(scale, "scale")?;
    let l = require_finite(labor, "labor")?;
    let k = require_finite(capital, "capital")?;
    let beta = require_finite(growth_rate, "growth_rate")?;
    ensure_finite(x * (beta * l).exp() * k, "output")
}

/// Cobb–Douglas technology `A·K^a·L^b` without a production point.
///
/// # Examples
/// ```
/// use econ_models::production::CobbDouglas;
///
/// let tech = CobbDouglas::new(10.0_f64, 0.5, 0.5).unwrap();
/// let q = tech.output(10.0, 10.0).unwrap();
/// assert!((q - 100.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CobbDouglas<T> {
    /// Total factor productivity `A`
    pub total_factor_productivity: T,
    /// Capital elasticity `a`
    pub capital_elasticity: T,
    /// Labour elasticity `b`
    pub labor_elasticity: T,
}

impl<T: Float> CobbDouglas<T> {
    /// Create a technology, validating that all parameters are finite and
    /// non-negative.
    pub fn new(
        total_factor_productivity: T,
        capital_elasticity: T,
        labor_elasticity: T,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            total_factor_productivity: require_non_negative(
                total_factor_productivity,
                "total_factor_productivity",
            )?,
            capital_elasticity: require_non_negative(capital_elasticity, "capital_elasticity")?,
            labor_elasticity: require_non_negative(labor_elasticity, "labor_elasticity")?,
        })
    }

    /// Output at `(K, L)`.
    pub fn output(&self, capital: T, labor: T) -> Result<T, DomainError> {
        produce_cobb_douglas(
            self.total_factor_productivity,
            capital,
            labor,
            self.capital_elasticity,
            self.labor_elasticity,
        )
    }

    /// Marginal product of labour at `(K, L)`.
    pub fn marginal_product_labor(&self, capital: T, labor: T) -> Result<T, DomainError> {
        marginal_product_labor(
            self.total_factor_productivity,
            capital,
            labor,
            self.capital_elasticity,
            self.labor_elasticity,
        )
    }

    /// Marginal product of capital at `(K, L)`.
    pub fn marginal_product_capital(&self, capital: T, labor: T) -> Result<T, DomainError> {
        marginal_product_capital(
            self.total_factor_productivity,
            capital,
            labor,
            self.capital_elasticity,
            self.labor_elasticity,
        )
    }

    /// Sum of elasticities `a + b`.
    #[inline]
    pub fn elasticity_sum(&self) -> T {
        self.capital_elasticity + self.labor_elasticity
    }

    /// Returns-to-scale classification with the default tolerance.
    pub fn returns_to_scale(&self) -> Result<ReturnsClassification<T>, DomainError> {
        ReturnsToScale::classify(self.labor_elasticity, self.capital_elasticity)
    }
}

/// Production technology selector.
///
/// Static dispatch over the two point-evaluable technologies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ProductionTechnology<T> {
    /// `Q = K + L`
    Linear,
    /// `Q = A·K^a·L^b`
    CobbDouglas(CobbDouglas<T>),
}

impl<T: Float> ProductionTechnology<T> {
    /// Output at `(K, L)`.
    pub fn output(&self, capital: T, labor: T) -> Result<T, DomainError> {
        match self {
            ProductionTechnology::Linear => produce_linear(capital, labor),
            ProductionTechnology::CobbDouglas(tech) => tech.output(capital, labor),
        }
    }

    /// Marginal products `(PMgL, PMgK)` at `(K, L)`.
    pub fn marginal_products(
        &self,
        capital: T,
        labor: T,
    ) -> Result<(MarginalProduct<T>, MarginalProduct<T>), DomainError> {
        match self {
            ProductionTechnology::Linear => {
                Ok((linear_marginal_product(), linear_marginal_product()))
            }
            ProductionTechnology::CobbDouglas(tech) => Ok((
                MarginalProduct::Value(tech.marginal_product_labor(capital, labor)?),
                MarginalProduct::Value(tech.marginal_product_capital(capital, labor)?),
            )),
        }
    }
}

/// One parameterisation of a Cobb–Douglas production function at a point.
///
/// The linear technology is the degenerate case `A = 1` with both inputs
/// entering additively; use [`ProductionTechnology::Linear`] for it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionParameters<T> {
    /// Total factor productivity `A >= 0`
    pub total_factor_productivity: T,
    /// Capital input `K`
    pub capital: T,
    /// Labour input `L`
    pub labor: T,
    /// Capital elasticity `a >= 0`
    pub capital_elasticity: T,
    /// Labour elasticity `b >= 0`
    pub labor_elasticity: T,
}

/// Point metrics of a production function.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionPoint<T> {
    /// Output `Q`
    pub output: T,
    /// Marginal product of labour
    pub marginal_product_labor: T,
    /// Marginal product of capital
    pub marginal_product_capital: T,
    /// Average product of labour (`0` at zero labour)
    pub average_product_labor: T,
    /// Average product of capital (`0` at zero capital)
    pub average_product_capital: T,
}

impl<T: Float> ProductionParameters<T> {
    /// The technology without the input point.
    pub fn technology(&self) -> Result<CobbDouglas<T>, DomainError> {
        CobbDouglas::new(
            self.total_factor_productivity,
            self.capital_elasticity,
            self.labor_elasticity,
        )
    }

    /// Output at the parameter point.
    pub fn output(&self) -> Result<T, DomainError> {
        self.technology()?.output(self.capital, self.labor)
    }

    /// Output, marginal and average products at the parameter point.
    ///
    /// # Examples
    /// ```
    /// use econ_models::production::ProductionParameters;
    ///
    /// let params = ProductionParameters {
    ///     total_factor_productivity: 1.0_f64,
    ///     capital: 10.0,
    ///     labor: 10.0,
    ///     capital_elasticity: 0.5,
    ///     labor_elasticity: 0.5,
    /// };
    /// let point = params.evaluate().unwrap();
    /// assert!((point.output - 10.0).abs() < 1e-12);
    /// assert!((point.marginal_product_labor - 0.5).abs() < 1e-12);
    /// ```
    pub fn evaluate(&self) -> Result<ProductionPoint<T>, DomainError> {
        let tech = self.technology()?;
        let output = tech.output(self.capital, self.labor)?;
        Ok(ProductionPoint {
            output,
            marginal_product_labor: tech.marginal_product_labor(self.capital, self.labor)?,
            marginal_product_capital: tech.marginal_product_capital(self.capital, self.labor)?,
            average_product_labor: average_product(output, self.labor)?,
            average_product_capital: average_product(output, self.capital)?,
        })
    }

    /// Returns-to-scale classification of the elasticities.
    pub fn returns_to_scale(&self) -> Result<ReturnsClassification<T>, DomainError> {
        ReturnsToScale::classify(self.labor_elasticity, self.capital_elasticity)
    }
}
