//! Production calculator page.

use econ_core::math::numeric::require_non_negative;

use crate::config::ModelConfig;
use crate::error::{DegenerateInput, Result, Warnings};
use crate::production::{
    average_product, linear_marginal_product, produce_linear, MarginalProduct,
    ProductionParameters,
};
use crate::returns::{ReturnsClassification, ReturnsToScale};

const PAGE: &str = "production_calculator";

/// Technology and inputs for the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "technology", rename_all = "snake_case"))]
pub enum ProductionCalculatorParams {
    /// `Q = K + L`
    Linear {
        /// Capital `K >= 0`
        capital: f64,
        /// Labour `L >= 0`
        labor: f64,
    },
    /// `Q = A·K^a·L^b`
    CobbDouglas(ProductionParameters<f64>),
}

impl Default for ProductionCalculatorParams {
    fn default() -> Self {
        Self::CobbDouglas(ProductionParameters {
            total_factor_productivity: 1.0,
            capital: 10.0,
            labor: 5.0,
            capital_elasticity: 0.5,
            labor_elasticity: 0.5,
        })
    }
}

/// Calculator metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductionCalculatorOutput {
    /// Output `Q`
    pub output: f64,
    /// Marginal product of labour
    pub marginal_product_labor: MarginalProduct<f64>,
    /// Marginal product of capital
    pub marginal_product_capital: MarginalProduct<f64>,
    /// Average product of labour
    pub average_product_labor: f64,
    /// Average product of capital
    pub average_product_capital: f64,
    /// Returns to scale; `None` for the linear technology
    pub returns: Option<ReturnsClassification<f64>>,
    /// Degenerate-input warnings
    pub warnings: Vec<DegenerateInput>,
}

impl ProductionCalculatorParams {
    /// Evaluate the calculator.
    ///
    /// # Examples
    /// ```
    /// use econ_models::config::ModelConfig;
    /// use econ_models::dashboard::ProductionCalculatorParams;
    ///
    /// let out = ProductionCalculatorParams::Linear { capital: 10.0, labor: 5.0 }
    ///     .evaluate(&ModelConfig::default())
    ///     .unwrap();
    /// assert_eq!(out.output, 15.0);
    /// assert_eq!(out.average_product_labor, 3.0);
    /// ```
    pub fn evaluate(&self, config: &ModelConfig) -> Result<ProductionCalculatorOutput> {
        let _span = tracing::debug_span!("page", page = PAGE).entered();
        let mut warnings = Warnings::new(PAGE);

        let output = match *self {
            ProductionCalculatorParams::Linear { capital, labor } => {
                let capital = require_non_negative(capital, "capital")?;
                let labor = require_non_negative(labor, "labor")?;
                let output = produce_linear(capital, labor)?;
                ProductionCalculatorOutput {
                    output,
                    marginal_product_labor: linear_marginal_product(),
                    marginal_product_capital: linear_marginal_product(),
                    average_product_labor: average_product(output, labor)?,
                    average_product_capital: average_product(output, capital)?,
                    returns: None,
                    warnings: Vec::new(),
                }
            }
            ProductionCalculatorParams::CobbDouglas(params) => {
                let point = params.evaluate()?;
                for (input, value) in [("labor", params.labor), ("capital", params.capital)] {
                    if value == 0.0 {
                        warnings.push(DegenerateInput::Undefined {
                            quantity: format!("average product of {}", input),
                            reason: format!("{} is zero; reported as 0", input),
                        });
                    }
                }
                ProductionCalculatorOutput {
                    output: point.output,
                    marginal_product_labor: MarginalProduct::Value(point.marginal_product_labor),
                    marginal_product_capital: MarginalProduct::Value(
                        point.marginal_product_capital,
                    ),
                    average_product_labor: point.average_product_labor,
                    average_product_capital: point.average_product_capital,
                    returns: Some(ReturnsToScale::classify_with_tolerance(
                        params.labor_elasticity,
                        params.capital_elasticity,
                        config.returns_tolerance,
                    )?),
                    warnings: Vec::new(),
                }
            }
        };

        tracing::debug!(output = output.output, "production evaluated");
        Ok(ProductionCalculatorOutput {
            warnings: warnings.into_vec(),
            ..output
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_cobb_douglas() {
        let out = ProductionCalculatorParams::default()
            .evaluate(&ModelConfig::default())
            .unwrap();
        let q = 50.0_f64.sqrt();
        assert_relative_eq!(out.output, q, epsilon = 1e-12);
        assert_relative_eq!(out.average_product_labor, q / 5.0, epsilon = 1e-12);
        assert_relative_eq!(
            out.marginal_product_labor.value(),
            0.5 * 10.0_f64.sqrt() / 5.0_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(out.returns.unwrap().kind, ReturnsToScale::Constant);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_linear_flags_unit_marginal_product() {
        let out = ProductionCalculatorParams::Linear {
            capital: 10.0,
            labor: 0.0,
        }
        .evaluate(&ModelConfig::default())
        .unwrap();
        assert_eq!(out.output, 10.0);
        assert!(out.marginal_product_labor.is_unit());
        assert_eq!(out.average_product_labor, 0.0);
        assert_eq!(out.average_product_capital, 1.0);
        assert!(out.returns.is_none());
    }

    #[test]
    fn test_linear_rejects_negative_input() {
        let err = ProductionCalculatorParams::Linear {
            capital: -1.0,
            labor: 5.0,
        }
        .evaluate(&ModelConfig::default())
        .unwrap_err();
        assert_eq!(err.parameter(), Some("capital"));
    }

    #[test]
    fn test_cobb_douglas_zero_labor_is_domain_error() {
        let params = ProductionCalculatorParams::CobbDouglas(ProductionParameters {
            total_factor_productivity: 1.0,
            capital: 10.0,
            labor: 0.0,
            capital_elasticity: 0.5,
            labor_elasticity: 0.5,
        });
        let err = params.evaluate(&ModelConfig::default()).unwrap_err();
        assert_eq!(err.parameter(), Some("labor"));
    }

    #[test]
    fn test_cobb_douglas_zero_labor_integer_exponent_warns() {
        let params = ProductionCalculatorParams::CobbDouglas(ProductionParameters {
            total_factor_productivity: 1.0,
            capital: 10.0,
            labor: 0.0,
            capital_elasticity: 1.0,
            labor_elasticity: 2.0,
        });
        let out = params.evaluate(&ModelConfig::default()).unwrap();
        assert_eq!(out.output, 0.0);
        assert_eq!(out.average_product_labor, 0.0);
        assert_eq!(out.warnings.len(), 1);
    }
}
