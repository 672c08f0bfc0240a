//! Returns, cost and profit along labour.
//!
//! Production `Q = x·L^l·K^k` with capital fixed, sampled on
//! `L ∈ [1, L_max]`. Derived series: `CT = w·L`, `CM = CT / max(Q, ε)`,
//! `IT = P·Q` and profit. Break-even points are the crossings of `CM`
//! with the price line.

use econ_core::math::curve::{CurveExtremum, SampledCurve};
use econ_core::math::grid::linspace;

use crate::config::ModelConfig;
use crate::cost::{average_cost_with_floor, profit, total_cost, total_revenue};
use crate::dashboard::break_even;
use crate::error::{DegenerateInput, ModelError, Result, Warnings};
use crate::production::produce_cobb_douglas;
use crate::returns::{ReturnsClassification, ReturnsToScale};

const PAGE: &str = "returns_profit";

/// Returns/profit parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReturnsProfitParams {
    /// Total factor productivity `x`
    pub scale: f64,
    /// Fixed capital `K`
    pub capital: f64,
    /// Right edge of the labour axis
    pub labor_max: f64,
    /// Labour elasticity `l`
    pub labor_elasticity: f64,
    /// Capital elasticity `k`
    pub capital_elasticity: f64,
    /// Wage `w`
    pub wage: f64,
    /// Output price `P`
    pub price: f64,
}

impl Default for ReturnsProfitParams {
    fn default() -> Self {
        Self {
            scale: 10.0,
            capital: 10.0,
            labor_max: 50.0,
            labor_elasticity: 0.5,
            capital_elasticity: 0.5,
            wage: 100.0,
            price: 50.0,
        }
    }
}

/// Series sampled along labour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProfitCurves {
    /// `Q(L)`
    pub output: SampledCurve<f64>,
    /// `CT(L)`
    pub total_cost: SampledCurve<f64>,
    /// `CM(L)`
    pub average_cost: SampledCurve<f64>,
    /// `IT(L)`
    pub total_revenue: SampledCurve<f64>,
    /// `IT(L) − CT(L)`
    pub profit: SampledCurve<f64>,
}

/// Returns/profit output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReturnsProfitOutput {
    /// Returns to scale of `(l, k)`
    pub returns: ReturnsClassification<f64>,
    /// Output at the first grid point (`L = 1`)
    pub output_at_min_labor: f64,
    /// Sampled minimum of average cost
    pub min_average_cost: CurveExtremum<f64>,
    /// Sampled maximum of profit
    pub max_profit: CurveExtremum<f64>,
    /// Labour levels where `CM = P`
    pub break_even: Vec<f64>,
    /// Sampled series
    pub curves: ProfitCurves,
    /// Degenerate-input warnings
    pub warnings: Vec<DegenerateInput>,
}

impl ReturnsProfitParams {
    /// Sample every series over `grid`.
    pub fn curves(&self, grid: &[f64], epsilon: f64) -> Result<ProfitCurves> {
        let output = SampledCurve::from_fn(grid, |l| {
            produce_cobb_douglas(
                self.scale,
                self.capital,
                l,
                self.capital_elasticity,
                self.labor_elasticity,
            )
            .map_err(ModelError::from)
        })?;
        let cost =
            SampledCurve::from_fn(grid, |l| total_cost(self.wage, l).map_err(ModelError::from))?;
        let average = cost.zip_with(&output, |ct, q| {
            average_cost_with_floor(ct, q, epsilon).map_err(ModelError::from)
        })?;
        let revenue = output.map_y(|q| total_revenue(self.price, q).map_err(ModelError::from))?;
        let gain = revenue.zip_with(&cost, |it, ct| profit(it, ct).map_err(ModelError::from))?;

        Ok(ProfitCurves {
            output,
            total_cost: cost,
            average_cost: average,
            total_revenue: revenue,
            profit: gain,
        })
    }

    /// Evaluate the page.
    ///
    /// # Examples
    /// ```
    /// use econ_models::config::ModelConfig;
    /// use econ_models::dashboard::ReturnsProfitParams;
    ///
    /// let params = ReturnsProfitParams { price: 12.0, ..ReturnsProfitParams::default() };
    /// let out = params.evaluate(&ModelConfig::default()).unwrap();
    /// assert_eq!(out.break_even.len(), 1);
    /// ```
    pub fn evaluate(&self, config: &ModelConfig) -> Result<ReturnsProfitOutput> {
        let _span = tracing::debug_span!("page", page = PAGE).entered();
        let mut warnings = Warnings::new(PAGE);

        let grid = linspace(1.0, self.labor_max, config.profit_points)?;
        let curves = self.curves(&grid, config.epsilon)?;
        let returns = ReturnsToScale::classify_with_tolerance(
            self.labor_elasticity,
            self.capital_elasticity,
            config.returns_tolerance,
        )?;
        let roots = break_even(&curves.average_cost, "average cost", self.price, &mut warnings);

        tracing::debug!(
            returns = %returns.kind,
            break_even_points = roots.len(),
            "returns/profit evaluated"
        );

        Ok(ReturnsProfitOutput {
            returns,
            output_at_min_labor: curves.output.ys()[0],
            min_average_cost: curves.average_cost.argmin(),
            max_profit: curves.profit.argmax(),
            break_even: roots,
            curves,
            warnings: warnings.into_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_metrics() {
        let out = ReturnsProfitParams::default()
            .evaluate(&ModelConfig::default())
            .unwrap();
        assert_eq!(out.returns.kind, ReturnsToScale::Constant);
        // Q(1) = 10·1·√10
        assert_relative_eq!(out.output_at_min_labor, 10.0 * 10.0_f64.sqrt(), epsilon = 1e-10);
        assert_eq!(out.curves.output.len(), 300);
    }

    #[test]
    fn test_series_identities() {
        let out = ReturnsProfitParams::default()
            .evaluate(&ModelConfig::default())
            .unwrap();
        let c = &out.curves;
        for i in 0..c.output.len() {
            let l = c.output.xs()[i];
            let q = c.output.ys()[i];
            assert_relative_eq!(c.total_cost.ys()[i], 100.0 * l, epsilon = 1e-9);
            assert_relative_eq!(c.average_cost.ys()[i], 100.0 * l / q, epsilon = 1e-9);
            assert_relative_eq!(c.total_revenue.ys()[i], 50.0 * q, epsilon = 1e-9);
            assert_relative_eq!(
                c.profit.ys()[i],
                50.0 * q - 100.0 * l,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_no_break_even_warns() {
        // CM = √(10·L) rises from ~3.2 to ~22.4; P = 50 is never reached
        let out = ReturnsProfitParams::default()
            .evaluate(&ModelConfig::default())
            .unwrap();
        assert!(out.break_even.is_empty());
        assert!(matches!(
            out.warnings[0],
            DegenerateInput::NoCrossing { .. }
        ));
    }

    #[test]
    fn test_break_even_with_lower_price() {
        // CM = √(10·L) = 12 at L = 14.4
        let params = ReturnsProfitParams {
            price: 12.0,
            ..ReturnsProfitParams::default()
        };
        let out = params.evaluate(&ModelConfig::default()).unwrap();
        assert_eq!(out.break_even.len(), 1);
        assert!((out.break_even[0] - 14.4).abs() < 49.0 / 299.0);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_zero_wage_flat_average_cost() {
        let params = ReturnsProfitParams {
            wage: 0.0,
            ..ReturnsProfitParams::default()
        };
        let out = params.evaluate(&ModelConfig::default()).unwrap();
        assert!(out.break_even.is_empty());
        assert!(matches!(out.warnings[0], DegenerateInput::FlatCurve { .. }));
    }

    #[test]
    fn test_zero_scale_uses_floor() {
        let params = ReturnsProfitParams {
            scale: 0.0,
            ..ReturnsProfitParams::default()
        };
        let out = params.evaluate(&ModelConfig::default()).unwrap();
        assert!(out.curves.average_cost.ys().iter().all(|v| v.is_finite()));
        assert_relative_eq!(out.curves.average_cost.ys()[0], 100.0 / 1e-9, max_relative = 1e-12);
    }

    #[test]
    fn test_average_cost_overflow_is_domain_error() {
        // Zero output floors to ε, and 1e300·L / 1e-9 overflows
        let params = ReturnsProfitParams {
            scale: 0.0,
            wage: 1e300,
            ..ReturnsProfitParams::default()
        };
        let err = params.evaluate(&ModelConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Domain(econ_core::types::DomainError::NonFinite { .. })
        ));
    }
}
