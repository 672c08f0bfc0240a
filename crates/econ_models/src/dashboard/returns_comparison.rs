//! Increasing vs decreasing returns and exponential production.
//!
//! Two Cobb–Douglas technologies differing only in the labour elasticity,
//! and an exponential-in-labour technology, on `L ∈ [1, L_max]`. Cost,
//! revenue and marginal series follow the increasing-returns technology.
//! The price line splits the labour axis into profitable (`P > CM`) and
//! loss (`P < CM`) spans.

use econ_core::math::crossings::crossings_with_level;
use econ_core::math::curve::SampledCurve;
use econ_core::math::grid::linspace;
use econ_core::types::DomainError;

use crate::config::ModelConfig;
use crate::cost::{
    average_cost_with_floor, marginal_cost_with_floor, profit, total_cost, total_revenue,
};
use crate::dashboard::break_even;
use crate::error::{DegenerateInput, ModelError, Result, Warnings};
use crate::production::{marginal_product_labor, produce_cobb_douglas, produce_exponential};
use crate::returns::{ReturnsClassification, ReturnsToScale};

const PAGE: &str = "returns_comparison";

/// Comparison parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReturnsComparisonParams {
    /// Total factor productivity `x`
    pub scale: f64,
    /// Right edge of the labour axis
    pub labor_max: f64,
    /// Fixed capital `K`
    pub capital: f64,
    /// Labour elasticity of the increasing-returns technology
    pub increasing_labor_elasticity: f64,
    /// Labour elasticity of the decreasing-returns technology
    pub decreasing_labor_elasticity: f64,
    /// Capital elasticity shared by both technologies
    pub capital_elasticity: f64,
    /// Exponential growth rate `β`
    pub growth_rate: f64,
    /// Wage `w`
    pub wage: f64,
    /// Output price `P`
    pub price: f64,
}

impl Default for ReturnsComparisonParams {
    fn default() -> Self {
        Self {
            scale: 10.0,
            labor_max: 10.0,
            capital: 10.0,
            increasing_labor_elasticity: 1.2,
            decreasing_labor_elasticity: 0.5,
            capital_elasticity: 0.5,
            growth_rate: 0.15,
            wage: 100.0,
            price: 50.0,
        }
    }
}

/// A closed interval of the labour axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Left edge
    pub start: f64,
    /// Right edge
    pub end: f64,
}

/// Series sampled along labour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonCurves {
    /// Output with the decreasing-returns elasticity
    pub decreasing_output: SampledCurve<f64>,
    /// Output with the increasing-returns elasticity
    pub increasing_output: SampledCurve<f64>,
    /// Exponential-in-labour output
    pub exponential_output: SampledCurve<f64>,
    /// `CT = w·L`
    pub total_cost: SampledCurve<f64>,
    /// `CM = CT / max(Q, ε)`
    pub average_cost: SampledCurve<f64>,
    /// `IT = P·Q`
    pub total_revenue: SampledCurve<f64>,
    /// `IT − CT`
    pub profit: SampledCurve<f64>,
    /// Marginal product of labour
    pub marginal_product_labor: SampledCurve<f64>,
    /// `CMg = w / max(PMgL, ε)`
    pub marginal_cost: SampledCurve<f64>,
}

/// Comparison output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReturnsComparisonOutput {
    /// Returns to scale of the increasing technology
    pub increasing_returns: ReturnsClassification<f64>,
    /// Returns to scale of the decreasing technology
    pub decreasing_returns: ReturnsClassification<f64>,
    /// Labour levels where `CM = P`
    pub break_even: Vec<f64>,
    /// Spans with `P > CM`
    pub profitable_spans: Vec<Span>,
    /// Spans with `P < CM`
    pub loss_spans: Vec<Span>,
    /// Sampled series
    pub curves: ComparisonCurves,
    /// Degenerate-input warnings
    pub warnings: Vec<DegenerateInput>,
}

/// Split the axis into runs where `curve < level` and `curve > level`.
///
/// Run edges are the interpolated crossings where the sign change is
/// strict; otherwise the run ends at its outermost sample. Samples exactly
/// on `level` belong to neither side.
fn level_spans(curve: &SampledCurve<f64>, level: f64) -> (Vec<Span>, Vec<Span>) {
    let crossings = crossings_with_level(curve, level);
    let edge = |segment: usize, fallback: f64| {
        crossings
            .iter()
            .find(|c| c.segment == segment)
            .map_or(fallback, |c| c.x)
    };
    let side = |y: f64| -> i8 {
        if y < level {
            1
        } else if y > level {
            -1
        } else {
            0
        }
    };

    let (xs, ys) = (curve.xs(), curve.ys());
    let mut below = Vec::new();
    let mut above = Vec::new();
    let mut i = 0;
    while i < ys.len() {
        let s = side(ys[i]);
        if s == 0 {
            i += 1;
            continue;
        }
        let mut j = i;
        while j + 1 < ys.len() && side(ys[j + 1]) == s {
            j += 1;
        }

        let start = if i > 0 { edge(i - 1, xs[i]) } else { xs[i] };
        let end = if j + 1 < ys.len() { edge(j, xs[j]) } else { xs[j] };
        let span = Span { start, end };
        if s > 0 {
            below.push(span);
        } else {
            above.push(span);
        }
        i = j + 1;
    }

    (below, above)
}

fn sample<F>(grid: &[f64], f: F) -> Result<SampledCurve<f64>>
where
    F: Fn(f64) -> std::result::Result<f64, DomainError>,
{
    SampledCurve::from_fn(grid, |l| f(l).map_err(ModelError::from))
}

impl ReturnsComparisonParams {
    /// Sample every series over `grid`.
    pub fn curves(&self, grid: &[f64], epsilon: f64) -> Result<ComparisonCurves> {
        let cobb_douglas = |elasticity: f64| {
            sample(grid, |l| {
                produce_cobb_douglas(self.scale, self.capital, l, self.capital_elasticity, elasticity)
            })
        };
        let decreasing_output = cobb_douglas(self.decreasing_labor_elasticity)?;
        let increasing_output = cobb_douglas(self.increasing_labor_elasticity)?;
        let exponential_output = sample(grid, |l| {
            produce_exponential(self.scale, l, self.capital, self.growth_rate)
        })?;

        let cost = sample(grid, |l| total_cost(self.wage, l))?;
        let average = cost.zip_with(&increasing_output, |ct, q| {
            average_cost_with_floor(ct, q, epsilon).map_err(ModelError::from)
        })?;
        let revenue = increasing_output
            .map_y(|q| total_revenue(self.price, q).map_err(ModelError::from))?;
        let gain = revenue.zip_with(&cost, |it, ct| profit(it, ct).map_err(ModelError::from))?;

        let marginal_product = sample(grid, |l| {
            marginal_product_labor(
                self.scale,
                self.capital,
                l,
                self.capital_elasticity,
                self.increasing_labor_elasticity,
            )
        })?;
        let marginal = marginal_product.map_y(|mp| {
            marginal_cost_with_floor(self.wage, mp, epsilon).map_err(ModelError::from)
        })?;

        Ok(ComparisonCurves {
            decreasing_output,
            increasing_output,
            exponential_output,
            total_cost: cost,
            average_cost: average,
            total_revenue: revenue,
            profit: gain,
            marginal_product_labor: marginal_product,
            marginal_cost: marginal,
        })
    }

    /// Evaluate the page.
    pub fn evaluate(&self, config: &ModelConfig) -> Result<ReturnsComparisonOutput> {
        let _span = tracing::debug_span!("page", page = PAGE).entered();
        let mut warnings = Warnings::new(PAGE);

        let grid = linspace(1.0, self.labor_max, config.comparison_points)?;
        let curves = self.curves(&grid, config.epsilon)?;

        let classify = |labor: f64| {
            ReturnsToScale::classify_with_tolerance(
                labor,
                self.capital_elasticity,
                config.returns_tolerance,
            )
        };
        let increasing_returns = classify(self.increasing_labor_elasticity)?;
        let decreasing_returns = classify(self.decreasing_labor_elasticity)?;

        let roots = break_even(&curves.average_cost, "average cost", self.price, &mut warnings);
        let (profitable_spans, loss_spans) = level_spans(&curves.average_cost, self.price);

        tracing::debug!(
            break_even_points = roots.len(),
            profitable_spans = profitable_spans.len(),
            loss_spans = loss_spans.len(),
            "returns comparison evaluated"
        );

        Ok(ReturnsComparisonOutput {
            increasing_returns,
            decreasing_returns,
            break_even: roots,
            profitable_spans,
            loss_spans,
            curves,
            warnings: warnings.into_vec(),
        })
    }
}
