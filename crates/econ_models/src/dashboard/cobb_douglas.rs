//! Cobb–Douglas explorer page.
//!
//! Point metrics plus curves along each input with the other held fixed,
//! the production surface and an isoquant family. All grids start at 1
//! and end at three times the chosen input.

use econ_core::math::curve::SampledCurve;
use econ_core::math::grid::linspace;

use crate::config::ModelConfig;
use crate::error::{DegenerateInput, ModelError, Result, Warnings};
use crate::isoquant::{isoquant_family, isoquant_levels, Isoquant};
use crate::production::{average_product, CobbDouglas, ProductionParameters, ProductionPoint};
use crate::returns::{ReturnsClassification, ReturnsToScale};
use crate::surface::ProductionSurface;

const PAGE: &str = "cobb_douglas_explorer";

/// Lower bound of every explorer grid.
const GRID_START: f64 = 1.0;
/// Upper bound used when `3·input` does not exceed [`GRID_START`].
const MIN_GRID_END: f64 = 2.0;

/// Explorer parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CobbDouglasExplorerParams {
    /// Technology and input point
    pub production: ProductionParameters<f64>,
}

impl Default for CobbDouglasExplorerParams {
    fn default() -> Self {
        Self {
            production: ProductionParameters {
                total_factor_productivity: 1.0,
                capital: 10.0,
                labor: 5.0,
                capital_elasticity: 0.5,
                labor_elasticity: 0.5,
            },
        }
    }
}

/// Output, marginal and average product along one input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InputCurves {
    /// `Q` against the input
    pub output: SampledCurve<f64>,
    /// Marginal product against the input
    pub marginal_product: SampledCurve<f64>,
    /// Average product against the input
    pub average_product: SampledCurve<f64>,
}

/// Explorer output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CobbDouglasExplorerOutput {
    /// Metrics at the chosen point
    pub point: ProductionPoint<f64>,
    /// Returns to scale
    pub returns: ReturnsClassification<f64>,
    /// Curves along labour at fixed capital
    pub labor_curves: InputCurves,
    /// Curves along capital at fixed labour
    pub capital_curves: InputCurves,
    /// Output on the capital × labour mesh
    pub surface: ProductionSurface<f64>,
    /// Isoquants at levels spread around the point's output
    pub isoquants: Vec<Isoquant<f64>>,
    /// Degenerate-input warnings
    pub warnings: Vec<DegenerateInput>,
}

/// Upper grid bound `3·input`, raised when it would not exceed the start.
fn axis_end(axis: &str, input: f64, warnings: &mut Warnings) -> f64 {
    let requested = 3.0 * input;
    if requested > GRID_START {
        requested
    } else {
        warnings.push(DegenerateInput::GridClamped {
            axis: axis.to_string(),
            requested_max: requested,
            used_max: MIN_GRID_END,
        });
        MIN_GRID_END
    }
}

fn labor_curves(technology: &CobbDouglas<f64>, capital: f64, grid: &[f64]) -> Result<InputCurves> {
    let output = SampledCurve::from_fn(grid, |l| {
        technology.output(capital, l).map_err(ModelError::from)
    })?;
    let marginal_product = SampledCurve::from_fn(grid, |l| {
        technology
            .marginal_product_labor(capital, l)
            .map_err(ModelError::from)
    })?;
    let average = output.map_points(|l, q| average_product(q, l).map_err(ModelError::from))?;
    Ok(InputCurves {
        output,
        marginal_product,
        average_product: average,
    })
}

fn capital_curves(technology: &CobbDouglas<f64>, labor: f64, grid: &[f64]) -> Result<InputCurves> {
    let output = SampledCurve::from_fn(grid, |k| {
        technology.output(k, labor).map_err(ModelError::from)
    })?;
    let marginal_product = SampledCurve::from_fn(grid, |k| {
        technology
            .marginal_product_capital(k, labor)
            .map_err(ModelError::from)
    })?;
    let average = output.map_points(|k, q| average_product(q, k).map_err(ModelError::from))?;
    Ok(InputCurves {
        output,
        marginal_product,
        average_product: average,
    })
}

impl CobbDouglasExplorerParams {
    /// Evaluate the explorer.
    pub fn evaluate(&self, config: &ModelConfig) -> Result<CobbDouglasExplorerOutput> {
        let _span = tracing::debug_span!("page", page = PAGE).entered();
        let mut warnings = Warnings::new(PAGE);
        let params = &self.production;

        let technology = params.technology()?;
        let point = params.evaluate()?;
        let returns = ReturnsToScale::classify_with_tolerance(
            params.labor_elasticity,
            params.capital_elasticity,
            config.returns_tolerance,
        )?;

        let labor_end = axis_end("labor", params.labor, &mut warnings);
        let capital_end = axis_end("capital", params.capital, &mut warnings);

        let labor_grid = linspace(GRID_START, labor_end, config.curve_points)?;
        let capital_grid = linspace(GRID_START, capital_end, config.curve_points)?;
        let labor_curves = labor_curves(&technology, params.capital, &labor_grid)?;
        let capital_curves = capital_curves(&technology, params.labor, &capital_grid)?;

        let surface = ProductionSurface::evaluate(
            &technology,
            &linspace(GRID_START, capital_end, config.surface_points)?,
            &linspace(GRID_START, labor_end, config.surface_points)?,
        )?;

        let isoquants = if technology.labor_elasticity <= 0.0 {
            warnings.push(DegenerateInput::Undefined {
                quantity: "isoquants".to_string(),
                reason: "labor elasticity is zero".to_string(),
            });
            Vec::new()
        } else if point.output <= 0.0 {
            warnings.push(DegenerateInput::Undefined {
                quantity: "isoquants".to_string(),
                reason: "output at the chosen point is zero".to_string(),
            });
            Vec::new()
        } else {
            let levels = isoquant_levels(point.output, config.isoquant_levels)?;
            let grid = linspace(GRID_START, capital_end, config.isoquant_points)?;
            isoquant_family(&technology, &grid, &levels)?
        };

        tracing::debug!(
            output = point.output,
            elasticity_sum = returns.elasticity_sum,
            isoquants = isoquants.len(),
            "explorer evaluated"
        );

        Ok(CobbDouglasExplorerOutput {
            point,
            returns,
            labor_curves,
            capital_curves,
            surface,
            isoquants,
            warnings: warnings.into_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_grids_and_shapes() {
        let config = ModelConfig::default();
        let out = CobbDouglasExplorerParams::default()
            .evaluate(&config)
            .unwrap();

        assert_eq!(out.labor_curves.output.len(), 100);
        assert_eq!(out.labor_curves.output.xs()[0], 1.0);
        assert_eq!(out.labor_curves.output.last().0, 15.0);
        assert_eq!(out.capital_curves.output.last().0, 30.0);
        assert_eq!(out.surface.shape(), (40, 40));
        assert_eq!(out.isoquants.len(), 6);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_labor_curves_match_point_formulas() {
        let out = CobbDouglasExplorerParams::default()
            .evaluate(&ModelConfig::default())
            .unwrap();
        for (i, (l, q)) in out.labor_curves.output.points().enumerate() {
            assert_relative_eq!(q, (10.0_f64 * l).sqrt(), epsilon = 1e-10);
            assert_relative_eq!(
                out.labor_curves.average_product.ys()[i],
                q / l,
                epsilon = 1e-10
            );
        }
        // Diminishing marginal product of labour with b < 1
        let mp = out.labor_curves.marginal_product.ys();
        assert!(mp.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_isoquant_levels_span_point_output() {
        let out = CobbDouglasExplorerParams::default()
            .evaluate(&ModelConfig::default())
            .unwrap();
        let q = out.point.output;
        assert_relative_eq!(out.isoquants[0].level, 0.4 * q, epsilon = 1e-12);
        assert_relative_eq!(out.isoquants[5].level, 2.0 * q, epsilon = 1e-12);
    }

    #[test]
    fn test_small_input_clamps_grid() {
        let mut params = CobbDouglasExplorerParams::default();
        params.production.labor = 0.2;
        let out = params.evaluate(&ModelConfig::default()).unwrap();
        assert_eq!(out.labor_curves.output.last().0, MIN_GRID_END);
        assert!(matches!(
            out.warnings[0],
            DegenerateInput::GridClamped { ref axis, .. } if axis == "labor"
        ));
    }

    #[test]
    fn test_zero_labor_elasticity_skips_isoquants() {
        let mut params = CobbDouglasExplorerParams::default();
        params.production.labor_elasticity = 0.0;
        let out = params.evaluate(&ModelConfig::default()).unwrap();
        assert!(out.isoquants.is_empty());
        assert_eq!(out.warnings.len(), 1);
        assert!(out.labor_curves.marginal_product.ys().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_zero_productivity_skips_isoquants() {
        let mut params = CobbDouglasExplorerParams::default();
        params.production.total_factor_productivity = 0.0;
        let out = params.evaluate(&ModelConfig::default()).unwrap();
        assert!(out.isoquants.is_empty());
        assert!(matches!(out.warnings[0], DegenerateInput::Undefined { .. }));
    }

    #[test]
    fn test_negative_elasticity_is_error() {
        let mut params = CobbDouglasExplorerParams::default();
        params.production.capital_elasticity = -0.1;
        let err = params.evaluate(&ModelConfig::default()).unwrap_err();
        assert_eq!(err.parameter(), Some("capital_elasticity"));
    }
}
