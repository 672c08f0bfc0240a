//! Textbook production, labour demand and cost diagrams.

use econ_core::math::curve::{CurveExtremum, SampledCurve};
use econ_core::math::grid::linspace;

use crate::config::ModelConfig;
use crate::cost_curves::AverageCostShape;
use crate::dashboard::clip_to_display;
use crate::error::{DegenerateInput, ModelError, Result, Warnings};
use crate::labor_demand::ValueMarginalProduct;
use crate::production::CobbDouglas;

const PAGE: &str = "textbook";

/// Output axis shared by the cost diagrams.
const COST_AXIS: (f64, f64) = (1.0, 60.0);

/// Left edge of the production diagram's labour axis.
const PRODUCTION_AXIS_START: f64 = 1e-9;

/// `Y = A·L^b`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProductionDiagram {
    /// Total factor productivity `A`
    pub total_factor_productivity: f64,
    /// Labour elasticity `b`
    pub elasticity: f64,
    /// Right edge of the labour axis
    pub labor_max: f64,
}

impl Default for ProductionDiagram {
    fn default() -> Self {
        Self {
            total_factor_productivity: 10.0,
            elasticity: 0.6,
            labor_max: 20.0,
        }
    }
}

/// Two VMP schedules with a common slope and two wages.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LaborDemandDiagram {
    /// Common slope `m < 0`
    pub slope: f64,
    /// Intercept of the first schedule
    pub first_intercept: f64,
    /// Intercept of the second schedule
    pub second_intercept: f64,
    /// Wage paired with the first schedule
    pub first_wage: f64,
    /// Wage paired with the second schedule
    pub second_wage: f64,
    /// Right edge of the employment axis
    pub employment_max: f64,
}

impl Default for LaborDemandDiagram {
    fn default() -> Self {
        Self {
            slope: -0.6,
            first_intercept: 18.0,
            second_intercept: 16.0,
            first_wage: 12.0,
            second_wage: 8.0,
            employment_max: 25.0,
        }
    }
}

/// Average and average variable cost pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostPairDiagram {
    /// Average cost shape
    pub average_cost: AverageCostShape<f64>,
    /// Average variable cost shape
    pub average_variable_cost: AverageCostShape<f64>,
}

impl Default for CostPairDiagram {
    fn default() -> Self {
        Self {
            average_cost: AverageCostShape::Quadratic {
                floor: 8.0,
                curvature: 0.015,
                center: 28.0,
            },
            average_variable_cost: AverageCostShape::Quadratic {
                floor: 9.0,
                curvature: 0.008,
                center: 38.0,
            },
        }
    }
}

/// Parameters for every diagram on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextbookParams {
    /// Production function diagram
    pub production: ProductionDiagram,
    /// Labour demand diagram
    pub labor_demand: LaborDemandDiagram,
    /// Average fixed cost
    pub fixed_cost: AverageCostShape<f64>,
    /// Right edge of the average fixed cost axis
    pub fixed_cost_output_max: f64,
    /// Average variable cost with a capacity limit
    pub capacity_cost: AverageCostShape<f64>,
    /// U-shaped average variable cost
    pub u_shaped_variable_cost: AverageCostShape<f64>,
    /// U-shaped average cost
    pub u_shaped_cost: AverageCostShape<f64>,
    /// Average cost with average variable cost
    pub cost_pair: CostPairDiagram,
}

impl Default for TextbookParams {
    fn default() -> Self {
        Self {
            production: ProductionDiagram::default(),
            labor_demand: LaborDemandDiagram::default(),
            fixed_cost: AverageCostShape::FixedAverage { fixed_cost: 200.0 },
            fixed_cost_output_max: 50.0,
            capacity_cost: AverageCostShape::CapacityConstrained {
                base: 20.0,
                capacity: 40.0,
                exponent: 2.0,
            },
            u_shaped_variable_cost: AverageCostShape::Quadratic {
                floor: 8.0,
                curvature: 0.015,
                center: 20.0,
            },
            u_shaped_cost: AverageCostShape::Quadratic {
                floor: 10.0,
                curvature: 0.02,
                center: 30.0,
            },
            cost_pair: CostPairDiagram::default(),
        }
    }
}

/// Employment chosen at a wage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmploymentLevel {
    /// Wage `W`
    pub wage: f64,
    /// Employment where `VMP = W`
    pub employment: f64,
    /// Employment clipped to the employment axis
    pub displayed: f64,
}

/// Labour demand diagram output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LaborDemandOutput {
    /// First VMP schedule
    pub first_schedule: SampledCurve<f64>,
    /// Second VMP schedule
    pub second_schedule: SampledCurve<f64>,
    /// Employment on the first schedule at the first wage
    pub first_employment: EmploymentLevel,
    /// Employment on the second schedule at the second wage
    pub second_employment: EmploymentLevel,
}

/// A cost curve with its sampled minimum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarkedCurve {
    /// Sampled curve
    pub curve: SampledCurve<f64>,
    /// Sampled minimum
    pub minimum: CurveExtremum<f64>,
}

impl MarkedCurve {
    fn new(curve: SampledCurve<f64>) -> Self {
        let minimum = curve.argmin();
        Self { curve, minimum }
    }
}

/// Textbook page output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextbookOutput {
    /// `Y = A·L^b`
    pub production: SampledCurve<f64>,
    /// VMP schedules and employment
    pub labor_demand: LaborDemandOutput,
    /// Average fixed cost
    pub fixed_cost: SampledCurve<f64>,
    /// Capacity-constrained average variable cost
    pub capacity_cost: SampledCurve<f64>,
    /// Output at which the capacity segment starts, if any
    pub capacity: Option<f64>,
    /// U-shaped average variable cost
    pub u_shaped_variable_cost: MarkedCurve,
    /// U-shaped average cost
    pub u_shaped_cost: MarkedCurve,
    /// Average cost of the pair
    pub pair_average_cost: MarkedCurve,
    /// Average variable cost of the pair
    pub pair_average_variable_cost: MarkedCurve,
    /// Degenerate-input warnings
    pub warnings: Vec<DegenerateInput>,
}

impl ProductionDiagram {
    fn evaluate(&self, config: &ModelConfig) -> Result<SampledCurve<f64>> {
        // Capital enters with a zero elasticity, so Y = A·L^b.
        let technology = CobbDouglas::new(self.total_factor_productivity, 0.0, self.elasticity)?;
        let grid = linspace(
            PRODUCTION_AXIS_START,
            self.labor_max,
            config.illustration_coarse_points,
        )?;
        SampledCurve::from_fn(&grid, |l| {
            technology.output(1.0, l).map_err(ModelError::from)
        })
    }
}

impl LaborDemandDiagram {
    fn evaluate(&self, config: &ModelConfig, warnings: &mut Warnings) -> Result<LaborDemandOutput> {
        let first =
            ValueMarginalProduct::with_epsilon(self.slope, self.first_intercept, config.epsilon)?;
        let second =
            ValueMarginalProduct::with_epsilon(self.slope, self.second_intercept, config.epsilon)?;
        let grid = linspace(0.0, self.employment_max, config.illustration_coarse_points)?;

        let mut level = |name: &str, schedule: &ValueMarginalProduct<f64>, wage: f64| {
            schedule.employment_at_wage(wage).map(|employment| EmploymentLevel {
                wage,
                employment,
                displayed: clip_to_display(name, employment, 0.0, self.employment_max, warnings),
            })
        };
        let first_employment = level("E1", &first, self.first_wage)?;
        let second_employment = level("E2", &second, self.second_wage)?;

        Ok(LaborDemandOutput {
            first_schedule: first.curve(&grid)?,
            second_schedule: second.curve(&grid)?,
            first_employment,
            second_employment,
        })
    }
}

fn cost_curve(
    shape: &AverageCostShape<f64>,
    start: f64,
    end: f64,
    points: usize,
) -> Result<SampledCurve<f64>> {
    shape.curve(&linspace(start, end, points)?)
}

impl TextbookParams {
    /// Evaluate every diagram.
    ///
    /// # Examples
    /// ```
    /// use econ_models::config::ModelConfig;
    /// use econ_models::dashboard::TextbookParams;
    ///
    /// let out = TextbookParams::default().evaluate(&ModelConfig::default()).unwrap();
    /// assert!((out.labor_demand.first_employment.employment - 10.0).abs() < 1e-9);
    /// ```
    pub fn evaluate(&self, config: &ModelConfig) -> Result<TextbookOutput> {
        let _span = tracing::debug_span!("page", page = PAGE).entered();
        let mut warnings = Warnings::new(PAGE);
        let (start, end) = COST_AXIS;
        let points = config.illustration_points;

        let production = self.production.evaluate(config)?;
        let labor_demand = self.labor_demand.evaluate(config, &mut warnings)?;
        let fixed_cost = cost_curve(
            &self.fixed_cost,
            1.0,
            self.fixed_cost_output_max,
            config.illustration_coarse_points,
        )?;
        let capacity_cost = cost_curve(&self.capacity_cost, start, end, points)?;
        let capacity = match self.capacity_cost {
            AverageCostShape::CapacityConstrained { capacity, .. } => Some(capacity),
            _ => None,
        };

        let marked = |shape: &AverageCostShape<f64>| -> Result<MarkedCurve> {
            Ok(MarkedCurve::new(cost_curve(shape, start, end, points)?))
        };
        let u_shaped_variable_cost = marked(&self.u_shaped_variable_cost)?;
        let u_shaped_cost = marked(&self.u_shaped_cost)?;
        let pair_average_cost = marked(&self.cost_pair.average_cost)?;
        let pair_average_variable_cost = marked(&self.cost_pair.average_variable_cost)?;

        tracing::debug!(
            first_employment = labor_demand.first_employment.employment,
            second_employment = labor_demand.second_employment.employment,
            "textbook diagrams evaluated"
        );

        Ok(TextbookOutput {
            production,
            labor_demand,
            fixed_cost,
            capacity_cost,
            capacity,
            u_shaped_variable_cost,
            u_shaped_cost,
            pair_average_cost,
            pair_average_variable_cost,
            warnings: warnings.into_vec(),
        })
    }
}
