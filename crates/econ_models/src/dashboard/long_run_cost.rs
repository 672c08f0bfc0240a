//! Long-run average cost page.

use econ_core::math::curve::CurveExtremum;
use econ_core::math::grid::linspace;

use crate::config::ModelConfig;
use crate::error::{DegenerateInput, Result, Warnings};
use crate::long_run::{EnvelopeAnalysis, Technique, TechniqueFamily};

const PAGE: &str = "long_run_cost";

/// Long-run cost parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LongRunCostParams {
    /// Techniques whose envelope is taken
    pub techniques: Vec<Technique<f64>>,
    /// Right edge of the quantity axis (the grid starts at 1)
    pub quantity_max: f64,
    /// Number of grid points
    pub points: usize,
}

impl Default for LongRunCostParams {
    fn default() -> Self {
        Self {
            techniques: TechniqueFamily::textbook().techniques().to_vec(),
            quantity_max: 120.0,
            points: 500,
        }
    }
}

/// Where a technique's annotation is drawn.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechniqueMarker {
    /// Technique name
    pub name: String,
    /// Quantity of the vertical marker
    pub position: f64,
    /// Price of the horizontal segment
    pub reference_price: f64,
    /// Whether `position` lies on the quantity axis
    pub visible: bool,
}

/// Long-run cost output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LongRunCostOutput {
    /// Curves, envelope and sampled minima
    pub analysis: EnvelopeAnalysis<f64>,
    /// Sampled minimum of the envelope
    pub envelope_minimum: CurveExtremum<f64>,
    /// Envelope at `quantity_max`
    pub envelope_at_max: f64,
    /// Annotation markers, in technique order
    pub markers: Vec<TechniqueMarker>,
    /// Degenerate-input warnings
    pub warnings: Vec<DegenerateInput>,
}

impl LongRunCostParams {
    /// Evaluate the envelope page.
    ///
    /// # Examples
    /// ```
    /// use econ_models::config::ModelConfig;
    /// use econ_models::dashboard::LongRunCostParams;
    ///
    /// let out = LongRunCostParams::default().evaluate(&ModelConfig::default()).unwrap();
    /// assert_eq!(out.analysis.curves.len(), 3);
    /// assert_eq!(out.envelope_minimum.x, 120.0);
    /// ```
    pub fn evaluate(&self, _config: &ModelConfig) -> Result<LongRunCostOutput> {
        let _span = tracing::debug_span!("page", page = PAGE).entered();
        let mut warnings = Warnings::new(PAGE);

        let family = TechniqueFamily::new(self.techniques.clone())?;
        let grid = linspace(1.0, self.quantity_max, self.points)?;
        let analysis = family.analyze(&grid)?;

        for (technique, curve) in family.techniques().iter().zip(&analysis.curves) {
            if curve.is_flat() {
                warnings.push(DegenerateInput::FlatCurve {
                    curve: technique.name.clone(),
                });
            }
        }

        let markers = family
            .techniques()
            .iter()
            .map(|t| TechniqueMarker {
                name: t.name.clone(),
                position: t.position,
                reference_price: t.reference_price,
                visible: (0.0..=self.quantity_max).contains(&t.position),
            })
            .collect();

        tracing::debug!(
            techniques = family.len(),
            envelope_min = analysis.envelope_minimum.y,
            "envelope evaluated"
        );

        Ok(LongRunCostOutput {
            envelope_minimum: analysis.envelope_minimum,
            envelope_at_max: analysis.envelope_at_max(),
            analysis,
            markers,
            warnings: warnings.into_vec(),
        })
    }
}
