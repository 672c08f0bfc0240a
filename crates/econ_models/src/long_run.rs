//! Long-run average cost as the envelope of short-run technique curves.
//!
//! Each technique has a short-run average cost `a/q + b` on `q > 0`. The
//! long-run average cost is the point-wise minimum across techniques over a
//! shared quantity grid.
//!
//! Minima reported here are minima over the sampled grid. `a/q + b` is
//! strictly decreasing for `a > 0`, so its sampled minimum sits at the
//! right edge of the grid; that is the intended reading for display.

use econ_core::math::curve::{CurveExtremum, SampledCurve};
use econ_core::math::envelope::{envelope_owners, lower_envelope, sampled_minima};
use econ_core::math::numeric::{ensure_finite, from_f64, require_non_negative, require_positive};
use econ_core::types::DomainError;
use num_traits::Float;

use crate::error::{ModelError, Result};

/// One production technique with short-run average cost `a/q + b`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Technique<T> {
    /// Display name
    pub name: String,
    /// Level `a` (fixed-cost component)
    pub level: T,
    /// Slope `b` (variable-cost component)
    pub slope: T,
    /// Annotation only: quantity at which the technique is marked
    pub position: T,
    /// Annotation only: price line drawn near `position`
    pub reference_price: T,
}

impl<T: Float> Technique<T> {
    /// Create a technique with `level, slope >= 0`.
    ///
    /// `position` and `reference_price` are not used in any computation.
    pub fn new(
        name: impl Into<String>,
        level: T,
        slope: T,
        position: T,
        reference_price: T,
    ) -> std::result::Result<Self, DomainError> {
        let technique = Self {
            name: name.into(),
            level,
            slope,
            position,
            reference_price,
        };
        technique.validate()?;
        Ok(technique)
    }

    /// Check `level, slope >= 0` on a technique built without [`Technique::new`],
    /// for example by deserialisation.
    pub fn validate(&self) -> std::result::Result<(), DomainError> {
        require_non_negative(self.level, "level")?;
        require_non_negative(self.slope, "slope")?;
        Ok(())
    }

    /// Short-run average cost at quantity `q > 0`.
    ///
    /// # Examples
    /// ```
    /// use econ_models::long_run::Technique;
    ///
    /// let t = Technique::new("T1", 120.0_f64, 9.0, 30.0, 60.0).unwrap();
    /// assert_eq!(t.average_cost(10.0).unwrap(), 21.0);
    /// assert!(t.average_cost(0.0).is_err());
    /// ```
    pub fn average_cost(&self, quantity: T) -> std::result::Result<T, DomainError> {
        let q = require_positive(quantity, "quantity")?;
        ensure_finite(self.level / q + self.slope, "average cost")
    }

    /// Sample the average cost over `grid`.
    pub fn curve(&self, grid: &[T]) -> Result<SampledCurve<T>> {
        SampledCurve::from_fn(grid, |q| self.average_cost(q).map_err(ModelError::from))
    }
}

/// A non-empty set of validated techniques sharing a quantity grid.
///
/// Only [`TechniqueFamily::new`] and [`TechniqueFamily::textbook`] build a
/// family, so it is serialisable but not deserialisable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TechniqueFamily<T> {
    techniques: Vec<Technique<T>>,
}

impl<T: Float> TechniqueFamily<T> {
    /// Create a family, validating every technique.
    ///
    /// # Errors
    /// * `ModelError::EmptyFamily` - `techniques` is empty
    /// * `ModelError::Domain` - a technique has a negative level or slope
    pub fn new(techniques: Vec<Technique<T>>) -> Result<Self> {
        if techniques.is_empty() {
            return Err(ModelError::EmptyFamily);
        }
        for technique in &techniques {
            technique.validate()?;
        }
        Ok(Self { techniques })
    }

    /// The three-technique family used in the textbook illustration.
    pub fn textbook() -> Self {
        let t = |name: &str, a: f64, b: f64, tp: f64, p: f64| Technique {
            name: name.to_string(),
            level: from_f64(a),
            slope: from_f64(b),
            position: from_f64(tp),
            reference_price: from_f64(p),
        };
        Self {
            techniques: vec![
                t("CM1", 120.0, 9.0, 30.0, 60.0),
                t("CM2", 90.0, 6.0, 70.0, 40.0),
                t("CM3", 70.0, 0.8, 110.0, 20.0),
            ],
        }
    }

    /// Techniques in insertion order.
    pub fn techniques(&self) -> &[Technique<T>] {
        &self.techniques
    }

    /// Number of techniques.
    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    /// Always false; families are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }

    /// Sample every technique over `grid`.
    pub fn curves(&self, grid: &[T]) -> Result<Vec<SampledCurve<T>>> {
        self.techniques.iter().map(|t| t.curve(grid)).collect()
    }

    /// Envelope, owners and sampled minima over `grid`.
    ///
    /// # Examples
    /// ```
    /// use econ_core::math::grid::linspace;
    /// use econ_models::long_run::TechniqueFamily;
    ///
    /// let grid = linspace(1.0_f64, 120.0, 500).unwrap();
    /// let analysis = TechniqueFamily::textbook().analyze(&grid).unwrap();
    ///
    /// for (i, &y) in analysis.envelope.ys().iter().enumerate() {
    ///     for curve in &analysis.curves {
    ///         assert!(y <= curve.ys()[i]);
    ///     }
    /// }
    /// ```
    pub fn analyze(&self, grid: &[T]) -> Result<EnvelopeAnalysis<T>> {
        let curves = self.curves(grid)?;
        let envelope = lower_envelope(&curves)?;
        let owners = envelope_owners(&curves)?;
        let technique_minima = sampled_minima(&curves);
        let envelope_minimum = envelope.argmin();
        Ok(EnvelopeAnalysis {
            curves,
            envelope,
            owners,
            technique_minima,
            envelope_minimum,
        })
    }
}

/// Result of [`TechniqueFamily::analyze`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnvelopeAnalysis<T: Float> {
    /// Short-run curve per technique, in family order
    pub curves: Vec<SampledCurve<T>>,
    /// Point-wise minimum of `curves`
    pub envelope: SampledCurve<T>,
    /// Index of the technique attaining the envelope at each grid point
    pub owners: Vec<usize>,
    /// Sampled minimum per technique
    pub technique_minima: Vec<CurveExtremum<T>>,
    /// Sampled minimum of the envelope
    pub envelope_minimum: CurveExtremum<T>,
}

impl<T: Float> EnvelopeAnalysis<T> {
    /// Envelope value at the last grid point.
    pub fn envelope_at_max(&self) -> T {
        self.envelope.last().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use econ_core::math::grid::linspace;

    #[test]
    fn test_technique_average_cost() {
        let t = Technique::new("T", 90.0_f64, 6.0, 0.0, 0.0).unwrap();
        assert_eq!(t.average_cost(30.0).unwrap(), 9.0);
        assert!(matches!(
            t.average_cost(-1.0),
            Err(DomainError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_technique_rejects_negative_level() {
        let err = Technique::new("T", -1.0_f64, 6.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.parameter(), Some("level"));
    }

    #[test]
    fn test_empty_family_rejected() {
        let result: Result<TechniqueFamily<f64>> = TechniqueFamily::new(vec![]);
        assert_eq!(result.unwrap_err(), ModelError::EmptyFamily);
    }

    #[test]
    fn test_family_revalidates_literal_techniques() {
        let literal = Technique {
            name: "T".to_string(),
            level: -5.0_f64,
            slope: 1.0,
            position: 0.0,
            reference_price: 0.0,
        };
        let err = TechniqueFamily::new(vec![literal]).unwrap_err();
        assert_eq!(err.parameter(), Some("level"));
    }

    #[test]
    fn test_curve_rejects_non_positive_grid() {
        let t = Technique::new("T", 1.0_f64, 1.0, 0.0, 0.0).unwrap();
        let err = t.curve(&[0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err.parameter(), Some("quantity"));
    }

    #[test]
    fn test_textbook_envelope_is_pointwise_min() {
        let grid = linspace(1.0_f64, 120.0, 500).unwrap();
        let analysis = TechniqueFamily::textbook().analyze(&grid).unwrap();
        assert_eq!(analysis.curves.len(), 3);

        for i in 0..grid.len() {
            let expected = analysis
                .curves
                .iter()
                .map(|c| c.ys()[i])
                .fold(f64::INFINITY, f64::min);
            assert_eq!(analysis.envelope.ys()[i], expected);
            let owner = analysis.owners[i];
            assert_eq!(analysis.curves[owner].ys()[i], expected);
        }
    }

    #[test]
    fn test_textbook_third_technique_dominates() {
        // 70/q + 0.8 is below 90/q + 6 and 120/q + 9 everywhere on q > 0
        let grid = linspace(1.0_f64, 120.0, 500).unwrap();
        let analysis = TechniqueFamily::textbook().analyze(&grid).unwrap();
        assert!(analysis.owners.iter().all(|&o| o == 2));
        assert_relative_eq!(
            analysis.envelope_at_max(),
            70.0 / 120.0 + 0.8,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sampled_minima_at_right_edge() {
        let grid = linspace(1.0_f64, 120.0, 200).unwrap();
        let analysis = TechniqueFamily::textbook().analyze(&grid).unwrap();
        for m in &analysis.technique_minima {
            assert_eq!(m.index, 199);
            assert_eq!(m.x, 120.0);
        }
        assert_eq!(analysis.envelope_minimum.index, 199);
    }

    #[test]
    fn test_crossing_techniques_switch_owner() {
        // 100/q + 1 vs 20/q + 5 cross at q = 20
        let family = TechniqueFamily::new(vec![
            Technique::new("high fixed", 100.0_f64, 1.0, 0.0, 0.0).unwrap(),
            Technique::new("low fixed", 20.0_f64, 5.0, 0.0, 0.0).unwrap(),
        ])
        .unwrap();
        let grid = linspace(1.0, 40.0, 79).unwrap();
        let analysis = family.analyze(&grid).unwrap();
        assert_eq!(analysis.owners[0], 1);
        assert_eq!(*analysis.owners.last().unwrap(), 0);
    }

    #[test]
    fn test_flat_technique() {
        let family =
            TechniqueFamily::new(vec![Technique::new("flat", 0.0_f64, 4.0, 0.0, 0.0).unwrap()])
                .unwrap();
        let grid = linspace(1.0, 10.0, 10).unwrap();
        let analysis = family.analyze(&grid).unwrap();
        assert!(analysis.envelope.is_flat());
        // Ties resolve to the first index
        assert_eq!(analysis.envelope_minimum.index, 0);
    }
}
