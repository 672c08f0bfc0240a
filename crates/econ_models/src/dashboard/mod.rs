//! Dashboard page evaluators.
//!
//! Each page is a pure function from a parameter struct to an output
//! struct of scalar metrics and sampled curves:
//!
//! ```text
//! Params + ModelConfig --evaluate--> Output { metrics, curves, warnings }
//! ```
//!
//! Parameter structs default to the values the dashboard starts with.
//! Fatal parameter problems are returned as [`ModelError`](crate::error::ModelError);
//! degenerate but displayable situations produce an empty result plus a
//! [`DegenerateInput`](crate::error::DegenerateInput) in `warnings`.
//!
//! ## Pages
//!
//! - [`production_calculator`]: point metrics of linear or Cobb–Douglas production
//! - [`cobb_douglas`]: curves, surface and isoquants of a Cobb–Douglas technology
//! - [`long_run_cost`]: long-run average cost envelope of three techniques
//! - [`returns_profit`]: cost, revenue, profit and break-even along labour
//! - [`returns_comparison`]: increasing vs decreasing vs exponential production
//! - [`textbook`]: textbook production, labour demand and cost diagrams

pub mod cobb_douglas;
pub mod long_run_cost;
pub mod production_calculator;
pub mod returns_comparison;
pub mod returns_profit;
pub mod textbook;

pub use cobb_douglas::{CobbDouglasExplorerOutput, CobbDouglasExplorerParams};
pub use long_run_cost::{LongRunCostOutput, LongRunCostParams};
pub use production_calculator::{ProductionCalculatorOutput, ProductionCalculatorParams};
pub use returns_comparison::{ReturnsComparisonOutput, ReturnsComparisonParams};
pub use returns_profit::{ReturnsProfitOutput, ReturnsProfitParams};
pub use textbook::{TextbookOutput, TextbookParams};

use econ_core::math::crossings::find_crossings;
use econ_core::math::curve::SampledCurve;

use crate::error::{DegenerateInput, Warnings};

/// Break-even roots of `curve` against `target`, warning when there are none.
pub(crate) fn break_even(
    curve: &SampledCurve<f64>,
    name: &str,
    target: f64,
    warnings: &mut Warnings,
) -> Vec<f64> {
    if curve.is_flat() {
        warnings.push(DegenerateInput::FlatCurve {
            curve: name.to_string(),
        });
        return Vec::new();
    }

    let roots = find_crossings(curve, target);
    if roots.is_empty() {
        warnings.push(DegenerateInput::NoCrossing {
            curve: name.to_string(),
            target,
        });
    }
    roots
}

/// Clip `value` into `[min, max]`, warning when clipping changes it.
pub(crate) fn clip_to_display(
    quantity: &str,
    value: f64,
    min: f64,
    max: f64,
    warnings: &mut Warnings,
) -> f64 {
    let clipped = value.clamp(min, max);
    if clipped != value {
        warnings.push(DegenerateInput::OutOfDisplayRange {
            quantity: quantity.to_string(),
            value,
            min,
            max,
        });
    }
    clipped
}
