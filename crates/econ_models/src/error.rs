//! Error types for model evaluation.
//!
//! This module provides:
//! - `ModelError`: Fatal errors from model and page evaluation
//! - `DegenerateInput`: Non-fatal warnings attached to page outputs

use econ_core::types::{CurveError, DomainError};
use std::fmt;
use thiserror::Error;

/// Model evaluation errors.
///
/// # Variants
/// - `Domain`: A parameter violates its mathematical precondition
/// - `Curve`: A grid or sampled curve is malformed
/// - `EmptyFamily`: A technique family has no techniques
/// - `InvalidParameter`: A parameter is outside the range a model accepts
///
/// # Examples
/// ```
/// use econ_core::types::DomainError;
/// use econ_models::error::ModelError;
///
/// let err: ModelError = DomainError::negative("wage", -1.0).into();
/// assert_eq!(err.parameter(), Some("wage"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A parameter violates its mathematical precondition.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A grid or sampled curve is malformed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// A technique family has no techniques.
    #[error("Technique family must contain at least one technique")]
    EmptyFamily,

    /// A parameter is outside the range a model accepts.
    #[error("Invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the parameter
        parameter: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ModelError {
    /// Create an `InvalidParameter` error.
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, when the error refers to one.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ModelError::Domain(err) => err.parameter(),
            ModelError::InvalidParameter { parameter, .. } => Some(parameter),
            ModelError::Curve(_) | ModelError::EmptyFamily => None,
        }
    }
}

/// Result alias for model evaluation.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Non-fatal degenerate-input report.
///
/// Parameter choices that leave a result meaningless for display (no
/// break-even point, a flat curve, a grid that had to be widened) are not
/// errors: the affected result is empty and one of these is attached to
/// the page output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DegenerateInput {
    /// The curve never crosses the target level.
    NoCrossing {
        /// Name of the curve
        curve: String,
        /// Target level
        target: f64,
    },

    /// The curve is constant over the whole grid.
    FlatCurve {
        /// Name of the curve
        curve: String,
    },

    /// The requested grid upper bound was too small and has been raised.
    GridClamped {
        /// Axis name
        axis: String,
        /// Requested upper bound
        requested_max: f64,
        /// Upper bound actually used
        used_max: f64,
    },

    /// A value falls outside the displayed range and has been clipped.
    OutOfDisplayRange {
        /// Name of the quantity
        quantity: String,
        /// Unclipped value
        value: f64,
        /// Lower display bound
        min: f64,
        /// Upper display bound
        max: f64,
    },

    /// A derived quantity is undefined for these parameters and was skipped.
    Undefined {
        /// Name of the quantity
        quantity: String,
        /// Why it is undefined
        reason: String,
    },
}

impl fmt::Display for DegenerateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateInput::NoCrossing { curve, target } => {
                write!(f, "{} never crosses {}", curve, target)
            }
            DegenerateInput::FlatCurve { curve } => write!(f, "{} is flat", curve),
            DegenerateInput::GridClamped {
                axis,
                requested_max,
                used_max,
            } => write!(
                f,
                "{} grid upper bound raised from {} to {}",
                axis, requested_max, used_max
            ),
            DegenerateInput::OutOfDisplayRange {
                quantity,
                value,
                min,
                max,
            } => write!(
                f,
                "{} = {} clipped to display range [{}, {}]",
                quantity, value, min, max
            ),
            DegenerateInput::Undefined { quantity, reason } => {
                write!(f, "{} undefined: {}", quantity, reason)
            }
        }
    }
}

/// Collects degenerate-input warnings for one page evaluation.
#[derive(Debug, Default)]
pub(crate) struct Warnings {
    page: &'static str,
    items: Vec<DegenerateInput>,
}

impl Warnings {
    pub(crate) fn new(page: &'static str) -> Self {
        Self {
            page,
            items: Vec::new(),
        }
    }

    /// Log and record a warning.
    pub(crate) fn push(&mut self, warning: DegenerateInput) {
        tracing::warn!(page = self.page, %warning, "degenerate input");
        self.items.push(warning);
    }

    pub(crate) fn into_vec(self) -> Vec<DegenerateInput> {
        self.items
    }
}
