//! Error types for structured error handling.
//!
//! This module provides:
//! - `DomainError`: A parameter violates its mathematical precondition
//! - `CurveError`: Sampled data violates the `SampledCurve` invariants

use thiserror::Error;

/// Parameter domain errors.
///
/// Raised when an input falls outside the domain on which a formula is
/// real-valued and finite. Every variant names the offending parameter (or
/// the computed quantity) so the presentation layer can point at the
/// control that produced it.
///
/// # Variants
/// - `FractionalPowerOfNonPositive`: Non-positive base with a non-integer exponent
/// - `ZeroToNegativePower`: Zero base with a negative exponent (division by zero)
/// - `Negative`: Value must be non-negative
/// - `NonPositive`: Value must be strictly positive
/// - `NonFiniteInput`: Input is NaN or infinite
/// - `NonFinite`: A computed quantity overflowed or became NaN
///
/// # Examples
/// ```
/// use econ_core::types::DomainError;
///
/// let err = DomainError::negative("wage", -5.0);
/// assert_eq!(err.parameter(), Some("wage"));
/// assert_eq!(format!("{}", err), "Parameter `wage` = -5 must be non-negative");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// Non-positive base raised to a non-integer exponent.
    #[error(
        "Parameter `{parameter}` = {value} must be positive when raised to non-integer exponent {exponent}"
    )]
    FractionalPowerOfNonPositive {
        /// Name of the base parameter
        parameter: String,
        /// The offending base value
        value: f64,
        /// The exponent it was raised to
        exponent: f64,
    },

    /// Zero base raised to a negative exponent.
    #[error("Parameter `{parameter}` is zero but raised to negative exponent {exponent}")]
    ZeroToNegativePower {
        /// Name of the base parameter
        parameter: String,
        /// The exponent it was raised to
        exponent: f64,
    },

    /// Value must be non-negative.
    #[error("Parameter `{parameter}` = {value} must be non-negative")]
    Negative {
        /// Name of the parameter
        parameter: String,
        /// The offending value
        value: f64,
    },

    /// Value must be strictly positive.
    #[error("Parameter `{parameter}` = {value} must be strictly positive")]
    NonPositive {
        /// Name of the parameter
        parameter: String,
        /// The offending value
        value: f64,
    },

    /// Input is NaN or infinite.
    #[error("Parameter `{parameter}` is not finite: {value}")]
    NonFiniteInput {
        /// Name of the parameter
        parameter: String,
        /// The offending value
        value: f64,
    },

    /// A computed quantity is NaN or infinite.
    #[error("Computed `{quantity}` is not finite")]
    NonFinite {
        /// Name of the computed quantity
        quantity: String,
    },
}

impl DomainError {
    /// Create a `Negative` error.
    pub fn negative(parameter: impl Into<String>, value: f64) -> Self {
        Self::Negative {
            parameter: parameter.into(),
            value,
        }
    }

    /// Create a `NonPositive` error.
    pub fn non_positive(parameter: impl Into<String>, value: f64) -> Self {
        Self::NonPositive {
            parameter: parameter.into(),
            value,
        }
    }

    /// Create a `NonFiniteInput` error.
    pub fn non_finite_input(parameter: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteInput {
            parameter: parameter.into(),
            value,
        }
    }

    /// Create a `NonFinite` error for a computed quantity.
    pub fn non_finite(quantity: impl Into<String>) -> Self {
        Self::NonFinite {
            quantity: quantity.into(),
        }
    }

    /// Name of the offending parameter, if the error refers to an input.
    ///
    /// Returns `None` for [`DomainError::NonFinite`], which refers to a
    /// computed quantity rather than an input.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            DomainError::FractionalPowerOfNonPositive { parameter, .. }
            | DomainError::ZeroToNegativePower { parameter, .. }
            | DomainError::Negative { parameter, .. }
            | DomainError::NonPositive { parameter, .. }
            | DomainError::NonFiniteInput { parameter, .. } => Some(parameter),
            DomainError::NonFinite { .. } => None,
        }
    }
}

/// Sampled-curve errors.
///
/// # Variants
/// - `LengthMismatch`: x and y sequences differ in length
/// - `InsufficientData`: Too few points
/// - `NonIncreasing`: x values are not strictly increasing
/// - `NonFinite`: A coordinate is NaN or infinite
/// - `GridMismatch`: Curves that must share a grid do not
/// - `InvalidGrid`: Grid bounds are unusable
///
/// # Examples
/// ```
/// use econ_core::types::CurveError;
///
/// let err = CurveError::NonIncreasing { index: 3 };
/// assert!(format!("{}", err).contains("index 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveError {
    /// x and y sequences differ in length.
    #[error("xs and ys must have same length: got {xs} and {ys}")]
    LengthMismatch {
        /// Number of x values
        xs: usize,
        /// Number of y values
        ys: usize,
    },

    /// Too few points.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// x values are not strictly increasing.
    #[error("x values must be strictly increasing at index {index}")]
    NonIncreasing {
        /// Index of the first value that does not exceed its predecessor
        index: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("Non-finite value at index {index}")]
    NonFinite {
        /// Index of the offending point
        index: usize,
    },

    /// Curves that must share a grid do not.
    #[error("Curves do not share a grid: {0}")]
    GridMismatch(String),

    /// Grid bounds are unusable.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}
