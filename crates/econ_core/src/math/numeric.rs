//! Numeric-safety helpers.
//!
//! Formulas in the model layer are closed-form arithmetic, but the inputs
//! come from interactive controls and the grids often start at zero. The
//! helpers here convert every arithmetic failure mode (fractional power of
//! a non-positive base, division by zero, overflow) into a [`DomainError`]
//! at the function boundary, or apply one of the two explicit degenerate
//! policies:
//!
//! - [`floored_divide`]: divide by `max(den, ε)`
//! - [`divide_or_zero`]: return zero when the denominator is exactly zero
//!
//! All functions are generic over `T: num_traits::Float`.

use crate::types::DomainError;
use num_traits::Float;

/// Default denominator floor used by [`floored_divide`].
///
/// A numeric-safety constant, not a modelling assumption: it keeps average
/// and marginal cost finite and monotonic as output approaches zero.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Default tolerance used when comparing an elasticity sum against one.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Converts an `f64` constant into `T`.
///
/// Infallible for the primitive float types; any other `Float` that cannot
/// represent the value yields NaN, which the finiteness checks reject.
#[inline]
pub fn from_f64<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Converts `T` into `f64` for error reporting.
#[inline]
pub fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Returns true if `value` has no fractional part.
#[inline]
pub fn is_integer<T: Float>(value: T) -> bool {
    value.is_finite() && value == value.trunc()
}

/// Rejects NaN and infinite inputs.
///
/// # Examples
/// ```
/// use econ_core::math::numeric::require_finite;
///
/// assert_eq!(require_finite(2.0_f64, "price").unwrap(), 2.0);
/// assert!(require_finite(f64::INFINITY, "price").is_err());
/// ```
#[inline]
pub fn require_finite<T: Float>(value: T, parameter: &str) -> Result<T, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::non_finite_input(parameter, to_f64(value)))
    }
}

/// Requires a finite, non-negative input.
#[inline]
pub fn require_non_negative<T: Float>(value: T, parameter: &str) -> Result<T, DomainError> {
    let value = require_finite(value, parameter)?;
    if value < T::zero() {
        return Err(DomainError::negative(parameter, to_f64(value)));
    }
    Ok(value)
}

/// Requires a finite, strictly positive input.
#[inline]
pub fn require_positive<T: Float>(value: T, parameter: &str) -> Result<T, DomainError> {
    let value = require_finite(value, parameter)?;
    if value <= T::zero() {
        return Err(DomainError::non_positive(parameter, to_f64(value)));
    }
    Ok(value)
}

/// Checks that a computed quantity is finite.
#[inline]
pub fn ensure_finite<T: Float>(value: T, quantity: &str) -> Result<T, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::non_finite(quantity))
    }
}

/// Raises `base` to `exponent`, rejecting inputs that are not real-valued.
///
/// # Domain
///
/// - `base <= 0` with a non-integer exponent is rejected
///   ([`DomainError::FractionalPowerOfNonPositive`])
/// - `base == 0` with a negative exponent is rejected
///   ([`DomainError::ZeroToNegativePower`])
/// - Negative bases with integer exponents are accepted (`(-2)^3 = -8`)
/// - `0^0` is `1`
///
/// # Errors
///
/// Also returns [`DomainError::NonFiniteInput`] for NaN/infinite inputs and
/// [`DomainError::NonFinite`] if the power overflows.
///
/// # Examples
/// ```
/// use econ_core::math::numeric::checked_powf;
///
/// assert!((checked_powf(4.0_f64, 0.5, "labor").unwrap() - 2.0).abs() < 1e-12);
/// assert_eq!(checked_powf(-2.0_f64, 3.0, "labor").unwrap(), -8.0);
/// assert!(checked_powf(0.0_f64, 0.5, "labor").is_err());
/// ```
pub fn checked_powf<T: Float>(base: T, exponent: T, parameter: &str) -> Result<T, DomainError> {
    let base = require_finite(base, parameter)?;
    let exponent = require_finite(exponent, "exponent")?;
    let integral = is_integer(exponent);

    if base <= T::zero() && !integral {
        return Err(DomainError::FractionalPowerOfNonPositive {
            parameter: parameter.to_string(),
            value: to_f64(base),
            exponent: to_f64(exponent),
        });
    }

    if base == T::zero() && exponent < T::zero() {
        return Err(DomainError::ZeroToNegativePower {
            parameter: parameter.to_string(),
            exponent: to_f64(exponent),
        });
    }

    let value = base.powf(exponent);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::non_finite(format!("{}^{}", parameter, to_f64(exponent))))
    }
}

/// Divides by `max(denominator, epsilon)`.
///
/// Used where the result must stay finite and monotonic as the denominator
/// approaches zero (average cost, marginal cost). `epsilon` must be
/// positive.
///
/// # Examples
/// ```
/// use econ_core::math::numeric::floored_divide;
///
/// assert_eq!(floored_divide(10.0_f64, 2.0, 1e-9), 5.0);
/// assert_eq!(floored_divide(1.0_f64, 0.0, 1e-3), 1000.0);
/// ```
#[inline]
pub fn floored_divide<T: Float>(numerator: T, denominator: T, epsilon: T) -> T {
    numerator / denominator.max(epsilon)
}

/// Divides, returning zero when the denominator is exactly zero.
///
/// # Examples
/// ```
/// use econ_core::math::numeric::divide_or_zero;
///
/// assert_eq!(divide_or_zero(10.0_f64, 4.0), 2.5);
/// assert_eq!(divide_or_zero(10.0_f64, 0.0), 0.0);
/// ```
#[inline]
pub fn divide_or_zero<T: Float>(numerator: T, denominator: T) -> T {
    if denominator == T::zero() {
        T::zero()
    } else {
        numerator / denominator
    }
}
