//! Error types for structured error handling.
//!
//! This module provides:
//! - `RateError`: Precondition violations in rate, schedule, and accrual calculations
//! - `DateError`: Errors from calendar lookups

use thiserror::Error;

/// Categorised rate calculation errors.
///
/// Every calculation in the workspace validates its inputs up front and
/// reports the first violated precondition. There is no recovery path: an
/// invalid parameter is a configuration error on the caller's side.
///
/// # Examples
/// ```
/// use rates_core::types::RateError;
///
/// let err = RateError::invalid("periods_per_year", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter `periods_per_year`: must be positive, got 0"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// A parameter violated its documented precondition.
    #[error("Invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Human-readable description of the violation
        reason: String,
    },
}

impl RateError {
    /// Create an invalid parameter error.
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { parameter, .. } => parameter,
        }
    }

    /// Require a finite value.
    pub fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::invalid(parameter, format!("must be finite, got {}", value)))
        }
    }

    /// Require a finite, strictly positive value.
    pub fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::invalid(parameter, format!("must be positive, got {}", value)))
        }
    }

    /// Require a finite, non-negative value.
    pub fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::invalid(
                parameter,
                format!("must be non-negative, got {}", value),
            ))
        }
    }

    /// Require a non-zero count (periods, years, days).
    pub fn ensure_count(parameter: &'static str, value: u32) -> Result<u32, Self> {
        if value > 0 {
            Ok(value)
        } else {
            Err(Self::invalid(parameter, "must be positive, got 0"))
        }
    }
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use rates_core::types::DateError;
///
/// let err = DateError::InvalidMonth { year: 2024, month: 13 };
/// assert_eq!(format!("{}", err), "Invalid month: 2024-13");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Month outside 1..=12 or year outside the supported calendar range.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
    },

    /// Failed to parse a `YYYY-MM` month string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

impl From<DateError> for RateError {
    fn from(err: DateError) -> Self {
        RateError::invalid("month", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = RateError::invalid("principal", "must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `principal`: must be positive, got -1"
        );
        assert_eq!(err.parameter(), "principal");
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(RateError::ensure_positive("x", 1.5), Ok(1.5));
        assert!(RateError::ensure_positive("x", 0.0).is_err());
        assert!(RateError::ensure_positive("x", -2.0).is_err());
        assert!(RateError::ensure_positive("x", f64::NAN).is_err());
        assert!(RateError::ensure_positive("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(RateError::ensure_non_negative("x", 0.0), Ok(0.0));
        assert!(RateError::ensure_non_negative("x", -1e-12).is_err());
        assert!(RateError::ensure_non_negative("x", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_finite_accepts_negative() {
        assert_eq!(RateError::ensure_finite("amount", -55000.0), Ok(-55000.0));
        assert!(RateError::ensure_finite("amount", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_ensure_count() {
        assert_eq!(RateError::ensure_count("n", 4), Ok(4));
        let err = RateError::ensure_count("n", 0).unwrap_err();
        assert_eq!(err.parameter(), "n");
    }

    #[test]
    fn test_date_error_converts_to_rate_error() {
        let err: RateError = DateError::InvalidMonth {
            year: 2024,
            month: 0,
        }
        .into();
        assert_eq!(err.parameter(), "month");
        assert!(err.to_string().contains("2024-0"));
    }
}
