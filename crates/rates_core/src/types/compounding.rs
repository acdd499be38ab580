//! Compounding conventions.
//!
//! A nominal annual rate `r` grows one unit of money over `t` years as:
//! - `Simple`: `1 + r·t`
//! - `Periodic { n }`: `(1 + r/n)^(n·t)`
//! - `Continuous`: `e^(r·t)`

use std::fmt;

use super::error::RateError;
use super::frequency::Frequency;

/// How interest is credited over time.
///
/// # Examples
///
/// ```
/// use rates_core::types::{Compounding, Frequency};
///
/// let quarterly = Compounding::from(Frequency::Quarterly);
/// assert_eq!(quarterly, Compounding::Periodic { periods_per_year: 4 });
///
/// let factor = quarterly.growth_factor(0.10, 1.0).unwrap();
/// assert!((factor - 1.025_f64.powi(4)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum Compounding {
    /// No compounding: interest accrues on the original principal only.
    Simple,
    /// Discrete compounding `periods_per_year` times per year.
    Periodic {
        /// Compounding periods per year (must be positive)
        periods_per_year: u32,
    },
    /// Continuous compounding.
    Continuous,
}

impl Compounding {
    /// Validate the convention's parameters.
    pub fn validate(&self) -> Result<(), RateError> {
        if let Compounding::Periodic { periods_per_year } = self {
            RateError::ensure_count("periods_per_year", *periods_per_year)?;
        }
        Ok(())
    }

    /// Compounding periods per year, `None` for simple and continuous.
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Periodic { periods_per_year } => Some(*periods_per_year),
            Compounding::Simple | Compounding::Continuous => None,
        }
    }

    /// Growth of one unit of money over `years` at nominal annual `rate`.
    pub fn growth_factor(&self, rate: f64, years: f64) -> Result<f64, RateError> {
        self.validate()?;
        RateError::ensure_finite("rate", rate)?;
        RateError::ensure_finite("years", years)?;

        Ok(match self {
            Compounding::Simple => 1.0 + rate * years,
            Compounding::Periodic { periods_per_year } => {
                let n = *periods_per_year as f64;
                (1.0 + rate / n).powf(n * years)
            }
            Compounding::Continuous => (rate * years).exp(),
        })
    }
}

impl From<Frequency> for Compounding {
    fn from(frequency: Frequency) -> Self {
        Compounding::Periodic {
            periods_per_year: frequency.periods_per_year(),
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Simple => write!(f, "Simple"),
            Compounding::Periodic { periods_per_year } => {
                match Frequency::from_periods_per_year(*periods_per_year) {
                    Some(freq) => write!(f, "{} (n={})", freq, periods_per_year),
                    None => write!(f, "Periodic (n={})", periods_per_year),
                }
            }
            Compounding::Continuous => write!(f, "Continuous"),
        }
    }
}
