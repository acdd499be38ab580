//! Doubling time under each compounding convention.
//!
//! Solving `A/P = 2` for `t` at nominal annual rate `R`:
//! - Simple: `1 + R·t = 2` gives `t = 1/R`
//! - Periodic: `(1 + R/n)^(n·t) = 2` gives `t = ln 2 / (n · ln(1 + R/n))`
//! - Continuous: `e^(R·t) = 2` gives `t = ln 2 / R`
//!
//! # Examples
//!
//! ```
//! use rates_core::math::doubling::doubling_time;
//! use rates_core::types::Compounding;
//!
//! let t = doubling_time(0.05, Compounding::Continuous).unwrap();
//! assert!((t - 13.862944).abs() < 1e-6);
//! ```

use std::f64::consts::LN_2;

use crate::types::{Compounding, RateError};

/// Years for money to double at `rate` under the given convention.
pub fn doubling_time(rate: f64, compounding: Compounding) -> Result<f64, RateError> {
    match compounding {
        Compounding::Simple => doubling_time_simple(rate),
        Compounding::Periodic { periods_per_year } => {
            doubling_time_compound(rate, periods_per_year)
        }
        Compounding::Continuous => doubling_time_continuous(rate),
    }
}

/// Doubling time with simple interest: `t = 1/R`.
pub fn doubling_time_simple(rate: f64) -> Result<f64, RateError> {
    let rate = RateError::ensure_positive("rate", rate)?;
    Ok(1.0 / rate)
}

/// Doubling time compounding `n` times per year: `t = ln 2 / (n · ln(1 + R/n))`.
pub fn doubling_time_compound(rate: f64, n: u32) -> Result<f64, RateError> {
    let rate = RateError::ensure_positive("rate", rate)?;
    let n = RateError::ensure_count("periods_per_year", n)? as f64;
    Ok(LN_2 / (n * (rate / n).ln_1p()))
}

/// Doubling time with continuous compounding: `t = ln 2 / R`.
pub fn doubling_time_continuous(rate: f64) -> Result<f64, RateError> {
    let rate = RateError::ensure_positive("rate", rate)?;
    Ok(LN_2 / rate)
}
