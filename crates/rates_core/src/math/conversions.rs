//! Nominal, effective, and continuous rate equivalences.
//!
//! All conversions solve the same identity for different unknowns:
//!
//! ```text
//! (1 + y) = (1 + r/n)^n = (1 + y_p)^n = e^(r_c)
//! ```
//!
//! where `y` is the effective annual rate (EAR), `r` the nominal annual rate
//! compounded `n` times per year, `y_p` the effective periodic rate, and
//! `r_c` the continuously compounded rate.
//!
//! # Examples
//!
//! ```
//! use rates_core::math::conversions::*;
//!
//! // Nominal rate, compounded monthly, that keeps pace with 10% inflation
//! let r = nominal_rate_for_effective(0.10_f64, 12).unwrap();
//! assert!((r - 0.0956897).abs() < 1e-7);
//!
//! // Monthly rate equivalent to 5% effective per year
//! let y_m = equivalent_periodic_rate(0.05_f64, 12).unwrap();
//! assert!((y_m - 0.00407412).abs() < 1e-8);
//! ```

use num_traits::NumCast;

use crate::traits::Float;
use crate::types::RateError;

fn periods<T: Float>(n: u32) -> Result<T, RateError> {
    RateError::ensure_count("periods_per_year", n)?;
    <T as NumCast>::from(n)
        .ok_or_else(|| RateError::invalid("periods_per_year", "not representable"))
}

fn growth_base<T: Float>(effective: T) -> Result<T, RateError> {
    let base = T::one() + effective;
    if !effective.is_finite() || base <= T::zero() {
        return Err(RateError::invalid(
            "effective_rate",
            "must be finite and greater than -100%",
        ));
    }
    Ok(base)
}

/// Effective annual rate of a nominal rate compounded `n` times per year.
///
/// `y = (1 + r/n)^n - 1`
pub fn effective_annual_rate<T: Float>(nominal: T, n: u32) -> Result<T, RateError> {
    let n = periods::<T>(n)?;
    if !nominal.is_finite() {
        return Err(RateError::invalid("nominal_rate", "must be finite"));
    }
    Ok((T::one() + nominal / n).powf(n) - T::one())
}

/// Nominal annual rate, compounded `n` times per year, whose effective annual
/// rate equals `effective`.
///
/// `r = n · ((1 + y)^(1/n) - 1)`
pub fn nominal_rate_for_effective<T: Float>(effective: T, n: u32) -> Result<T, RateError> {
    let n = periods::<T>(n)?;
    let base = growth_base(effective)?;
    Ok(n * (base.powf(n.recip()) - T::one()))
}

/// Effective periodic rate equivalent to an effective annual rate.
///
/// `y_p = (1 + y)^(1/n) - 1`
pub fn equivalent_periodic_rate<T: Float>(effective: T, n: u32) -> Result<T, RateError> {
    let n = periods::<T>(n)?;
    let base = growth_base(effective)?;
    Ok(base.powf(n.recip()) - T::one())
}

/// Continuously compounded rate equivalent to an effective annual rate.
///
/// `r_c = ln(1 + y)`
pub fn continuous_rate_for_effective<T: Float>(effective: T) -> Result<T, RateError> {
    Ok(growth_base(effective)?.ln())
}

/// Effective annual rate of a continuously compounded rate.
///
/// `y = e^(r_c) - 1`
pub fn effective_rate_for_continuous<T: Float>(continuous: T) -> Result<T, RateError> {
    if !continuous.is_finite() {
        return Err(RateError::invalid("continuous_rate", "must be finite"));
    }
    Ok(continuous.exp_m1())
}
