//! Annuity (level payment) formulas.
//!
//! The instalment `A` that repays principal `P` over `N` periods at periodic
//! rate `r` solves the present value of an annuity-immediate:
//!
//! ```text
//! P = A · (1 - (1 + r)^(-N)) / r      =>      A = P · r / (1 - (1 + r)^(-N))
//! ```
//!
//! After `k` instalments the outstanding balance is
//!
//! ```text
//! B_k = P · (1 + r)^k - A · ((1 + r)^k - 1) / r
//! ```
//!
//! With `r = 0` both degenerate to straight-line repayment.

use rates_core::types::RateError;

use super::terms::LoanTerms;

/// Level instalment repaying `principal` over `periods` at `periodic_rate`.
///
/// # Examples
///
/// ```
/// use rates_models::amortization::annuity_payment;
///
/// let payment = annuity_payment(10_000.0, 0.025, 4).unwrap();
/// assert!((payment - 2_658.18).abs() < 0.01);
///
/// // Zero rate falls back to principal / N
/// assert_eq!(annuity_payment(1_200.0, 0.0, 12).unwrap(), 100.0);
/// ```
pub fn annuity_payment(principal: f64, periodic_rate: f64, periods: u32) -> Result<f64, RateError> {
    let principal = RateError::ensure_non_negative("principal", principal)?;
    let periodic_rate = RateError::ensure_non_negative("periodic_rate", periodic_rate)?;
    let n = RateError::ensure_count("periods", periods)? as f64;

    if periodic_rate > 0.0 {
        // 1 - (1 + r)^(-N), without cancellation for tiny r
        let discount = -(-n * periodic_rate.ln_1p()).exp_m1();
        Ok(principal * periodic_rate / discount)
    } else {
        Ok(principal / n)
    }
}

/// Balance still owed after `paid` level instalments of `payment`.
///
/// # Examples
///
/// ```
/// use rates_models::amortization::{annuity_payment, outstanding_balance};
///
/// let r = 0.055 / 12.0;
/// let payment = annuity_payment(500_000.0, r, 360).unwrap();
/// let balance = outstanding_balance(500_000.0, r, payment, 3).unwrap();
/// assert!((balance - 498_350.63).abs() < 0.01);
///
/// // Fully repaid at maturity
/// let closing = outstanding_balance(500_000.0, r, payment, 360).unwrap();
/// assert!(closing.abs() < 1e-6);
/// ```
pub fn outstanding_balance(
    principal: f64,
    periodic_rate: f64,
    payment: f64,
    paid: u32,
) -> Result<f64, RateError> {
    let principal = RateError::ensure_non_negative("principal", principal)?;
    let periodic_rate = RateError::ensure_non_negative("periodic_rate", periodic_rate)?;
    let payment = RateError::ensure_non_negative("payment", payment)?;
    let k = paid as f64;

    if periodic_rate > 0.0 {
        let accrued = (k * periodic_rate.ln_1p()).exp_m1();
        Ok(principal * (1.0 + accrued) - payment * accrued / periodic_rate)
    } else {
        Ok(principal - payment * k)
    }
}

/// Result of repricing an annuity loan after its rate resets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RateReset {
    /// Instalment under the initial rate.
    pub initial_payment: f64,
    /// Instalments paid before the reset.
    pub paid_periods: u32,
    /// Balance outstanding when the new rate takes effect.
    pub balance_at_reset: f64,
    /// Instalments left after the reset.
    pub remaining_periods: u32,
    /// Nominal annual rate after the reset.
    pub reset_annual_rate: f64,
    /// Level instalment over the remaining term at the new rate.
    pub reset_payment: f64,
}

impl RateReset {
    /// Change in the instalment caused by the reset (negative when it falls).
    #[inline]
    pub fn payment_change(&self) -> f64 {
        self.reset_payment - self.initial_payment
    }
}

/// Reprice an annuity loan whose nominal rate changes after `paid_periods`
/// instalments, keeping the original maturity.
///
/// # Errors
///
/// `RateError::InvalidParameter` when the reset rate is negative or when no
/// instalments would remain after the reset.
///
/// # Examples
///
/// ```
/// use rates_models::amortization::{reprice_after_reset, LoanTerms};
///
/// // 500k over 30 years at WIBOR 4.5% + 1% margin, WIBOR drops to 4% after 3 months
/// let terms = LoanTerms::new(500_000.0, 0.055, 30, 12).unwrap();
/// let reset = reprice_after_reset(&terms, 0.05, 3).unwrap();
///
/// assert!((reset.initial_payment - 2_838.95).abs() < 0.01);
/// assert!((reset.balance_at_reset - 498_350.63).abs() < 0.01);
/// assert!((reset.reset_payment - 2_684.97).abs() < 0.01);
/// assert_eq!(reset.remaining_periods, 357);
/// ```
pub fn reprice_after_reset(
    terms: &LoanTerms,
    reset_annual_rate: f64,
    paid_periods: u32,
) -> Result<RateReset, RateError> {
    let reset_annual_rate = RateError::ensure_non_negative("reset_annual_rate", reset_annual_rate)?;
    let total_periods = terms.total_periods();
    if paid_periods >= total_periods {
        return Err(RateError::invalid(
            "paid_periods",
            format!(
                "must leave at least one instalment, got {} of {}",
                paid_periods, total_periods
            ),
        ));
    }

    let initial_rate = terms.periodic_rate();
    let initial_payment = annuity_payment(terms.principal(), initial_rate, total_periods)?;
    let balance_at_reset =
        outstanding_balance(terms.principal(), initial_rate, initial_payment, paid_periods)?;

    let remaining_periods = total_periods - paid_periods;
    let reset_rate = reset_annual_rate / terms.periods_per_year() as f64;
    let reset_payment = annuity_payment(balance_at_reset, reset_rate, remaining_periods)?;

    Ok(RateReset {
        initial_payment,
        paid_periods,
        balance_at_reset,
        remaining_periods,
        reset_annual_rate,
        reset_payment,
    })
}
