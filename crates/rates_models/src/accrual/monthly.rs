//! Single-month accrual.

use rates_core::types::{RateError, DAYS_PER_YEAR, MAX_DAYS_IN_MONTH};

use super::transactions::Transactions;

/// Outcome of one month of accrual.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthlyAccrual {
    /// Balance at the start of the month.
    pub start_balance: f64,
    /// Sum of the month's transaction amounts.
    pub net_flow: f64,
    /// Interest accrued over the month, credited at month end.
    pub total_interest: f64,
    /// `start_balance + net_flow + total_interest`.
    pub closing_balance: f64,
}

/// Accrue one month of simple daily interest on a fluctuating balance.
///
/// The daily rate is `annual_rate / 365`. Transactions are walked in ascending
/// day order followed by a zero-amount sentinel on `days_in_month + 1`. For
/// each entry the balance held since the last processed day earns interest for
/// `(day - 1) - processed_through` days; the amount is then applied and the
/// cursor moves to `day - 1`. A transaction on day 1 therefore earns nothing
/// beforehand, while one on the last day still accrues for every earlier day.
///
/// # Errors
///
/// `RateError::InvalidParameter` when `days_in_month` is outside `1..=31`, a transaction day
/// falls outside the month, or any amount, balance, or rate is not finite.
pub fn accrue_monthly_interest(
    start_balance: f64,
    transactions: &Transactions,
    days_in_month: u32,
    annual_rate: f64,
) -> Result<MonthlyAccrual, RateError> {
    let start_balance = RateError::ensure_finite("start_balance", start_balance)?;
    let annual_rate = RateError::ensure_finite("annual_rate", annual_rate)?;
    let days_in_month = RateError::ensure_count("days_in_month", days_in_month)?;
    if days_in_month > MAX_DAYS_IN_MONTH {
        return Err(RateError::invalid(
            "days_in_month",
            format!("{} exceeds {} days", days_in_month, MAX_DAYS_IN_MONTH),
        ));
    }
    transactions.validate(days_in_month)?;

    let daily_rate = annual_rate / DAYS_PER_YEAR;
    let mut total_interest = 0.0;
    let mut balance = start_balance;
    let mut processed_through = 0;

    for (day, amount) in transactions.with_month_end_sentinel(days_in_month) {
        let num_days = (day - 1) - processed_through;
        if num_days > 0 {
            total_interest += balance * daily_rate * num_days as f64;
        }
        balance += amount;
        processed_through = day - 1;
    }

    Ok(MonthlyAccrual {
        start_balance,
        net_flow: transactions.net_flow(),
        total_interest,
        closing_balance: balance + total_interest,
    })
}
