//! Multi-month statements.

use rates_core::types::{days_in_month, RateError};

use super::monthly::{accrue_monthly_interest, MonthlyAccrual};
use super::transactions::Transactions;

/// One month of a running account statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatementMonth {
    /// Display label, e.g. `"2023-10"` or `"October"`.
    pub label: String,
    /// Number of calendar days in the month.
    pub days_in_month: u32,
    /// The month's transactions.
    pub transactions: Transactions,
}

impl StatementMonth {
    /// Month with an explicit day count.
    pub fn new(label: impl Into<String>, days_in_month: u32, transactions: Transactions) -> Self {
        Self {
            label: label.into(),
            days_in_month,
            transactions,
        }
    }

    /// Calendar month, labelled `YYYY-MM`, with its day count taken from the
    /// Gregorian calendar.
    ///
    /// # Errors
    ///
    /// `RateError::InvalidParameter` when `month` is not in `1..=12`.
    pub fn for_month(year: i32, month: u32, transactions: Transactions) -> Result<Self, RateError> {
        let days = days_in_month(year, month)?;
        Ok(Self::new(format!("{:04}-{:02}", year, month), days, transactions))
    }
}

/// Accrue consecutive months, each opening on the previous month's closing
/// balance (interest included).
///
/// The first month opens on `start_balance`. An empty slice yields an empty
/// statement.
///
/// # Errors
///
/// Propagates the first error from [`accrue_monthly_interest`].
///
/// # Examples
///
/// ```
/// use rates_models::accrual::{accrue_statement, StatementMonth, Transactions};
///
/// let months = [
///     StatementMonth::new(
///         "October",
///         31,
///         Transactions::new().with(5, 17_000.0).with(12, 35_000.0).with(21, -55_000.0),
///     ),
///     StatementMonth::new(
///         "November",
///         30,
///         Transactions::new().with(9, -25_000.0).with(30, 100_000.0),
///     ),
/// ];
///
/// let statement = accrue_statement(100_000.0, &months, 0.05).unwrap();
/// assert_eq!(statement[1].start_balance, statement[0].closing_balance);
/// assert!((statement[1].total_interest - 339.04).abs() < 0.01);
/// ```
pub fn accrue_statement(
    start_balance: f64,
    months: &[StatementMonth],
    annual_rate: f64,
) -> Result<Vec<MonthlyAccrual>, RateError> {
    let mut balance = start_balance;
    let mut accruals = Vec::with_capacity(months.len());
    for month in months {
        let accrual =
            accrue_monthly_interest(balance, &month.transactions, month.days_in_month, annual_rate)?;
        balance = accrual.closing_balance;
        accruals.push(accrual);
    }
    Ok(accruals)
}
