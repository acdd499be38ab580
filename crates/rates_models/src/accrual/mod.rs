//! Day-weighted interest accrual on a fluctuating account balance.
//!
//! Interest accrues daily at `annual_rate / 365` on the balance held between
//! transactions and is credited once at month end. It does not compound into
//! the balance within the month.
//!
//! This module provides:
//! - [`Transactions`]: Dated cash flows, always iterated in ascending day order
//! - [`accrue_monthly_interest`] / [`MonthlyAccrual`]: One month of accrual
//! - [`accrue_statement`] / [`StatementMonth`]: Consecutive months, each opening
//!   on the previous month's closing balance
//!
//! # Examples
//!
//! ```
//! use rates_models::accrual::{accrue_monthly_interest, Transactions};
//!
//! let october = Transactions::new()
//!     .with(5, 17_000.0)
//!     .with(12, 35_000.0)
//!     .with(21, -55_000.0);
//!
//! let accrual = accrue_monthly_interest(100_000.0, &october, 31, 0.05).unwrap();
//! assert!((accrual.total_interest - 500.55).abs() < 0.01);
//! assert!((accrual.closing_balance - 97_500.55).abs() < 0.01);
//! ```

mod monthly;
mod statement;
mod transactions;

pub use monthly::{accrue_monthly_interest, MonthlyAccrual};
pub use statement::{accrue_statement, StatementMonth};
pub use transactions::Transactions;
