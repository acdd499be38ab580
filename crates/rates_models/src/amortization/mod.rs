//! Loan amortization schedules.
//!
//! This module provides:
//! - [`AmortizationMode`]: Equal principal or equal total payment (annuity)
//! - [`LoanTerms`]: Validated principal, rate, term, and payment frequency
//! - [`AmortizationSchedule`] / [`ScheduleRow`]: The period-by-period schedule
//! - [`build_schedule`]: One-call schedule generation
//! - [`annuity`]: Annuity payment, outstanding balance, and rate-reset repricing
//!
//! # Examples
//!
//! ```
//! use rates_models::amortization::{build_schedule, AmortizationMode};
//!
//! let schedule = build_schedule(10_000.0, 0.10, 1, 4, AmortizationMode::EqualPrincipal).unwrap();
//!
//! assert_eq!(schedule.len(), 4);
//! assert!((schedule.total_interest() - 625.0).abs() < 1e-9);
//! assert!(schedule.rows().iter().all(|row| (row.principal_payment - 2_500.0).abs() < 1e-9));
//! ```

pub mod annuity;
mod mode;
mod schedule;
mod terms;

pub use annuity::{annuity_payment, outstanding_balance, reprice_after_reset, RateReset};
pub use mode::AmortizationMode;
pub use schedule::{build_schedule, AmortizationSchedule, ScheduleRow};
pub use terms::{LoanTerms, MAX_PERIODS};
