//! Core rate, calendar, and error types.
//!
//! This module provides:
//! - `error`: Structured error types for parameter validation and calendar lookups
//! - `frequency`: Compounding/payment frequency enumeration
//! - `compounding`: Simple, periodic, and continuous compounding conventions
//! - `time`: Calendar helpers used by day-weighted accrual
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`RateError`], [`DateError`] from `error`
//! - [`Frequency`] from `frequency`
//! - [`Compounding`] from `compounding`
//! - [`days_in_month`], [`DAYS_PER_YEAR`] from `time`

pub mod compounding;
pub mod error;
pub mod frequency;
pub mod time;

pub use compounding::Compounding;
pub use error::{DateError, RateError};
pub use frequency::Frequency;
pub use time::{days_in_month, DAYS_PER_YEAR, MAX_DAYS_IN_MONTH};
