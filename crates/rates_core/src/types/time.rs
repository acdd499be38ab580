//! Calendar helpers for day-weighted accrual.
//!
//! # Examples
//!
//! ```
//! use rates_core::types::time::{days_in_month, parse_year_month};
//!
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//! assert_eq!(days_in_month(2023, 2).unwrap(), 28);
//!
//! let (year, month) = parse_year_month("2024-10").unwrap();
//! assert_eq!(days_in_month(year, month).unwrap(), 31);
//! ```

use chrono::{Datelike, NaiveDate};

use super::error::DateError;

/// Fixed day basis used to derive a daily rate from an annual one (ACT/365 Fixed).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Longest calendar month.
pub const MAX_DAYS_IN_MONTH: u32 = 31;

/// Number of days in the given calendar month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    let invalid = || DateError::InvalidMonth { year, month };

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;

    Ok((next - first).num_days() as u32)
}

/// Parse a `YYYY-MM` month label into `(year, month)`.
pub fn parse_year_month(s: &str) -> Result<(i32, u32), DateError> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))?;
    Ok((date.year(), date.month()))
}
