//! Validated loan terms.

use rates_core::types::{Frequency, RateError};

/// Largest instalment count accepted by [`LoanTerms::new`].
///
/// Covers over two thousand years of daily payments while keeping a
/// generated schedule within a few tens of megabytes.
pub const MAX_PERIODS: u32 = 1_000_000;

/// Principal, rate, term, and payment frequency of a loan.
///
/// Construction validates every field, so downstream schedule generation
/// never sees a zero period count or a negative rate.
///
/// # Examples
///
/// ```
/// use rates_models::amortization::LoanTerms;
///
/// let terms = LoanTerms::new(10_000.0, 0.10, 1, 4).unwrap();
/// assert_eq!(terms.total_periods(), 4);
/// assert!((terms.periodic_rate() - 0.025).abs() < 1e-15);
///
/// assert!(LoanTerms::new(10_000.0, 0.10, 1, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoanTerms {
    principal: f64,
    nominal_annual_rate: f64,
    term_years: u32,
    periods_per_year: u32,
    total_periods: u32,
}

impl LoanTerms {
    /// Validate and bundle loan terms.
    ///
    /// # Errors
    ///
    /// `RateError::InvalidParameter` when the principal is not positive, the
    /// rate is negative, the term or frequency is zero, or the total
    /// instalment count exceeds [`MAX_PERIODS`].
    pub fn new(
        principal: f64,
        nominal_annual_rate: f64,
        term_years: u32,
        periods_per_year: u32,
    ) -> Result<Self, RateError> {
        let principal = RateError::ensure_positive("principal", principal)?;
        let nominal_annual_rate =
            RateError::ensure_non_negative("nominal_annual_rate", nominal_annual_rate)?;
        let term_years = RateError::ensure_count("term_years", term_years)?;
        let periods_per_year = RateError::ensure_count("periods_per_year", periods_per_year)?;
        let total_periods = term_years
            .checked_mul(periods_per_year)
            .filter(|&n| n <= MAX_PERIODS)
            .ok_or_else(|| {
                RateError::invalid(
                    "term_years",
                    format!(
                        "{} years at {} periods per year exceeds {} instalments",
                        term_years, periods_per_year, MAX_PERIODS
                    ),
                )
            })?;

        Ok(Self {
            principal,
            nominal_annual_rate,
            term_years,
            periods_per_year,
            total_periods,
        })
    }

    /// Loan terms with payments at a named frequency.
    pub fn with_frequency(
        principal: f64,
        nominal_annual_rate: f64,
        term_years: u32,
        frequency: Frequency,
    ) -> Result<Self, RateError> {
        Self::new(
            principal,
            nominal_annual_rate,
            term_years,
            frequency.periods_per_year(),
        )
    }

    /// Amount borrowed.
    #[inline]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Nominal annual rate.
    #[inline]
    pub fn nominal_annual_rate(&self) -> f64 {
        self.nominal_annual_rate
    }

    /// Loan term in years.
    #[inline]
    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    /// Instalments per year.
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        self.periods_per_year
    }

    /// Total number of instalments, `term_years * periods_per_year`.
    #[inline]
    pub fn total_periods(&self) -> u32 {
        self.total_periods
    }

    /// Rate applied per period, `nominal_annual_rate / periods_per_year`.
    #[inline]
    pub fn periodic_rate(&self) -> f64 {
        self.nominal_annual_rate / self.periods_per_year as f64
    }
}
