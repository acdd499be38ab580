//! Periodic savings plans.
//!
//! Find the level contribution `a`, paid at the start of each of
//! `N = years * payments_per_year` periods, that accumulates to a target
//! future value at the end of period `N`. The periodic rate is
//! `annual_rate / payments_per_year`.
//!
//! - Simple interest: contribution `k` (1-based, counted from the end) earns
//!   `k` periods of non-compounding interest, so
//!   `FV = a · (N + r_p · N(N+1)/2)`.
//! - Compound interest: each contribution compounds until the horizon, so
//!   `FV = a · Σ_{i=1..N} (1 + r_p)^i`.

use rates_core::types::RateError;

/// Validated periodic savings problem.
///
/// # Examples
///
/// ```
/// use rates_models::savings::SavingsPlan;
///
/// let plan = SavingsPlan::new(10_000.0, 2, 0.05, 4).unwrap();
/// assert!((plan.simple_contribution() - 1_183.43).abs() < 0.01);
/// assert!((plan.compound_contribution() - 1_181.56).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SavingsPlan {
    target: f64,
    years: u32,
    annual_rate: f64,
    payments_per_year: u32,
}

impl SavingsPlan {
    /// Create a plan.
    ///
    /// # Errors
    ///
    /// `RateError::InvalidParameter` when `target <= 0`, `annual_rate < 0`,
    /// `years == 0`, `payments_per_year == 0`, or the contribution count
    /// overflows `u32`.
    pub fn new(
        target: f64,
        years: u32,
        annual_rate: f64,
        payments_per_year: u32,
    ) -> Result<Self, RateError> {
        let target = RateError::ensure_positive("future_value", target)?;
        let annual_rate = RateError::ensure_non_negative("annual_rate", annual_rate)?;
        let years = RateError::ensure_count("years", years)?;
        let payments_per_year = RateError::ensure_count("payments_per_year", payments_per_year)?;
        if years.checked_mul(payments_per_year).is_none() {
            return Err(RateError::invalid(
                "payments_per_year",
                format!("{} years x {} payments overflows", years, payments_per_year),
            ));
        }
        Ok(Self {
            target,
            years,
            annual_rate,
            payments_per_year,
        })
    }

    /// Target future value.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Saving horizon in years.
    #[inline]
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Nominal annual rate.
    #[inline]
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// Contributions per year.
    #[inline]
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// Total number of contributions.
    #[inline]
    pub fn total_payments(&self) -> u32 {
        self.years * self.payments_per_year
    }

    /// Rate per contribution period.
    #[inline]
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate / self.payments_per_year as f64
    }

    /// Level contribution under simple interest.
    pub fn simple_contribution(&self) -> f64 {
        let n = self.total_payments() as f64;
        let triangular = n * (n + 1.0) / 2.0;
        self.target / (n + triangular * self.periodic_rate())
    }

    /// Level contribution under compound interest.
    pub fn compound_contribution(&self) -> f64 {
        let growth = 1.0 + self.periodic_rate();
        // d_{k+1} = d_k · (1 + r_p) + 1, d_0 = 1
        let accumulated = (0..self.total_payments()).fold(1.0, |d, _| d * growth + 1.0);
        self.target / (accumulated - 1.0)
    }
}

/// Level start-of-period contribution reaching `future_value` under simple
/// interest.
///
/// # Errors
///
/// See [`SavingsPlan::new`].
pub fn required_contribution_simple(
    future_value: f64,
    years: u32,
    annual_rate: f64,
    payments_per_year: u32,
) -> Result<f64, RateError> {
    Ok(SavingsPlan::new(future_value, years, annual_rate, payments_per_year)?.simple_contribution())
}

/// Level start-of-period contribution reaching `future_value` under compound
/// interest.
///
/// # Errors
///
/// See [`SavingsPlan::new`].
pub fn required_contribution_compound(
    future_value: f64,
    years: u32,
    annual_rate: f64,
    payments_per_year: u32,
) -> Result<f64, RateError> {
    Ok(SavingsPlan::new(future_value, years, annual_rate, payments_per_year)?
        .compound_contribution())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn test_quarterly_two_years() {
        assert_abs_diff_eq!(
            required_contribution_simple(10_000.0, 2, 0.05, 4).unwrap(),
            1_183.431_953,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            required_contribution_compound(10_000.0, 2, 0.05, 4).unwrap(),
            1_181.561_842,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_compound_matches_closed_form() {
        let plan = SavingsPlan::new(50_000.0, 10, 0.04, 12).unwrap();
        let g = 1.0 + plan.periodic_rate();
        let n = plan.total_payments() as i32;
        let closed = plan.target() * (g - 1.0) / (g * (g.powi(n) - 1.0));
        assert_relative_eq!(plan.compound_contribution(), closed, max_relative = 1e-10);
    }

    #[test]
    fn test_zero_rate_splits_target_evenly() {
        let plan = SavingsPlan::new(1_200.0, 1, 0.0, 12).unwrap();
        assert_abs_diff_eq!(plan.simple_contribution(), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(plan.compound_contribution(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_contribution() {
        // One deposit earning one period of interest
        let plan = SavingsPlan::new(1_050.0, 1, 0.05, 1).unwrap();
        assert_relative_eq!(plan.simple_contribution(), 1_000.0, epsilon = 1e-9);
        assert_relative_eq!(plan.compound_contribution(), 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            SavingsPlan::new(0.0, 2, 0.05, 4).unwrap_err().parameter(),
            "future_value"
        );
        assert_eq!(
            SavingsPlan::new(1.0, 0, 0.05, 4).unwrap_err().parameter(),
            "years"
        );
        assert_eq!(
            SavingsPlan::new(1.0, 2, -0.05, 4).unwrap_err().parameter(),
            "annual_rate"
        );
        assert_eq!(
            SavingsPlan::new(1.0, 2, 0.05, 0).unwrap_err().parameter(),
            "payments_per_year"
        );
        assert!(SavingsPlan::new(1.0, u32::MAX, 0.05, 2).is_err());
    }

    proptest! {
        #[test]
        fn test_compounding_needs_smaller_contribution(
            target in 100.0_f64..1e6,
            years in 1_u32..30,
            rate in 0.001_f64..0.2,
            ppy in prop::sample::select(vec![1_u32, 2, 4, 12]),
        ) {
            let plan = SavingsPlan::new(target, years, rate, ppy).unwrap();
            let simple = plan.simple_contribution();
            let compound = plan.compound_contribution();
            // Equal when only one contribution exists
            prop_assert!(compound <= simple * (1.0 + 1e-12));
            prop_assert!(compound < target / plan.total_payments() as f64);
        }
    }
}
