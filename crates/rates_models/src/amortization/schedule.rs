//! AmortizationSchedule generation.

use rates_core::types::RateError;

use super::annuity::annuity_payment;
use super::mode::AmortizationMode;
use super::terms::LoanTerms;

/// One instalment of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleRow {
    /// 1-based period index.
    pub period: u32,
    /// Principal outstanding at the start of the period.
    pub opening_principal: f64,
    /// Total cash paid in the period (interest + principal).
    pub total_payment: f64,
    /// Interest portion, `opening_principal * periodic_rate`.
    pub interest_payment: f64,
    /// Principal portion.
    pub principal_payment: f64,
}

impl ScheduleRow {
    /// Principal outstanding after this instalment.
    #[inline]
    pub fn closing_principal(&self) -> f64 {
        self.opening_principal - self.principal_payment
    }
}

/// A complete loan amortization schedule.
///
/// Rows run from period 1 to `N = term_years * periods_per_year`. The opening
/// principal of each row is the previous row's opening principal less its
/// principal portion. Floating-point drift may leave a tiny non-zero
/// [`closing_balance`](Self::closing_balance); it is reported as-is.
///
/// # Examples
///
/// ```
/// use rates_models::amortization::{AmortizationMode, AmortizationSchedule, LoanTerms};
///
/// let terms = LoanTerms::new(10_000.0, 0.10, 1, 4).unwrap();
/// let schedule = AmortizationSchedule::generate(&terms, AmortizationMode::Annuity).unwrap();
///
/// assert_eq!(schedule.len(), 4);
/// assert!((schedule.rows()[0].total_payment - 2_658.18).abs() < 0.01);
/// assert!((schedule.total_interest() - 632.72).abs() < 0.01);
/// assert!(schedule.closing_balance().abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AmortizationSchedule {
    mode: AmortizationMode,
    terms: LoanTerms,
    rows: Vec<ScheduleRow>,
    total_interest: f64,
}

impl AmortizationSchedule {
    /// Generate the schedule for validated loan terms.
    pub fn generate(terms: &LoanTerms, mode: AmortizationMode) -> Result<Self, RateError> {
        let periodic_rate = terms.periodic_rate();
        let periods = terms.total_periods();
        let mut rows = Vec::with_capacity(periods as usize);
        let mut opening_principal = terms.principal();
        let mut total_interest = 0.0;

        match mode {
            AmortizationMode::EqualPrincipal => {
                let principal_payment = terms.principal() / periods as f64;
                for period in 1..=periods {
                    let interest_payment = opening_principal * periodic_rate;
                    rows.push(ScheduleRow {
                        period,
                        opening_principal,
                        total_payment: principal_payment + interest_payment,
                        interest_payment,
                        principal_payment,
                    });
                    total_interest += interest_payment;
                    opening_principal -= principal_payment;
                }
            }
            AmortizationMode::Annuity => {
                let total_payment = annuity_payment(terms.principal(), periodic_rate, periods)?;
                for period in 1..=periods {
                    let interest_payment = opening_principal * periodic_rate;
                    let principal_payment = total_payment - interest_payment;
                    rows.push(ScheduleRow {
                        period,
                        opening_principal,
                        total_payment,
                        interest_payment,
                        principal_payment,
                    });
                    total_interest += interest_payment;
                    opening_principal -= principal_payment;
                }
            }
        }

        Ok(Self {
            mode,
            terms: *terms,
            rows,
            total_interest,
        })
    }

    /// Repayment convention used.
    #[inline]
    pub fn mode(&self) -> AmortizationMode {
        self.mode
    }

    /// Loan terms the schedule was generated from.
    #[inline]
    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Original principal.
    #[inline]
    pub fn principal(&self) -> f64 {
        self.terms.principal()
    }

    /// Rate applied per period.
    #[inline]
    pub fn periodic_rate(&self) -> f64 {
        self.terms.periodic_rate()
    }

    /// Rows in period order.
    #[inline]
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Number of instalments.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a generated schedule; provided for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Running sum of the interest portions.
    #[inline]
    pub fn total_interest(&self) -> f64 {
        self.total_interest
    }

    /// Sum of all instalments.
    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|row| row.total_payment).sum()
    }

    /// Principal left after the final instalment (zero up to rounding).
    pub fn closing_balance(&self) -> f64 {
        self.rows
            .last()
            .map_or(self.principal(), ScheduleRow::closing_principal)
    }
}

/// Build an amortization schedule in one call.
///
/// Validates the inputs through [`LoanTerms::new`] and generates the schedule
/// for `mode`.
///
/// # Errors
///
/// `RateError::InvalidParameter` when `principal <= 0`,
/// `nominal_annual_rate < 0`, `term_years == 0`, `periods_per_year == 0`, or
/// the instalment count exceeds [`MAX_PERIODS`](super::MAX_PERIODS).
pub fn build_schedule(
    principal: f64,
    nominal_annual_rate: f64,
    term_years: u32,
    periods_per_year: u32,
    mode: AmortizationMode,
) -> Result<AmortizationSchedule, RateError> {
    let terms = LoanTerms::new(principal, nominal_annual_rate, term_years, periods_per_year)?;
    AmortizationSchedule::generate(&terms, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_equal_principal_quarterly() {
        let schedule =
            build_schedule(10_000.0, 0.10, 1, 4, AmortizationMode::EqualPrincipal).unwrap();

        let expected = [
            (10_000.0, 2_750.0, 250.0),
            (7_500.0, 2_687.5, 187.5),
            (5_000.0, 2_625.0, 125.0),
            (2_500.0, 2_562.5, 62.5),
        ];
        for (row, (opening, payment, interest)) in schedule.rows().iter().zip(expected) {
            assert_abs_diff_eq!(row.opening_principal, opening, epsilon = 1e-9);
            assert_abs_diff_eq!(row.total_payment, payment, epsilon = 1e-9);
            assert_abs_diff_eq!(row.interest_payment, interest, epsilon = 1e-9);
            assert_eq!(row.principal_payment, 2_500.0);
        }
        assert_abs_diff_eq!(schedule.total_interest(), 625.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule.total_paid(), 10_625.0, epsilon = 1e-9);
    }

    #[test]
    fn test_annuity_quarterly() {
        let schedule = build_schedule(10_000.0, 0.10, 1, 4, AmortizationMode::Annuity).unwrap();

        assert_eq!(schedule.len(), 4);
        for row in schedule.rows() {
            assert_abs_diff_eq!(row.total_payment, 2_658.178_777, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(schedule.rows()[0].interest_payment, 250.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule.total_interest(), 632.715_109, epsilon = 1e-6);
        assert_abs_diff_eq!(schedule.closing_balance(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_annuity_costs_more_interest_than_equal_principal() {
        let ep = build_schedule(10_000.0, 0.10, 1, 4, AmortizationMode::EqualPrincipal).unwrap();
        let ann = build_schedule(10_000.0, 0.10, 1, 4, AmortizationMode::Annuity).unwrap();
        assert!(ann.total_interest() > ep.total_interest());
    }

    #[test]
    fn test_zero_rate_both_modes() {
        for mode in AmortizationMode::ALL {
            let schedule = build_schedule(1_200.0, 0.0, 1, 12, mode).unwrap();
            assert_eq!(schedule.total_interest(), 0.0);
            for row in schedule.rows() {
                assert_eq!(row.total_payment, 100.0);
                assert_eq!(row.interest_payment, 0.0);
            }
        }
    }

    #[test]
    fn test_periods_are_one_based_and_contiguous() {
        let schedule = build_schedule(5_000.0, 0.06, 2, 12, AmortizationMode::Annuity).unwrap();
        let periods: Vec<u32> = schedule.rows().iter().map(|r| r.period).collect();
        assert_eq!(periods, (1..=24).collect::<Vec<_>>());
    }

    #[test]
    fn test_opening_principal_recurrence() {
        let schedule =
            build_schedule(80_000.0, 0.07, 5, 12, AmortizationMode::EqualPrincipal).unwrap();
        for pair in schedule.rows().windows(2) {
            assert_eq!(pair[1].opening_principal, pair[0].closing_principal());
        }
    }

    #[test]
    fn test_accessors() {
        let schedule = build_schedule(1_000.0, 0.12, 1, 12, AmortizationMode::Annuity).unwrap();
        assert_eq!(schedule.mode(), AmortizationMode::Annuity);
        assert_eq!(schedule.principal(), 1_000.0);
        assert_relative_eq!(schedule.periodic_rate(), 0.01);
        assert_eq!(schedule.terms().total_periods(), 12);
        assert!(!schedule.is_empty());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mode = AmortizationMode::Annuity;
        assert!(build_schedule(0.0, 0.1, 1, 4, mode).is_err());
        assert!(build_schedule(100.0, -0.1, 1, 4, mode).is_err());
        assert!(build_schedule(100.0, 0.1, 0, 4, mode).is_err());
        assert_eq!(
            build_schedule(100.0, 0.1, 1, 0, mode)
                .unwrap_err()
                .parameter(),
            "periods_per_year"
        );
    }

    #[test]
    fn test_oversized_term_rejected_before_allocation() {
        let err = build_schedule(1.0, 0.1, 65_535, 65_535, AmortizationMode::EqualPrincipal)
            .unwrap_err();
        assert_eq!(err.parameter(), "term_years");
    }

    #[test]
    fn test_idempotent() {
        let a = build_schedule(10_000.0, 0.10, 3, 12, AmortizationMode::Annuity).unwrap();
        let b = build_schedule(10_000.0, 0.10, 3, 12, AmortizationMode::Annuity).unwrap();
        assert_eq!(a, b);
    }
}
