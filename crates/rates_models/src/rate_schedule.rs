//! Variable-rate deposit schedules.
//!
//! A schedule is a sequence of nominal annual rates, one per compounding
//! period. Period `i` grows the balance by `1 + r_i / m`, where `m` is the
//! number of periods per year.
//!
//! Three views of the same schedule are compared:
//! - **Capitalised**: interest stays in the deposit, giving
//!   `EAR = Π (1 + r_i / m) - 1`. The product is order independent, so a
//!   rising schedule and its reverse yield the same rate.
//! - **Paid out**: each period pays `principal · r_i / m` and the principal is
//!   untouched. The sum is order independent as well.
//! - **Paid out and reinvested**: payout `k` (1-based) is reinvested at a flat
//!   periodic rate until the end of the schedule, compounding for
//!   `len - k` periods. Earlier cash grows longer, so front-loaded schedules win.

use rates_core::math::effective_annual_rate;
use rates_core::types::RateError;

fn validate_rates(rates: &[f64]) -> Result<(), RateError> {
    if rates.is_empty() {
        return Err(RateError::invalid("rates", "schedule must not be empty"));
    }
    for &rate in rates {
        RateError::ensure_finite("rates", rate)?;
    }
    Ok(())
}

/// Effective annual rate of a capitalised schedule.
///
/// # Errors
///
/// `RateError::InvalidParameter` when the schedule is empty, a rate is not
/// finite, or `periods_per_year == 0`.
///
/// # Examples
///
/// ```
/// use rates_models::rate_schedule::ear_for_schedule;
///
/// let rising: Vec<f64> = (1..=12).map(|i| i as f64 / 100.0).collect();
/// let falling: Vec<f64> = rising.iter().rev().copied().collect();
///
/// let ear = ear_for_schedule(&rising, 12).unwrap();
/// assert!((ear - 0.066_919).abs() < 1e-6);
/// assert!((ear - ear_for_schedule(&falling, 12).unwrap()).abs() < 1e-12);
/// ```
pub fn ear_for_schedule(rates: &[f64], periods_per_year: u32) -> Result<f64, RateError> {
    validate_rates(rates)?;
    let m = RateError::ensure_count("periods_per_year", periods_per_year)? as f64;
    for &rate in rates {
        if rate / m <= -1.0 {
            return Err(RateError::invalid(
                "rates",
                format!("rate {} gives a non-positive growth factor", rate),
            ));
        }
    }
    let factor: f64 = rates.iter().map(|&rate| 1.0 + rate / m).product();
    Ok(factor - 1.0)
}

/// Effective annual rate of a constant nominal `rate` compounded
/// `periods_per_year` times.
pub fn ear_constant(rate: f64, periods_per_year: u32) -> Result<f64, RateError> {
    let rate = RateError::ensure_finite("rate", rate)?;
    effective_annual_rate(rate, periods_per_year)
}

/// Per-period payouts `principal · r_i / periods_per_year`, principal kept
/// intact.
pub fn periodic_payouts(
    rates: &[f64],
    principal: f64,
    periods_per_year: u32,
) -> Result<Vec<f64>, RateError> {
    validate_rates(rates)?;
    let principal = RateError::ensure_non_negative("principal", principal)?;
    let m = RateError::ensure_count("periods_per_year", periods_per_year)? as f64;
    Ok(rates.iter().map(|&rate| principal * rate / m).collect())
}

/// Value at the end of the schedule of payouts reinvested at
/// `periodic_rate`; payout `k` (1-based) compounds for `len - k` periods.
///
/// # Examples
///
/// ```
/// use rates_models::rate_schedule::future_value_of_payouts;
///
/// // Last payout is not reinvested at all
/// let fv = future_value_of_payouts(&[1.0, 1.0], 0.10).unwrap();
/// assert!((fv - 2.1).abs() < 1e-12);
/// ```
pub fn future_value_of_payouts(payouts: &[f64], periodic_rate: f64) -> Result<f64, RateError> {
    let periodic_rate = RateError::ensure_finite("periodic_rate", periodic_rate)?;
    if periodic_rate <= -1.0 {
        return Err(RateError::invalid(
            "periodic_rate",
            format!("must exceed -1, got {}", periodic_rate),
        ));
    }
    let growth = 1.0 + periodic_rate;
    // Horner: ((c_1 · g + c_2) · g + ...) · g + c_len
    Ok(payouts.iter().fold(0.0, |fv, &payout| fv * growth + payout))
}

/// Outcome of one schedule under the three views.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleOutcome {
    /// Schedule name.
    pub name: String,
    /// Effective annual rate with interest capitalised.
    pub effective_annual_rate: f64,
    /// Sum of payouts without reinvestment.
    pub payout_sum: f64,
    /// Value of the payouts reinvested to the end of the schedule.
    pub reinvested_value: f64,
}

/// Named rate schedules compared on a common principal and reinvestment rate.
///
/// # Examples
///
/// ```
/// use rates_models::rate_schedule::RateScheduleComparison;
///
/// let rising: Vec<f64> = (1..=12).map(|i| i as f64 / 100.0).collect();
/// let falling: Vec<f64> = rising.iter().rev().copied().collect();
///
/// let outcomes = RateScheduleComparison::new(1.0, 12, 0.065 / 12.0)
///     .with_schedule("rising", rising)
///     .with_schedule("constant", vec![0.065; 12])
///     .with_schedule("falling", falling)
///     .evaluate()
///     .unwrap();
///
/// // Same payout total, but front-loaded cash reinvests longer
/// assert!(outcomes[2].reinvested_value > outcomes[1].reinvested_value);
/// assert!(outcomes[1].reinvested_value > outcomes[0].reinvested_value);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RateScheduleComparison {
    principal: f64,
    periods_per_year: u32,
    reinvestment_rate: f64,
    schedules: Vec<(String, Vec<f64>)>,
}

impl RateScheduleComparison {
    /// Empty comparison; `reinvestment_rate` is per period.
    pub fn new(principal: f64, periods_per_year: u32, reinvestment_rate: f64) -> Self {
        Self {
            principal,
            periods_per_year,
            reinvestment_rate,
            schedules: Vec::new(),
        }
    }

    /// Add a named schedule.
    #[must_use]
    pub fn with_schedule(mut self, name: impl Into<String>, rates: Vec<f64>) -> Self {
        self.schedules.push((name.into(), rates));
        self
    }

    /// Schedules in insertion order.
    pub fn schedules(&self) -> &[(String, Vec<f64>)] {
        &self.schedules
    }

    /// Evaluate every schedule, in insertion order.
    pub fn evaluate(&self) -> Result<Vec<ScheduleOutcome>, RateError> {
        self.schedules
            .iter()
            .map(|(name, rates)| {
                let payouts = periodic_payouts(rates, self.principal, self.periods_per_year)?;
                Ok(ScheduleOutcome {
                    name: name.clone(),
                    effective_annual_rate: ear_for_schedule(rates, self.periods_per_year)?,
                    payout_sum: payouts.iter().sum(),
                    reinvested_value: future_value_of_payouts(&payouts, self.reinvestment_rate)?,
                })
            })
            .collect()
    }
}
