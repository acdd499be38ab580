//! Rate-schedules command implementation
//!
//! Compares a rising, a constant, and a falling monthly rate schedule with
//! interest capitalised, paid out, and paid out then reinvested.

use std::io::Write;

use rates_models::rate_schedule::{RateScheduleComparison, ScheduleOutcome};
use serde::Serialize;
use tracing::info;

use crate::config::RateSchedulesConfig;
use crate::output::{percent, rule, thin_rule, write_json, OutputFormat};
use crate::{CliError, Result};

const WIDTH: usize = 70;

/// Schedule comparison
#[derive(Debug, Serialize)]
pub struct RateSchedulesReport {
    /// Deposit principal
    pub principal: f64,
    /// Nominal annual reinvestment rate
    pub reinvestment_rate: f64,
    /// Rising, constant, falling
    pub outcomes: Vec<ScheduleOutcome>,
}

/// Compute the comparison
pub fn compute(config: &RateSchedulesConfig) -> Result<RateSchedulesReport> {
    let m = config.periods_per_year;
    let falling: Vec<f64> = config.rising.iter().rev().copied().collect();
    let constant = vec![config.constant_rate; config.rising.len()];
    // m == 0 is rejected by evaluate()
    let reinvestment = config.reinvestment_rate / f64::from(m.max(1));

    let outcomes = RateScheduleComparison::new(config.principal, m, reinvestment)
        .with_schedule("A (rising)", config.rising.clone())
        .with_schedule("B (constant)", constant)
        .with_schedule("C (falling)", falling)
        .evaluate()?;

    Ok(RateSchedulesReport {
        principal: config.principal,
        reinvestment_rate: config.reinvestment_rate,
        outcomes,
    })
}

/// Write the comparison as a table
pub fn write_table(out: &mut impl Write, report: &RateSchedulesReport) -> Result<()> {
    writeln!(
        out,
        "Deposit schedules per principal {}, payouts reinvested at {} p.a.",
        report.principal,
        percent(report.reinvestment_rate, 2)
    )?;
    writeln!(out, "{}", rule(WIDTH))?;
    writeln!(
        out,
        "{:<14} | {:>14} | {:>16} | {:>16}",
        "Schedule", "EAR", "Payout sum", "Reinvested FV"
    )?;
    writeln!(out, "{}", thin_rule(WIDTH))?;
    for outcome in &report.outcomes {
        writeln!(
            out,
            "{:<14} | {:>14} | {:>16.8} | {:>16.8}",
            outcome.name,
            percent(outcome.effective_annual_rate, 6),
            outcome.payout_sum,
            outcome.reinvested_value
        )?;
    }
    writeln!(out, "{}", rule(WIDTH))?;
    Ok(())
}

/// Run the rate-schedules command
pub fn run(config: &RateSchedulesConfig, format: OutputFormat) -> Result<()> {
    info!("Starting rate schedule comparison...");
    info!("  Principal: {}", config.principal);
    info!("  Periods per year: {}", config.periods_per_year);
    info!("  Constant rate: {}", config.constant_rate);

    let report = compute(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => {
            return Err(CliError::UnsupportedFormat {
                command: "rate-schedules",
                format,
            })
        }
    }

    info!("Rate schedule comparison complete");
    Ok(())
}
