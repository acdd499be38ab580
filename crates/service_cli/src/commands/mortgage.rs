//! Mortgage command implementation
//!
//! Reprices a floating-rate annuity mortgage (reference rate plus margin)
//! after the reference rate resets.

use std::io::Write;

use rates_models::amortization::{reprice_after_reset, LoanTerms, RateReset};
use serde::Serialize;
use tracing::info;

use crate::config::MortgageConfig;
use crate::output::{money, percent, write_json, OutputFormat};
use crate::{CliError, Result};

/// Repricing outcome
#[derive(Debug, Serialize)]
pub struct MortgageReport {
    /// Loan terms at origination
    pub terms: LoanTerms,
    /// Lender margin
    pub margin: f64,
    /// Repricing figures
    pub reset: RateReset,
}

/// Compute the repricing
pub fn compute(config: &MortgageConfig) -> Result<MortgageReport> {
    let terms = LoanTerms::new(
        config.principal,
        config.initial_rate(),
        config.term_years,
        config.periods_per_year,
    )?;
    let reset = reprice_after_reset(&terms, config.reset_rate(), config.paid_periods)?;
    Ok(MortgageReport {
        terms,
        margin: config.margin,
        reset,
    })
}

/// Write the repricing as text
pub fn write_table(out: &mut impl Write, report: &MortgageReport) -> Result<()> {
    let terms = &report.terms;
    let reset = &report.reset;
    writeln!(
        out,
        "Loan {} over {} instalments at {} p.a. (margin {})",
        money(terms.principal()),
        terms.total_periods(),
        percent(terms.nominal_annual_rate(), 2),
        percent(report.margin, 2)
    )?;
    writeln!(
        out,
        "a) Instalment for the first {} periods: {}",
        reset.paid_periods,
        money(reset.initial_payment)
    )?;
    writeln!(
        out,
        "b) Outstanding balance after {} periods: {}",
        reset.paid_periods,
        money(reset.balance_at_reset)
    )?;
    writeln!(
        out,
        "c) New instalment at {} p.a. over the remaining {} periods: {} (change {})",
        percent(reset.reset_annual_rate, 2),
        reset.remaining_periods,
        money(reset.reset_payment),
        money(reset.payment_change())
    )?;
    Ok(())
}

/// Run the mortgage command
pub fn run(config: &MortgageConfig, format: OutputFormat) -> Result<()> {
    info!("Starting mortgage repricing...");
    info!("  Principal: {}", config.principal);
    info!("  Initial rate: {}", config.initial_rate());
    info!("  Reset rate: {}", config.reset_rate());
    info!("  Paid periods: {}", config.paid_periods);

    let report = compute(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => {
            return Err(CliError::UnsupportedFormat {
                command: "mortgage",
                format,
            })
        }
    }

    info!("Mortgage repricing complete");
    Ok(())
}
