//! Accrual command implementation
//!
//! Runs a multi-month balance accrual statement.

use std::io::Write;

use rates_models::accrual::{accrue_statement, MonthlyAccrual, StatementMonth};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::AccrualConfig;
use crate::output::{money, percent, rule, thin_rule, write_json, OutputFormat};
use crate::{CliError, Result};

const WIDTH: usize = 74;

/// One statement line
#[derive(Debug, Serialize)]
pub struct StatementLine {
    /// Month label
    pub label: String,
    /// Days in the month
    pub days_in_month: u32,
    /// Accrual outcome
    #[serde(flatten)]
    pub accrual: MonthlyAccrual,
}

/// Accrual statement
#[derive(Debug, Serialize)]
pub struct AccrualReport {
    /// Nominal annual rate
    pub annual_rate: f64,
    /// Months in order
    pub months: Vec<StatementLine>,
}

/// Compute the statement
pub fn compute(config: &AccrualConfig) -> Result<AccrualReport> {
    let months = config
        .months
        .iter()
        .map(|month| month.to_statement_month())
        .collect::<std::result::Result<Vec<StatementMonth>, _>>()?;

    let accruals = accrue_statement(config.start_balance, &months, config.annual_rate)?;

    let lines = months
        .into_iter()
        .zip(accruals)
        .map(|(month, accrual)| {
            debug!(
                "{}: {} transactions, interest {:.6}",
                month.label,
                month.transactions.len(),
                accrual.total_interest
            );
            StatementLine {
                label: month.label,
                days_in_month: month.days_in_month,
                accrual,
            }
        })
        .collect();

    Ok(AccrualReport {
        annual_rate: config.annual_rate,
        months: lines,
    })
}

/// Write the statement as a table
pub fn write_table(out: &mut impl Write, report: &AccrualReport) -> Result<()> {
    writeln!(out, "Balance accrual at {} p.a.", percent(report.annual_rate, 2))?;
    writeln!(out, "{}", rule(WIDTH))?;
    writeln!(
        out,
        "{:<10} | {:>4} | {:>16} | {:>12} | {:>16}",
        "Month", "Days", "Opening", "Interest", "Closing"
    )?;
    writeln!(out, "{}", thin_rule(WIDTH))?;
    for line in &report.months {
        writeln!(
            out,
            "{:<10} | {:>4} | {:>16} | {:>12} | {:>16}",
            line.label,
            line.days_in_month,
            money(line.accrual.start_balance),
            money(line.accrual.total_interest),
            money(line.accrual.closing_balance)
        )?;
    }
    writeln!(out, "{}", rule(WIDTH))?;
    Ok(())
}

/// Run the accrual command
pub fn run(config: &AccrualConfig, format: OutputFormat) -> Result<()> {
    info!("Starting balance accrual...");
    info!("  Start balance: {}", config.start_balance);
    info!("  Annual rate: {}", config.annual_rate);
    info!("  Months: {}", config.months.len());

    let report = compute(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => {
            return Err(CliError::UnsupportedFormat {
                command: "accrual",
                format,
            })
        }
    }

    info!("Accrual complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_statement() {
        let report = compute(&AccrualConfig::default()).unwrap();
        assert_eq!(report.months.len(), 2);
        assert_abs_diff_eq!(report.months[0].accrual.total_interest, 500.547_945, epsilon = 1e-6);
        assert_abs_diff_eq!(report.months[1].accrual.total_interest, 339.043_348, epsilon = 1e-6);
        assert_abs_diff_eq!(
            report.months[1].accrual.closing_balance,
            172_839.591_293,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_table_output() {
        let report = compute(&AccrualConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_table(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("October"));
        assert!(text.contains("500.55"));
        assert!(text.contains("97,500.55"));
        assert!(text.contains("172,839.59"));
    }

    #[test]
    fn test_invalid_rate_is_reported() {
        let config = AccrualConfig {
            annual_rate: f64::NAN,
            ..AccrualConfig::default()
        };
        assert!(matches!(compute(&config), Err(CliError::Rate(_))));
    }
}
