//! Savings command implementation
//!
//! Computes the level contribution reaching a savings target under simple and
//! compound interest.

use std::io::Write;

use rates_models::savings::SavingsPlan;
use serde::Serialize;
use tracing::info;

use crate::config::SavingsConfig;
use crate::output::{money, percent, write_json, OutputFormat};
use crate::{CliError, Result};

/// Required contributions
#[derive(Debug, Serialize)]
pub struct SavingsReport {
    /// Plan inputs
    pub plan: SavingsPlan,
    /// Contribution under simple interest
    pub simple_contribution: f64,
    /// Contribution under compound interest
    pub compound_contribution: f64,
}

/// Compute required contributions
pub fn compute(config: &SavingsConfig) -> Result<SavingsReport> {
    let plan = SavingsPlan::new(
        config.future_value,
        config.years,
        config.annual_rate,
        config.payments_per_year,
    )?;
    Ok(SavingsReport {
        plan,
        simple_contribution: plan.simple_contribution(),
        compound_contribution: plan.compound_contribution(),
    })
}

/// Write contributions as text
pub fn write_table(out: &mut impl Write, report: &SavingsReport) -> Result<()> {
    let plan = &report.plan;
    writeln!(
        out,
        "Target {} after {} years at {} p.a., {} contributions per year",
        money(plan.target()),
        plan.years(),
        percent(plan.annual_rate(), 2),
        plan.payments_per_year()
    )?;
    writeln!(out)?;
    writeln!(out, "a) Simple interest:")?;
    writeln!(
        out,
        "   Required contribution per period: {}",
        money(report.simple_contribution)
    )?;
    writeln!(out)?;
    writeln!(out, "b) Compound interest:")?;
    writeln!(
        out,
        "   Required contribution per period: {}",
        money(report.compound_contribution)
    )?;
    Ok(())
}

/// Run the savings command
pub fn run(config: &SavingsConfig, format: OutputFormat) -> Result<()> {
    info!("Starting savings plan...");
    info!("  Future value: {}", config.future_value);
    info!("  Years: {}", config.years);
    info!("  Annual rate: {}", config.annual_rate);
    info!("  Payments per year: {}", config.payments_per_year);

    let report = compute(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => {
            return Err(CliError::UnsupportedFormat {
                command: "savings",
                format,
            })
        }
    }

    info!("Savings plan complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_plan() {
        let report = compute(&SavingsConfig::default()).unwrap();
        assert_abs_diff_eq!(report.simple_contribution, 1_183.431_953, epsilon = 1e-6);
        assert_abs_diff_eq!(report.compound_contribution, 1_181.561_842, epsilon = 1e-6);
    }

    #[test]
    fn test_table_output() {
        let report = compute(&SavingsConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_table(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1,183.43"));
        assert!(text.contains("1,181.56"));
    }

    #[test]
    fn test_zero_years_rejected() {
        let config = SavingsConfig {
            years: 0,
            ..SavingsConfig::default()
        };
        assert!(matches!(compute(&config), Err(CliError::Rate(_))));
    }
}
