//! Periodic-rates command implementation
//!
//! Splits an annual effective rate into equivalent effective rates per
//! sub-annual period, plus the equivalent continuous rate.

use std::io::Write;

use rates_core::math::{continuous_rate_for_effective, equivalent_periodic_rate};
use rates_core::types::Frequency;
use serde::Serialize;
use tracing::info;

use crate::config::PeriodicRatesConfig;
use crate::output::{percent, rule, write_json, OutputFormat};
use crate::{CliError, Result};

/// Equivalent rate for one period length
#[derive(Debug, Serialize)]
pub struct PeriodicRateRow {
    /// Period label
    pub label: String,
    /// Periods per year
    pub periods_per_year: u32,
    /// Effective rate per period
    pub periodic_rate: f64,
}

/// Equivalent periodic rates
#[derive(Debug, Serialize)]
pub struct PeriodicRatesReport {
    /// Annual effective rate
    pub annual_effective_rate: f64,
    /// One row per configured period
    pub rows: Vec<PeriodicRateRow>,
    /// Equivalent continuously compounded rate
    pub continuous_rate: f64,
}

/// Compute equivalent rates
pub fn compute(config: &PeriodicRatesConfig) -> Result<PeriodicRatesReport> {
    let y = config.annual_effective_rate;
    let rows = config
        .periods
        .iter()
        .map(|&n| {
            Ok(PeriodicRateRow {
                label: Frequency::from_periods_per_year(n)
                    .map_or_else(|| format!("n={}", n), |freq| freq.name().to_string()),
                periods_per_year: n,
                periodic_rate: equivalent_periodic_rate(y, n)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PeriodicRatesReport {
        annual_effective_rate: y,
        rows,
        continuous_rate: continuous_rate_for_effective(y)?,
    })
}

/// Write equivalent rates as a table
pub fn write_table(out: &mut impl Write, report: &PeriodicRatesReport) -> Result<()> {
    writeln!(
        out,
        "Given annual effective rate y = {}",
        percent(report.annual_effective_rate, 1)
    )?;
    writeln!(out, "{}", rule(48))?;
    for row in &report.rows {
        writeln!(
            out,
            "Equivalent {:<10} rate: {}",
            row.label,
            percent(row.periodic_rate, 6)
        )?;
    }
    writeln!(
        out,
        "Equivalent continuous rate: {}",
        percent(report.continuous_rate, 6)
    )?;
    Ok(())
}

/// Run the periodic-rates command
pub fn run(config: &PeriodicRatesConfig, format: OutputFormat) -> Result<()> {
    info!("Starting periodic rate conversion...");
    info!("  Annual effective rate: {}", config.annual_effective_rate);

    let report = compute(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => {
            return Err(CliError::UnsupportedFormat {
                command: "periodic-rates",
                format,
            })
        }
    }

    info!("Periodic rate conversion complete");
    Ok(())
}
