//! Nominal-rates command implementation
//!
//! Finds the nominal annual rate that matches a target effective rate (for
//! example inflation) under each compounding frequency.

use std::io::Write;

use rates_core::math::{continuous_rate_for_effective, nominal_rate_for_effective};
use rates_core::types::Frequency;
use serde::Serialize;
use tracing::info;

use crate::config::NominalRatesConfig;
use crate::output::{percent, rule, write_json, OutputFormat};
use crate::{CliError, Result};

/// Required nominal rate for one frequency
#[derive(Debug, Serialize)]
pub struct NominalRateRow {
    /// Frequency label
    pub label: String,
    /// Compounding periods per year, `None` for continuous
    pub periods_per_year: Option<u32>,
    /// Required nominal annual rate
    pub nominal_rate: f64,
}

/// Required nominal rates
#[derive(Debug, Serialize)]
pub struct NominalRatesReport {
    /// Effective annual rate to match
    pub target_effective_rate: f64,
    /// Discrete frequencies, then continuous
    pub rows: Vec<NominalRateRow>,
}

/// Compute required nominal rates
pub fn compute(config: &NominalRatesConfig) -> Result<NominalRatesReport> {
    let target = config.target_effective_rate;
    let mut rows = config
        .compounding_periods
        .iter()
        .map(|&n| {
            Ok(NominalRateRow {
                label: Frequency::from_periods_per_year(n)
                    .map_or_else(|| format!("n={}", n), |freq| freq.name().to_string()),
                periods_per_year: Some(n),
                nominal_rate: nominal_rate_for_effective(target, n)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    rows.push(NominalRateRow {
        label: "Continuous".to_string(),
        periods_per_year: None,
        nominal_rate: continuous_rate_for_effective(target)?,
    });

    Ok(NominalRatesReport {
        target_effective_rate: target,
        rows,
    })
}

/// Write required rates as a table
pub fn write_table(out: &mut impl Write, report: &NominalRatesReport) -> Result<()> {
    writeln!(
        out,
        "Nominal rate matching an effective {} p.a.",
        percent(report.target_effective_rate, 2)
    )?;
    writeln!(out, "{}", rule(52))?;
    for row in &report.rows {
        let n = row
            .periods_per_year
            .map_or_else(|| "inf".to_string(), |n| n.to_string());
        writeln!(
            out,
            "For {:<12} (n={:<3}) compounding, r = {}",
            row.label,
            n,
            percent(row.nominal_rate, 4)
        )?;
    }
    Ok(())
}

/// Run the nominal-rates command
pub fn run(config: &NominalRatesConfig, format: OutputFormat) -> Result<()> {
    info!("Starting nominal rate search...");
    info!("  Target effective rate: {}", config.target_effective_rate);

    let report = compute(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => {
            return Err(CliError::UnsupportedFormat {
                command: "nominal-rates",
                format,
            })
        }
    }

    info!("Nominal rate search complete");
    Ok(())
}
