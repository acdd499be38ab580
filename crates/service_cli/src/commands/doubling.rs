//! Doubling command implementation
//!
//! Compares how long money takes to double under different compounding.

use std::io::Write;

use rates_core::math::doubling_time;
use rates_core::types::{Compounding, Frequency};
use serde::Serialize;
use tracing::info;

use crate::config::DoublingConfig;
use crate::output::{percent, rule, write_json, OutputFormat};
use crate::{CliError, Result};

/// Doubling time under one convention
#[derive(Debug, Serialize)]
pub struct DoublingRow {
    /// Convention label
    pub label: String,
    /// Compounding convention
    pub compounding: Compounding,
    /// Years to double
    pub years: f64,
}

/// Doubling times
#[derive(Debug, Serialize)]
pub struct DoublingReport {
    /// Annual rate
    pub rate: f64,
    /// Simple, then each frequency, then continuous
    pub rows: Vec<DoublingRow>,
}

fn label(compounding: Compounding) -> String {
    match compounding {
        Compounding::Simple => "Simple".to_string(),
        Compounding::Continuous => "Continuous".to_string(),
        Compounding::Periodic { periods_per_year } => {
            match Frequency::from_periods_per_year(periods_per_year) {
                Some(freq) => format!("{} (n={})", freq.name(), periods_per_year),
                None => format!("n={}", periods_per_year),
            }
        }
    }
}

/// Compute doubling times
pub fn compute(config: &DoublingConfig) -> Result<DoublingReport> {
    let conventions = std::iter::once(Compounding::Simple)
        .chain(
            config
                .compounding_periods
                .iter()
                .map(|&periods_per_year| Compounding::Periodic { periods_per_year }),
        )
        .chain(std::iter::once(Compounding::Continuous));

    let rows = conventions
        .map(|compounding| {
            Ok(DoublingRow {
                label: label(compounding),
                compounding,
                years: doubling_time(config.rate, compounding)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DoublingReport {
        rate: config.rate,
        rows,
    })
}

/// Write doubling times as a table
pub fn write_table(out: &mut impl Write, report: &DoublingReport) -> Result<()> {
    writeln!(out, "Time to double at {} p.a.", percent(report.rate, 2))?;
    writeln!(out, "{}", rule(40))?;
    for row in &report.rows {
        writeln!(out, "{:<24} {:>10.6} years", row.label, row.years)?;
    }
    Ok(())
}

/// Run the doubling command
pub fn run(config: &DoublingConfig, format: OutputFormat) -> Result<()> {
    info!("Starting doubling time comparison...");
    info!("  Rate: {}", config.rate);

    let report = compute(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => {
            return Err(CliError::UnsupportedFormat {
                command: "doubling",
                format,
            })
        }
    }

    info!("Doubling comparison complete");
    Ok(())
}
