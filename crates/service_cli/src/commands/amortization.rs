//! Amortization command implementation
//!
//! Builds equal-principal and annuity schedules for the same loan, then
//! compares their cost through the effective annual rate and total interest.

use std::io::Write;

use rates_core::math::effective_annual_rate;
use rates_models::amortization::{AmortizationMode, AmortizationSchedule, LoanTerms};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::AmortizationConfig;
use crate::output::{money, percent, rule, thin_rule, write_json, OutputFormat};
use crate::Result;

const WIDTH: usize = 92;

/// Both schedules and their comparison
#[derive(Debug, Serialize)]
pub struct AmortizationReport {
    /// Equal-principal schedule, then annuity schedule
    pub schedules: Vec<AmortizationSchedule>,
    /// Effective annual rate of the nominal rate at the payment frequency
    pub effective_annual_rate: f64,
    /// Mode with the least total interest
    pub client_preferred: AmortizationMode,
    /// Mode with the most total interest
    pub bank_preferred: AmortizationMode,
}

#[derive(Serialize)]
struct CsvRow {
    mode: &'static str,
    period: u32,
    opening_principal: f64,
    total_payment: f64,
    interest_payment: f64,
    principal_payment: f64,
}

/// Compute both schedules
pub fn compute(config: &AmortizationConfig) -> Result<AmortizationReport> {
    let terms = LoanTerms::new(
        config.principal,
        config.annual_rate,
        config.term_years,
        config.periods_per_year,
    )?;

    let schedules = AmortizationMode::ALL
        .iter()
        .map(|&mode| {
            let schedule = AmortizationSchedule::generate(&terms, mode)?;
            debug!(
                "{}: {} rows, total interest {:.6}, closing balance {:e}",
                mode,
                schedule.len(),
                schedule.total_interest(),
                schedule.closing_balance()
            );
            Ok(schedule)
        })
        .collect::<Result<Vec<_>>>()?;

    let effective = effective_annual_rate(terms.nominal_annual_rate(), terms.periods_per_year())?;

    // Ties (zero rate) favour equal principal for the client
    let (client_preferred, bank_preferred) =
        if schedules[1].total_interest() < schedules[0].total_interest() {
            (AmortizationMode::Annuity, AmortizationMode::EqualPrincipal)
        } else {
            (AmortizationMode::EqualPrincipal, AmortizationMode::Annuity)
        };

    Ok(AmortizationReport {
        schedules,
        effective_annual_rate: effective,
        client_preferred,
        bank_preferred,
    })
}

fn total_interest_of(report: &AmortizationReport, mode: AmortizationMode) -> f64 {
    report
        .schedules
        .iter()
        .find(|schedule| schedule.mode() == mode)
        .map_or(0.0, AmortizationSchedule::total_interest)
}

/// Write both schedules and the analysis as tables
pub fn write_table(out: &mut impl Write, report: &AmortizationReport) -> Result<()> {
    for schedule in &report.schedules {
        writeln!(out)?;
        writeln!(out, "--- Amortization Schedule: {} ---", schedule.mode())?;
        writeln!(out, "{}", rule(WIDTH))?;
        writeln!(
            out,
            "{:<8} | {:>18} | {:>18} | {:>18} | {:>18}",
            "Period", "Initial Principal", "Total Payment", "Interest Payment", "Principal Payment"
        )?;
        writeln!(out, "{}", thin_rule(WIDTH))?;
        for row in schedule.rows() {
            writeln!(
                out,
                "{:<8} | {:>18} | {:>18} | {:>18} | {:>18}",
                row.period,
                money(row.opening_principal),
                money(row.total_payment),
                money(row.interest_payment),
                money(row.principal_payment)
            )?;
        }
        writeln!(out, "{}", rule(WIDTH))?;
        writeln!(out, "Total Interest Paid: {}", money(schedule.total_interest()))?;
    }

    let terms = report.schedules.first().map(AmortizationSchedule::terms);
    writeln!(out)?;
    writeln!(out, "Analysis: EAR and Favourability")?;
    writeln!(out, "{}", rule(WIDTH))?;
    if let Some(terms) = terms {
        writeln!(
            out,
            "1. Effective annual rate: y = (1 + {}/{})^{} - 1 = {}",
            terms.nominal_annual_rate(),
            terms.periods_per_year(),
            terms.periods_per_year(),
            percent(report.effective_annual_rate, 4)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "2. Favourability:")?;
    writeln!(
        out,
        "   Client: {} (total interest {})",
        report.client_preferred,
        money(total_interest_of(report, report.client_preferred))
    )?;
    writeln!(
        out,
        "   Bank:   {} (total interest {})",
        report.bank_preferred,
        money(total_interest_of(report, report.bank_preferred))
    )?;
    writeln!(out, "{}", rule(WIDTH))?;
    Ok(())
}

/// Write every row of both schedules as CSV
pub fn write_csv(out: &mut impl Write, report: &AmortizationReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for schedule in &report.schedules {
        for row in schedule.rows() {
            writer.serialize(CsvRow {
                mode: schedule.mode().code(),
                period: row.period,
                opening_principal: row.opening_principal,
                total_payment: row.total_payment,
                interest_payment: row.interest_payment,
                principal_payment: row.principal_payment,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Run the amortization command
pub fn run(config: &AmortizationConfig, format: OutputFormat) -> Result<()> {
    info!("Starting amortization...");
    info!("  Principal: {}", config.principal);
    info!("  Annual rate: {}", config.annual_rate);
    info!("  Term (years): {}", config.term_years);
    info!("  Periods per year: {}", config.periods_per_year);

    let report = compute(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Csv => write_csv(&mut out, &report)?,
    }

    info!("Amortization complete");
    Ok(())
}
