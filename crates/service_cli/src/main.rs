//! Ratebook CLI - Interest Rate and Loan Calculations
//!
//! This is the operational entry point for the ratebook calculation library.
//!
//! # Commands
//!
//! - `ratebook accrual` - Day-weighted interest on a fluctuating balance
//! - `ratebook doubling` - Time to double under each compounding convention
//! - `ratebook nominal-rates` - Nominal rates matching a target effective rate
//! - `ratebook periodic-rates` - Equivalent periodic and continuous rates
//! - `ratebook savings` - Contribution required to reach a savings target
//! - `ratebook rate-schedules` - Variable vs. constant deposit rate schedules
//! - `ratebook amortization` - Equal-principal vs. annuity loan schedules
//! - `ratebook mortgage` - Annuity repricing after a rate reset
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires `rates_core` and
//! `rates_models` to configuration, logging, and output formatting.

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{CliConfig, Section};
use output::OutputFormat;

/// Ratebook interest rate and loan calculator
#[derive(Parser)]
#[command(name = "ratebook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "ratebook.toml")]
    config: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accrue interest over consecutive statement months
    Accrual {
        /// Opening balance of the first month
        #[arg(long)]
        start_balance: Option<f64>,

        /// Nominal annual rate (decimal)
        #[arg(short, long)]
        rate: Option<f64>,
    },

    /// Compare doubling times across compounding conventions
    Doubling {
        /// Annual rate (decimal)
        #[arg(short, long)]
        rate: Option<f64>,
    },

    /// Find nominal rates matching a target effective annual rate
    NominalRates {
        /// Target effective annual rate (decimal)
        #[arg(short, long)]
        target: Option<f64>,
    },

    /// Convert an annual effective rate into equivalent periodic rates
    PeriodicRates {
        /// Annual effective rate (decimal)
        #[arg(short, long)]
        rate: Option<f64>,
    },

    /// Compute the contribution required to reach a savings target
    Savings {
        /// Target future value
        #[arg(long)]
        future_value: Option<f64>,

        /// Horizon in years
        #[arg(short, long)]
        years: Option<u32>,

        /// Nominal annual rate (decimal)
        #[arg(short, long)]
        rate: Option<f64>,

        /// Contributions per year
        #[arg(short = 'n', long)]
        payments_per_year: Option<u32>,
    },

    /// Compare rising, constant, and falling deposit rate schedules
    RateSchedules {
        /// Constant nominal annual rate (decimal)
        #[arg(long)]
        constant_rate: Option<f64>,

        /// Nominal annual rate payouts are reinvested at (decimal)
        #[arg(long)]
        reinvestment_rate: Option<f64>,
    },

    /// Build equal-principal and annuity schedules for a loan
    Amortization {
        /// Amount borrowed
        #[arg(short, long)]
        principal: Option<f64>,

        /// Nominal annual rate (decimal)
        #[arg(short, long)]
        rate: Option<f64>,

        /// Term in years
        #[arg(short, long)]
        years: Option<u32>,

        /// Instalments per year
        #[arg(short = 'n', long)]
        periods_per_year: Option<u32>,
    },

    /// Reprice an annuity mortgage after its reference rate resets
    Mortgage {
        /// Amount borrowed
        #[arg(short, long)]
        principal: Option<f64>,

        /// Reference rate at origination (decimal)
        #[arg(long)]
        reference_rate: Option<f64>,

        /// Lender margin (decimal)
        #[arg(long)]
        margin: Option<f64>,

        /// Reference rate after the reset (decimal)
        #[arg(long)]
        reset_reference_rate: Option<f64>,

        /// Instalments paid before the reset
        #[arg(long)]
        paid_periods: Option<u32>,
    },
}

/// Replace `slot` when a command-line value was given.
fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Fold command-line values into `config` and name the section the command reads.
fn apply_overrides(command: Commands, config: &mut CliConfig) -> Section {
    match command {
        Commands::Accrual {
            start_balance,
            rate,
        } => {
            override_with(&mut config.accrual.start_balance, start_balance);
            override_with(&mut config.accrual.annual_rate, rate);
            Section::Accrual
        }
        Commands::Doubling { rate } => {
            override_with(&mut config.doubling.rate, rate);
            Section::Doubling
        }
        Commands::NominalRates { target } => {
            override_with(&mut config.nominal_rates.target_effective_rate, target);
            Section::NominalRates
        }
        Commands::PeriodicRates { rate } => {
            override_with(&mut config.periodic_rates.annual_effective_rate, rate);
            Section::PeriodicRates
        }
        Commands::Savings {
            future_value,
            years,
            rate,
            payments_per_year,
        } => {
            let savings = &mut config.savings;
            override_with(&mut savings.future_value, future_value);
            override_with(&mut savings.years, years);
            override_with(&mut savings.annual_rate, rate);
            override_with(&mut savings.payments_per_year, payments_per_year);
            Section::Savings
        }
        Commands::RateSchedules {
            constant_rate,
            reinvestment_rate,
        } => {
            let schedules = &mut config.rate_schedules;
            override_with(&mut schedules.constant_rate, constant_rate);
            override_with(&mut schedules.reinvestment_rate, reinvestment_rate);
            Section::RateSchedules
        }
        Commands::Amortization {
            principal,
            rate,
            years,
            periods_per_year,
        } => {
            let amortization = &mut config.amortization;
            override_with(&mut amortization.principal, principal);
            override_with(&mut amortization.annual_rate, rate);
            override_with(&mut amortization.term_years, years);
            override_with(&mut amortization.periods_per_year, periods_per_year);
            Section::Amortization
        }
        Commands::Mortgage {
            principal,
            reference_rate,
            margin,
            reset_reference_rate,
            paid_periods,
        } => {
            let mortgage = &mut config.mortgage;
            override_with(&mut mortgage.principal, principal);
            override_with(&mut mortgage.reference_rate, reference_rate);
            override_with(&mut mortgage.margin, margin);
            override_with(&mut mortgage.reset_reference_rate, reset_reference_rate);
            override_with(&mut mortgage.paid_periods, paid_periods);
            Section::Mortgage
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = Path::new(&cli.config);
    let mut config = CliConfig::load_with_env(config_path)
        .with_context(|| format!("failed to load configuration from {}", cli.config))?;

    let section = apply_overrides(cli.command, &mut config);
    config
        .validate_section(section)
        .with_context(|| format!("invalid configuration in {}", cli.config))?;

    init_tracing(&config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(
        "Configuration: {} (exists: {})",
        cli.config,
        config_path.exists()
    );

    let format = cli.format;
    match section {
        Section::Accrual => commands::accrual::run(&config.accrual, format)?,
        Section::Doubling => commands::doubling::run(&config.doubling, format)?,
        Section::NominalRates => commands::nominal_rates::run(&config.nominal_rates, format)?,
        Section::PeriodicRates => commands::periodic_rates::run(&config.periodic_rates, format)?,
        Section::Savings => commands::savings::run(&config.savings, format)?,
        Section::RateSchedules => commands::rate_schedules::run(&config.rate_schedules, format)?,
        Section::Amortization => commands::amortization::run(&config.amortization, format)?,
        Section::Mortgage => commands::mortgage::run(&config.mortgage, format)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "ratebook",
            "--format",
            "csv",
            "amortization",
            "--principal",
            "25000",
            "-n",
            "12",
        ]);
        assert_eq!(cli.format, OutputFormat::Csv);
        assert_eq!(cli.config, "ratebook.toml");
        match cli.command {
            Commands::Amortization {
                principal,
                periods_per_year,
                rate,
                ..
            } => {
                assert_eq!(principal, Some(25_000.0));
                assert_eq!(periods_per_year, Some(12));
                assert_eq!(rate, None);
            }
            _ => panic!("Expected amortization command"),
        }
    }

    #[test]
    fn test_overrides_land_in_selected_section() {
        let cli = Cli::parse_from(["ratebook", "doubling", "--rate", "0.05"]);
        let mut config = CliConfig::default();
        config.doubling.rate = 0.0;

        let section = apply_overrides(cli.command, &mut config);
        assert_eq!(section, Section::Doubling);
        assert_eq!(config.doubling.rate, 0.05);
        assert!(config.validate_section(section).is_ok());
    }

    #[test]
    fn test_override_with() {
        let mut value = 1.0;
        override_with(&mut value, None);
        assert_eq!(value, 1.0);
        override_with(&mut value, Some(2.0));
        assert_eq!(value, 2.0);
    }
}
