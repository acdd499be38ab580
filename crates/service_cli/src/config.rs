//! CLI configuration management.
//!
//! Every subcommand reads its inputs from a section of a TOML file. Missing
//! sections and fields fall back to the built-in scenario values, so an empty
//! file (or no file at all) reproduces the default figures. Command-line flags
//! override the loaded values.
//!
//! ```toml
//! log_level = "debug"
//!
//! [amortization]
//! principal = 25000.0
//! term_years = 3
//!
//! [[accrual.months]]
//! label = "2024-01"
//! days_in_month = 31
//! transactions = [{ day = 3, amount = 1500.0 }]
//! ```

use std::path::{Path, PathBuf};

use rates_core::types::time::parse_year_month;
use rates_core::types::{days_in_month, RateError, MAX_DAYS_IN_MONTH};
use rates_models::accrual::{StatementMonth, Transactions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding `log_level`
pub const LOG_LEVEL_ENV: &str = "RATEBOOK_LOG_LEVEL";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Config section read by one subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `[accrual]`
    Accrual,
    /// `[doubling]`
    Doubling,
    /// `[nominal_rates]`
    NominalRates,
    /// `[periodic_rates]`
    PeriodicRates,
    /// `[savings]`
    Savings,
    /// `[rate_schedules]`
    RateSchedules,
    /// `[amortization]`
    Amortization,
    /// `[mortgage]`
    Mortgage,
}

/// Root configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// `accrual` inputs
    pub accrual: AccrualConfig,
    /// `doubling` inputs
    pub doubling: DoublingConfig,
    /// `nominal-rates` inputs
    pub nominal_rates: NominalRatesConfig,
    /// `periodic-rates` inputs
    pub periodic_rates: PeriodicRatesConfig,
    /// `savings` inputs
    pub savings: SavingsConfig,
    /// `rate-schedules` inputs
    pub rate_schedules: RateSchedulesConfig,
    /// `amortization` inputs
    pub amortization: AmortizationConfig,
    /// `mortgage` inputs
    pub mortgage: MortgageConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            accrual: AccrualConfig::default(),
            doubling: DoublingConfig::default(),
            nominal_rates: NominalRatesConfig::default(),
            periodic_rates: PeriodicRatesConfig::default(),
            savings: SavingsConfig::default(),
            rate_schedules: RateSchedulesConfig::default(),
            amortization: AmortizationConfig::default(),
            mortgage: MortgageConfig::default(),
        }
    }
}

/// One dated cash flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransactionConfig {
    /// Day of month, 1-based
    pub day: u32,
    /// Signed amount
    pub amount: f64,
}

/// One statement month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthConfig {
    /// Display label; a `YYYY-MM` label lets `days_in_month` be omitted
    pub label: String,
    /// Calendar days in the month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_in_month: Option<u32>,
    /// Cash flows, any order
    #[serde(default)]
    pub transactions: Vec<TransactionConfig>,
}

impl MonthConfig {
    fn new(label: &str, days_in_month: u32, transactions: &[(u32, f64)]) -> Self {
        Self {
            label: label.to_string(),
            days_in_month: Some(days_in_month),
            transactions: transactions
                .iter()
                .map(|&(day, amount)| TransactionConfig { day, amount })
                .collect(),
        }
    }

    /// Month length, taken from the calendar when not given explicitly.
    pub fn resolved_days(&self) -> Result<u32, RateError> {
        match self.days_in_month {
            Some(days) => Ok(days),
            None => {
                let (year, month) = parse_year_month(&self.label)?;
                Ok(days_in_month(year, month)?)
            }
        }
    }

    /// Convert into a model month; duplicate days are rejected.
    pub fn to_statement_month(&self) -> Result<StatementMonth, RateError> {
        let transactions =
            Transactions::try_from_pairs(self.transactions.iter().map(|tx| (tx.day, tx.amount)))?;
        Ok(StatementMonth::new(
            self.label.clone(),
            self.resolved_days()?,
            transactions,
        ))
    }
}

/// Balance accrual statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccrualConfig {
    /// Opening balance of the first month
    pub start_balance: f64,
    /// Nominal annual rate
    pub annual_rate: f64,
    /// Consecutive months
    pub months: Vec<MonthConfig>,
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            start_balance: 100_000.0,
            annual_rate: 0.05,
            months: vec![
                MonthConfig::new(
                    "October",
                    31,
                    &[(5, 17_000.0), (12, 35_000.0), (21, -55_000.0)],
                ),
                MonthConfig::new("November", 30, &[(9, -25_000.0), (30, 100_000.0)]),
            ],
        }
    }
}

/// Doubling time comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoublingConfig {
    /// Annual rate
    pub rate: f64,
    /// Compounding frequencies shown besides simple and continuous
    pub compounding_periods: Vec<u32>,
}

impl Default for DoublingConfig {
    fn default() -> Self {
        Self {
            rate: 0.05,
            compounding_periods: vec![1, 4, 12, 365],
        }
    }
}

/// Nominal rates reaching a target effective rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NominalRatesConfig {
    /// Effective annual rate to match (e.g. inflation)
    pub target_effective_rate: f64,
    /// Compounding frequencies
    pub compounding_periods: Vec<u32>,
}

impl Default for NominalRatesConfig {
    fn default() -> Self {
        Self {
            target_effective_rate: 0.10,
            compounding_periods: vec![1, 2, 4, 12, 365, 730],
        }
    }
}

/// Equivalent periodic rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicRatesConfig {
    /// Annual effective rate
    pub annual_effective_rate: f64,
    /// Sub-annual periods
    pub periods: Vec<u32>,
}

impl Default for PeriodicRatesConfig {
    fn default() -> Self {
        Self {
            annual_effective_rate: 0.05,
            periods: vec![4, 12, 52, 365],
        }
    }
}

/// Savings plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsConfig {
    /// Target future value
    pub future_value: f64,
    /// Horizon in years
    pub years: u32,
    /// Nominal annual rate
    pub annual_rate: f64,
    /// Contributions per year
    pub payments_per_year: u32,
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            future_value: 10_000.0,
            years: 2,
            annual_rate: 0.05,
            payments_per_year: 4,
        }
    }
}

/// Variable-rate deposit comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSchedulesConfig {
    /// Deposit principal
    pub principal: f64,
    /// Compounding periods per year
    pub periods_per_year: u32,
    /// Rising schedule; the falling one is its reverse
    pub rising: Vec<f64>,
    /// Constant nominal annual rate
    pub constant_rate: f64,
    /// Nominal annual rate payouts are reinvested at
    pub reinvestment_rate: f64,
}

impl Default for RateSchedulesConfig {
    fn default() -> Self {
        Self {
            principal: 1.0,
            periods_per_year: 12,
            rising: (1..=12).map(|i| i as f64 / 100.0).collect(),
            constant_rate: 0.065,
            reinvestment_rate: 0.065,
        }
    }
}

/// Loan amortization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmortizationConfig {
    /// Amount borrowed
    pub principal: f64,
    /// Nominal annual rate
    pub annual_rate: f64,
    /// Term in years
    pub term_years: u32,
    /// Instalments per year
    pub periods_per_year: u32,
}

impl Default for AmortizationConfig {
    fn default() -> Self {
        Self {
            principal: 10_000.0,
            annual_rate: 0.10,
            term_years: 1,
            periods_per_year: 4,
        }
    }
}

/// Floating-rate mortgage repricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageConfig {
    /// Amount borrowed
    pub principal: f64,
    /// Term in years
    pub term_years: u32,
    /// Instalments per year
    pub periods_per_year: u32,
    /// Reference rate at origination
    pub reference_rate: f64,
    /// Lender margin over the reference rate
    pub margin: f64,
    /// Reference rate after the reset
    pub reset_reference_rate: f64,
    /// Instalments paid before the reset
    pub paid_periods: u32,
}

impl MortgageConfig {
    /// All-in rate at origination.
    pub fn initial_rate(&self) -> f64 {
        self.reference_rate + self.margin
    }

    /// All-in rate after the reset.
    pub fn reset_rate(&self) -> f64 {
        self.reset_reference_rate + self.margin
    }
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self {
            principal: 500_000.0,
            term_years: 30,
            periods_per_year: 12,
            reference_rate: 0.045,
            margin: 0.01,
            reset_reference_rate: 0.04,
            paid_periods: 3,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from `path`, or defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var(LOG_LEVEL_ENV) {
            self.log_level = log_level;
        }
        self
    }

    /// Validate the global settings and the section `section` reads.
    ///
    /// Other sections are left alone, so a bad value in one command's inputs
    /// does not block the rest. Call this after command-line overrides have
    /// been applied.
    pub fn validate_section(&self, section: Section) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        match section {
            Section::Accrual => {
                for month in &self.accrual.months {
                    let out_of_range = |&d: &u32| d == 0 || d > MAX_DAYS_IN_MONTH;
                    if let Some(days) = month.days_in_month.filter(out_of_range) {
                        errors.push(format!(
                            "accrual month '{}': days_in_month {} outside 1..={}",
                            month.label, days, MAX_DAYS_IN_MONTH
                        ));
                    }
                    if let Err(err) = month.to_statement_month() {
                        errors.push(format!("accrual month '{}': {}", month.label, err));
                    }
                }
            }
            Section::Doubling => {
                check_periods(
                    &mut errors,
                    "doubling.compounding_periods",
                    &self.doubling.compounding_periods,
                );
                if self.doubling.rate <= 0.0 {
                    errors.push(format!("doubling.rate must be positive, got {}", self.doubling.rate));
                }
            }
            Section::NominalRates => check_periods(
                &mut errors,
                "nominal_rates.compounding_periods",
                &self.nominal_rates.compounding_periods,
            ),
            Section::PeriodicRates => {
                check_periods(&mut errors, "periodic_rates.periods", &self.periodic_rates.periods)
            }
            Section::Savings => {
                check_positive(&mut errors, "savings.future_value", self.savings.future_value);
                check_count(&mut errors, "savings.years", self.savings.years);
                check_count(&mut errors, "savings.payments_per_year", self.savings.payments_per_year);
            }
            Section::RateSchedules => {
                if self.rate_schedules.rising.is_empty() {
                    errors.push("rate_schedules.rising cannot be empty".to_string());
                }
                check_count(
                    &mut errors,
                    "rate_schedules.periods_per_year",
                    self.rate_schedules.periods_per_year,
                );
            }
            Section::Amortization => {
                check_positive(&mut errors, "amortization.principal", self.amortization.principal);
                check_count(&mut errors, "amortization.term_years", self.amortization.term_years);
                check_count(
                    &mut errors,
                    "amortization.periods_per_year",
                    self.amortization.periods_per_year,
                );
            }
            Section::Mortgage => {
                check_positive(&mut errors, "mortgage.principal", self.mortgage.principal);
                check_count(&mut errors, "mortgage.term_years", self.mortgage.term_years);
                check_count(&mut errors, "mortgage.periods_per_year", self.mortgage.periods_per_year);

                let mortgage_periods = self
                    .mortgage
                    .term_years
                    .saturating_mul(self.mortgage.periods_per_year);
                if self.mortgage.paid_periods >= mortgage_periods {
                    errors.push(format!(
                        "mortgage.paid_periods {} must be less than the {} instalments of the loan",
                        self.mortgage.paid_periods, mortgage_periods
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from `path` (or defaults) and apply environment overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load_or_default(path)?.with_env_override())
    }
}

fn check_positive(errors: &mut Vec<String>, field: &str, value: f64) {
    if value <= 0.0 {
        errors.push(format!("{} must be positive, got {}", field, value));
    }
}

fn check_count(errors: &mut Vec<String>, field: &str, value: u32) {
    if value == 0 {
        errors.push(format!("{} must be greater than 0", field));
    }
}

fn check_periods(errors: &mut Vec<String>, field: &str, periods: &[u32]) {
    if periods.is_empty() {
        errors.push(format!("{} cannot be empty", field));
    }
    if periods.contains(&0) {
        errors.push(format!("{} entries must be greater than 0", field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SECTIONS: [Section; 8] = [
        Section::Accrual,
        Section::Doubling,
        Section::NominalRates,
        Section::PeriodicRates,
        Section::Savings,
        Section::RateSchedules,
        Section::Amortization,
        Section::Mortgage,
    ];

    fn expect_validation_error(config: &CliConfig, section: Section, needle: &str) {
        match config.validate_section(section) {
            Err(ConfigError::Validation(errors)) => {
                assert!(
                    errors.iter().any(|e| e.contains(needle)),
                    "expected an error mentioning '{}', got {:?}",
                    needle,
                    errors
                );
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_validates() {
        let config = CliConfig::default();
        for section in SECTIONS {
            assert!(config.validate_section(section).is_ok(), "{:?}", section);
        }
    }

    #[test]
    fn test_default_scenarios() {
        let config = CliConfig::default();
        assert_eq!(config.accrual.months.len(), 2);
        assert_eq!(config.accrual.months[0].transactions.len(), 3);
        assert_eq!(config.amortization.periods_per_year, 4);
        assert_eq!(config.rate_schedules.rising.len(), 12);
        assert!((config.mortgage.initial_rate() - 0.055).abs() < 1e-15);
        assert!((config.mortgage.reset_rate() - 0.05).abs() < 1e-15);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [amortization]
            principal = 25000.0
            "#,
        )
        .unwrap();
        assert_eq!(config.amortization.principal, 25_000.0);
        assert_eq!(config.amortization.annual_rate, 0.10);
        assert_eq!(config.savings, SavingsConfig::default());
    }

    #[test]
    fn test_accrual_months_from_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [accrual]
            start_balance = 1000.0

            [[accrual.months]]
            label = "2024-02"
            days_in_month = 29
            transactions = [{ day = 29, amount = 10.0 }, { day = 1, amount = -5.0 }]
            "#,
        )
        .unwrap();

        let month = config.accrual.months[0].to_statement_month().unwrap();
        assert_eq!(month.days_in_month, 29);
        assert_eq!(
            month.transactions.iter().collect::<Vec<_>>(),
            vec![(1, -5.0), (29, 10.0)]
        );
        assert_eq!(config.accrual.annual_rate, 0.05);
    }

    #[test]
    fn test_month_length_from_label() {
        let config: CliConfig = toml::from_str(
            r#"
            [[accrual.months]]
            label = "2024-02"

            [[accrual.months]]
            label = "2023-11"
            transactions = [{ day = 30, amount = 1.0 }]
            "#,
        )
        .unwrap();

        assert_eq!(config.accrual.months[0].resolved_days().unwrap(), 29);
        assert_eq!(config.accrual.months[1].resolved_days().unwrap(), 30);
        assert!(config.validate_section(Section::Accrual).is_ok());
    }

    #[test]
    fn test_validate_month_without_length_or_calendar_label() {
        let mut config = CliConfig::default();
        config.accrual.months[0].days_in_month = None;
        expect_validation_error(&config, Section::Accrual, "October");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n[savings]\nyears = 5").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.savings.years, 5);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[savings\nyears = ").unwrap();
        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_override() {
        std::env::set_var(LOG_LEVEL_ENV, "warn");
        let config = CliConfig::default().with_env_override();
        std::env::remove_var(LOG_LEVEL_ENV);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_validate_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO"] {
            let mut config = CliConfig::default();
            config.log_level = level.to_string();
            assert!(
                config.validate_section(Section::Savings).is_ok(),
                "Log level '{}' should be valid",
                level
            );
        }

        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();
        for section in SECTIONS {
            expect_validation_error(&config, section, "log_level");
        }
    }

    #[test]
    fn test_validate_duplicate_transaction_day() {
        let mut config = CliConfig::default();
        config.accrual.months[0].transactions.push(TransactionConfig {
            day: 5,
            amount: 1.0,
        });
        expect_validation_error(&config, Section::Accrual, "October");
    }

    #[test]
    fn test_validate_zero_period_entry() {
        let mut config = CliConfig::default();
        config.periodic_rates.periods.push(0);
        expect_validation_error(&config, Section::PeriodicRates, "periodic_rates.periods");
    }

    #[test]
    fn test_validate_mortgage_paid_periods() {
        let mut config = CliConfig::default();
        config.mortgage.paid_periods = 360;
        expect_validation_error(&config, Section::Mortgage, "mortgage.paid_periods");
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = CliConfig::default();
        config.log_level = "invalid".to_string();
        config.amortization.principal = 0.0;
        config.amortization.term_years = 0;

        match config.validate_section(Section::Amortization) {
            Err(ConfigError::Validation(errors)) => assert!(errors.len() >= 3),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_ignores_other_sections() {
        let mut config = CliConfig::default();
        config.doubling.rate = 0.0;
        config.savings.years = 0;

        expect_validation_error(&config, Section::Doubling, "doubling.rate");
        expect_validation_error(&config, Section::Savings, "savings.years");
        assert!(config.validate_section(Section::Amortization).is_ok());
        assert!(config.validate_section(Section::Accrual).is_ok());

        config.doubling.rate = 0.05;
        assert!(config.validate_section(Section::Doubling).is_ok());
    }

    #[test]
    fn test_load_with_env_does_not_validate() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[doubling]\nrate = 0.0").unwrap();

        let config = CliConfig::load_with_env(file.path()).unwrap();
        assert_eq!(config.doubling.rate, 0.0);
        assert!(config.validate_section(Section::Mortgage).is_ok());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = error.to_string();
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
