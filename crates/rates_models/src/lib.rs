//! # Rates Models (L2: Business Logic)
//!
//! Loan, deposit, and savings calculations built on `rates_core` conventions.
//!
//! This crate provides:
//! - Amortization schedules, equal-principal and annuity (`amortization`)
//! - Annuity repricing after a rate reset (`amortization::annuity`)
//! - Day-weighted interest accrual on a fluctuating balance (`accrual`)
//! - Required periodic contributions for a savings target (`savings`)
//! - Effective annual rates of variable monthly rate schedules (`rate_schedule`)
//!
//! ## Design Principles
//!
//! - **Pure functions** over immutable inputs: identical inputs give bit-identical outputs
//! - **Validate up front**: every entry point returns `Result<_, RateError>`
//! - **Explicit ordering**: transaction sets iterate by day, never by insertion order

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod accrual;
pub mod amortization;
pub mod rate_schedule;
pub mod savings;

pub use rates_core::types::RateError;
