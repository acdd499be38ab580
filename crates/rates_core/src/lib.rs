//! # rates_core: Rate Conventions for ratebook
//!
//! ## Layer 1 (Foundation) Role
//!
//! rates_core is the bottom layer of the workspace, providing:
//! - Error types: `RateError`, `DateError` (`types::error`)
//! - Compounding frequencies: `Frequency` (`types::frequency`)
//! - Compounding conventions: `Compounding` (`types::compounding`)
//! - Calendar helpers: `days_in_month` (`types::time`)
//! - Nominal/effective rate conversions (`math::conversions`)
//! - Doubling time under each convention (`math::doubling`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other ratebook crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Calendar arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use rates_core::math::conversions::{effective_annual_rate, nominal_rate_for_effective};
//! use rates_core::types::{Compounding, Frequency};
//!
//! // 10% nominal compounded quarterly
//! let ear = effective_annual_rate(0.10_f64, Frequency::Quarterly.periods_per_year()).unwrap();
//! assert!((ear - 0.103813).abs() < 1e-6);
//!
//! // Nominal rate that reproduces that EAR with quarterly compounding
//! let nominal = nominal_rate_for_effective(ear, 4).unwrap();
//! assert!((nominal - 0.10).abs() < 1e-12);
//!
//! // Growth factors per convention
//! let factor = Compounding::Continuous.growth_factor(0.05, 1.0).unwrap();
//! assert!((factor - 0.05_f64.exp()).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Frequency` and `Compounding`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
