//! Closed-form rate mathematics.
//!
//! - `conversions`: nominal, effective, periodic, and continuous rate equivalences
//! - `doubling`: time for money to double under each compounding convention

pub mod conversions;
pub mod doubling;

pub use conversions::{
    continuous_rate_for_effective, effective_annual_rate, effective_rate_for_continuous,
    equivalent_periodic_rate, nominal_rate_for_effective,
};
pub use doubling::{
    doubling_time, doubling_time_compound, doubling_time_continuous, doubling_time_simple,
};
