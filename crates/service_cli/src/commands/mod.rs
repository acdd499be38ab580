//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands compute a
//! serialisable report first, then render it in the requested format.

pub mod accrual;
pub mod amortization;
pub mod doubling;
pub mod mortgage;
pub mod nominal_rates;
pub mod periodic_rates;
pub mod rate_schedules;
pub mod savings;
