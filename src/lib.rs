//! Runway Core projects how long cash reserves last under a base case and under
//! what-if scenarios, month by month, down to a fractional runout date.
//!
//! ```
//! use chrono::NaiveDate;
//! use runway_core::{
//!     domain::{ExpenseLine, ScenarioBundle, SimulationInputs},
//!     simulation::{simulate, SimulationOptions},
//! };
//!
//! let mut inputs = SimulationInputs::with_savings(1200.0);
//! inputs.expenses.push(ExpenseLine::essential("rent", 200.0));
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let options = SimulationOptions::default();
//! let result = simulate(&inputs, &ScenarioBundle::neutral(), today, &options);
//! assert_eq!(result.total_runway_months, Some(6.0));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod simulation;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Runway Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
