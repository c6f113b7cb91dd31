//! Cash-flow simulation engine.
//!
//! The stages run in order for every call: [`normalizer`] aggregates the inputs,
//! [`window`] resolves date-gated effects per month, [`engine`] walks the months, and
//! [`interpolate`] pins the runout to a calendar date.

pub mod engine;
pub mod interpolate;
pub mod normalizer;
pub mod render;
pub mod types;
pub mod window;

pub use engine::simulate;
pub use interpolate::Runout;
pub use normalizer::{MonthBuckets, NormalizedInputs};
pub use types::{
    DataPoint, SimulationOptions, SimulationResult, DEFAULT_TAIL_MONTHS, MAX_HORIZON_MONTHS,
};
pub use window::{BenefitWindow, IncomeBreakdown, TemporalResolver, WEEKS_PER_MONTH};
