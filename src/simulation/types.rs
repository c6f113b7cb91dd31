use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hard upper bound on simulated months.
pub const MAX_HORIZON_MONTHS: u32 = 120;
/// Months kept after the runout so charts show a short tail below the floor.
pub const DEFAULT_TAIL_MONTHS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOptions {
    pub horizon_months: u32,
    pub tail_months: u32,
}

impl SimulationOptions {
    /// Horizon clamped to [`MAX_HORIZON_MONTHS`].
    pub fn horizon(&self) -> u32 {
        self.horizon_months.min(MAX_HORIZON_MONTHS)
    }
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            horizon_months: MAX_HORIZON_MONTHS,
            tail_months: DEFAULT_TAIL_MONTHS,
        }
    }
}

/// One simulated month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub month_index: u32,
    /// Balance above the emergency floor, rounded and never negative.
    pub display_balance: f64,
    /// Unclamped rounded balance.
    pub raw_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_time_cost: Option<f64>,
}

impl DataPoint {
    pub(crate) fn new(
        date: NaiveDate,
        month_index: u32,
        balance: f64,
        floor: f64,
        one_time_cost: Option<f64>,
    ) -> Self {
        Self {
            date,
            month_index,
            display_balance: round_amount(balance - floor).max(0.0),
            raw_balance: round_amount(balance),
            one_time_cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub data_points: Vec<DataPoint>,
    pub runout_date: Option<NaiveDate>,
    /// Fractional months until the effective balance reaches the floor.
    pub total_runway_months: Option<f64>,
    pub current_net_burn: f64,
    pub effective_expenses: f64,
    pub monthly_benefits: f64,
    pub monthly_investments: f64,
    pub benefit_end_date: Option<NaiveDate>,
}

impl SimulationResult {
    pub fn runs_out(&self) -> bool {
        self.runout_date.is_some()
    }

    pub fn point(&self, month_index: u32) -> Option<&DataPoint> {
        self.data_points
            .iter()
            .find(|point| point.month_index == month_index)
    }

    pub fn last_point(&self) -> Option<&DataPoint> {
        self.data_points.last()
    }
}

/// Rounds to whole units, normalising negative zero.
pub(crate) fn round_amount(value: f64) -> f64 {
    let rounded = value.round();
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
