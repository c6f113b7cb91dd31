//! Input model for the cash-flow engine.

pub mod amount;
pub mod cashflow;
pub mod job;
pub mod scenario;

use serde::{Deserialize, Serialize};

pub use cashflow::{
    BenefitSpec, ExpenseLine, InvestmentContribution, OneTimeEvent, RecurringIncomeSource,
    SavingsSnapshot,
};
pub use job::{Job, JobStatus};
pub use scenario::{JobOffer, RampTier, ScenarioBundle};

/// Everything the engine needs besides the scenario levers and the reference date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInputs {
    pub savings: SavingsSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit: Option<BenefitSpec>,
    pub expenses: Vec<ExpenseLine>,
    pub one_time_expenses: Vec<OneTimeEvent>,
    pub investments: Vec<InvestmentContribution>,
    pub one_time_income: Vec<OneTimeEvent>,
    pub recurring_income: Vec<RecurringIncomeSource>,
    pub jobs: Vec<Job>,
}

impl SimulationInputs {
    pub fn with_savings(base_amount: f64) -> Self {
        Self {
            savings: SavingsSnapshot::new(base_amount),
            ..Self::default()
        }
    }

    pub fn initial_balance(&self) -> f64 {
        amount::coerce(self.savings.base_amount) + amount::coerce(self.savings.extra_cash)
    }
}

/// A persisted pairing of inputs and the scenario the user last had active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSnapshot {
    pub inputs: SimulationInputs,
    pub scenario: ScenarioBundle,
}

impl FinancialSnapshot {
    pub fn new(inputs: SimulationInputs, scenario: ScenarioBundle) -> Self {
        Self { inputs, scenario }
    }
}
