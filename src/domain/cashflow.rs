//! Savings, recurring outflows, and dated one-off events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::lenient;

/// Cash available on day zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsSnapshot {
    /// Sum of active cash-like balances.
    #[serde(default, deserialize_with = "lenient")]
    pub base_amount: f64,
    /// One-time injection such as asset-sale proceeds.
    #[serde(default, deserialize_with = "lenient")]
    pub extra_cash: f64,
}

impl SavingsSnapshot {
    pub fn new(base_amount: f64) -> Self {
        Self {
            base_amount,
            extra_cash: 0.0,
        }
    }
}

/// Unemployment-style weekly benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitSpec {
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "lenient")]
    pub weekly_amount: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub duration_weeks: f64,
}

impl BenefitSpec {
    pub fn new(start_date: NaiveDate, weekly_amount: f64, duration_weeks: f64) -> Self {
        Self {
            start_date,
            weekly_amount,
            duration_weeks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub monthly_amount: f64,
    #[serde(default)]
    pub essential: bool,
}

impl ExpenseLine {
    pub fn essential(name: impl Into<String>, monthly_amount: f64) -> Self {
        Self {
            name: name.into(),
            monthly_amount,
            essential: true,
        }
    }

    pub fn discretionary(name: impl Into<String>, monthly_amount: f64) -> Self {
        Self {
            name: name.into(),
            monthly_amount,
            essential: false,
        }
    }
}

/// Recurring contribution to an investment account; counted as an outflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentContribution {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub monthly_amount: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl InvestmentContribution {
    pub fn new(name: impl Into<String>, monthly_amount: f64, active: bool) -> Self {
        Self {
            name: name.into(),
            monthly_amount,
            active,
        }
    }
}

fn default_active() -> bool {
    true
}

/// A dated one-off expense or income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneTimeEvent {
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient")]
    pub amount: f64,
}

impl OneTimeEvent {
    pub fn new(description: impl Into<String>, date: NaiveDate, amount: f64) -> Self {
        Self {
            description: description.into(),
            date,
            amount,
        }
    }
}

/// Income paid monthly inside an optional date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringIncomeSource {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub monthly_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl RecurringIncomeSource {
    pub fn new(name: impl Into<String>, monthly_amount: f64) -> Self {
        Self {
            name: name.into(),
            monthly_amount,
            start_date: None,
            end_date: None,
        }
    }

    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Inclusive check against the optional bounds.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        within_bounds(date, self.start_date, self.end_date)
    }
}

pub(crate) fn within_bounds(
    date: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    start.map_or(true, |start| start <= date) && end.map_or(true, |end| end >= date)
}
