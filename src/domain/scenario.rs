//! What-if levers applied on top of the financial inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::lenient;

/// Step change in freelance income that takes effect at a month offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampTier {
    pub month_offset: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub monthly_amount: f64,
}

impl RampTier {
    pub fn new(month_offset: u32, monthly_amount: f64) -> Self {
        Self {
            month_offset,
            monthly_amount,
        }
    }
}

/// Hypothetical new position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOffer {
    #[serde(default, deserialize_with = "lenient")]
    pub salary: f64,
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "lenient")]
    pub annual_raise_pct: f64,
}

impl JobOffer {
    pub fn new(salary: f64, start_date: NaiveDate) -> Self {
        Self {
            salary,
            start_date,
            annual_raise_pct: 0.0,
        }
    }

    pub fn with_annual_raise(mut self, pct: f64) -> Self {
        self.annual_raise_pct = pct;
        self
    }
}

/// Flat record of independent levers. `Default` is the neutral bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioBundle {
    /// Percentage cut applied to non-essential expenses.
    #[serde(deserialize_with = "lenient")]
    pub expense_reduction_pct: f64,
    /// Percentage increase applied to all expenses.
    #[serde(deserialize_with = "lenient")]
    pub expense_raise_pct: f64,
    /// Fallback income used only while no job or job offer pays.
    #[serde(deserialize_with = "lenient")]
    pub side_income_monthly: f64,
    /// Reserve treated as unspendable.
    #[serde(deserialize_with = "lenient")]
    pub emergency_floor: f64,
    /// The reduction only takes effect on or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeze_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient")]
    pub partner_income: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_start_date: Option<NaiveDate>,
    pub freelance_ramp: Vec<RampTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_offer: Option<JobOffer>,
    #[serde(deserialize_with = "lenient")]
    pub benefit_delay_weeks: f64,
    #[serde(deserialize_with = "lenient")]
    pub benefit_cut_weeks: f64,
}

impl ScenarioBundle {
    /// Every lever zeroed.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Neutral bundle with only the job offer substituted.
    pub fn job_only(offer: JobOffer) -> Self {
        Self {
            job_offer: Some(offer),
            ..Self::default()
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_neutral_bundle() {
        let bundle: ScenarioBundle = serde_json::from_str("{}").unwrap();
        assert!(bundle.is_neutral());
    }

    #[test]
    fn null_levers_coerce_to_zero() {
        let bundle: ScenarioBundle = serde_json::from_str(
            r#"{"expense_reduction_pct": null, "emergency_floor": "500", "benefit_cut_weeks": 4}"#,
        )
        .unwrap();
        assert_eq!(bundle.expense_reduction_pct, 0.0);
        assert_eq!(bundle.emergency_floor, 500.0);
        assert_eq!(bundle.benefit_cut_weeks, 4.0);
    }

    #[test]
    fn job_only_keeps_other_levers_neutral() {
        let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let bundle = ScenarioBundle::job_only(JobOffer::new(5000.0, start));
        assert_eq!(bundle.job_offer.as_ref().map(|o| o.salary), Some(5000.0));
        assert_eq!(bundle.side_income_monthly, 0.0);
        assert!(!bundle.is_neutral());
    }
}
