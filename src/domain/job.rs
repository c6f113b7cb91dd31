use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{amount::lenient, cashflow::within_bounds};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Active,
    Inactive,
    Offered,
}

/// Salaried position; several may be active at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub monthly_salary: f64,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Job {
    pub fn active(title: impl Into<String>, monthly_salary: f64) -> Self {
        Self {
            title: title.into(),
            monthly_salary,
            status: JobStatus::Active,
            start_date: None,
            end_date: None,
        }
    }

    pub fn starting(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn ending(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// True when the job is active and `date` sits inside its optional start/end bounds.
    pub fn pays_on(&self, date: NaiveDate) -> bool {
        self.status == JobStatus::Active && within_bounds(date, self.start_date, self.end_date)
    }
}
