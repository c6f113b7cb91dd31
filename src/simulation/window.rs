//! Date-gated income and expense effects, evaluated per month offset.

use chrono::NaiveDate;

use crate::{
    domain::{amount, BenefitSpec, RampTier, ScenarioBundle, SimulationInputs},
    time::{add_weeks, months_between, shift_month},
};

/// Weeks-per-month conversion used for weekly benefits.
pub const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

/// Benefit eligibility after the scenario's delay and cut are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenefitWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub monthly_amount: f64,
}

impl BenefitWindow {
    pub fn resolve(spec: &BenefitSpec, scenario: &ScenarioBundle) -> Self {
        let start = add_weeks(spec.start_date, amount::coerce(scenario.benefit_delay_weeks));
        let duration = (amount::coerce(spec.duration_weeks)
            - amount::coerce(scenario.benefit_cut_weeks))
        .max(0.0);
        Self {
            start,
            end: add_weeks(start, duration),
            monthly_amount: amount::coerce(spec.weekly_amount) * WEEKS_PER_MONTH,
        }
    }

    /// Exclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date > self.start && date < self.end
    }
}

/// Income for one month split by source. One-time income is tracked separately.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IncomeBreakdown {
    pub jobs: f64,
    pub job_offer: f64,
    pub side_income: f64,
    pub partner: f64,
    pub recurring: f64,
    pub freelance: f64,
    pub benefits: f64,
}

impl IncomeBreakdown {
    pub fn total(&self) -> f64 {
        self.jobs
            + self.job_offer
            + self.side_income
            + self.partner
            + self.recurring
            + self.freelance
            + self.benefits
    }

    pub fn employed(&self) -> bool {
        self.jobs > 0.0 || self.job_offer > 0.0
    }
}

/// Resolves every time-dependent effect for an arbitrary month offset from `today`.
#[derive(Debug, Clone)]
pub struct TemporalResolver<'a> {
    today: NaiveDate,
    inputs: &'a SimulationInputs,
    scenario: &'a ScenarioBundle,
    benefit: Option<BenefitWindow>,
}

impl<'a> TemporalResolver<'a> {
    pub fn new(
        today: NaiveDate,
        inputs: &'a SimulationInputs,
        scenario: &'a ScenarioBundle,
    ) -> Self {
        let benefit = inputs
            .benefit
            .as_ref()
            .map(|spec| BenefitWindow::resolve(spec, scenario));
        Self {
            today,
            inputs,
            scenario,
            benefit,
        }
    }

    pub fn benefit_window(&self) -> Option<BenefitWindow> {
        self.benefit
    }

    /// Calendar date of month offset `month`.
    pub fn date_at(&self, month: u32) -> NaiveDate {
        shift_month(self.today, month as i32)
    }

    /// Whether the non-essential reduction is in force on `date`.
    pub fn reduction_active(&self, date: NaiveDate) -> bool {
        match self.scenario.freeze_date {
            Some(freeze) => date >= freeze,
            None => true,
        }
    }

    pub fn job_income(&self, date: NaiveDate) -> f64 {
        self.inputs
            .jobs
            .iter()
            .filter(|job| job.pays_on(date))
            .map(|job| amount::coerce(job.monthly_salary))
            .fold(0.0, |total, value| total + value)
    }

    /// Offer salary once started, compounded by full elapsed years when a raise is set.
    pub fn job_offer_income(&self, date: NaiveDate) -> f64 {
        let Some(offer) = &self.scenario.job_offer else {
            return 0.0;
        };
        if date < offer.start_date {
            return 0.0;
        }
        let salary = amount::coerce(offer.salary);
        let rate = amount::percent(offer.annual_raise_pct);
        if rate <= 0.0 {
            return salary;
        }
        let years = months_between(offer.start_date, date).max(0) / 12;
        salary * (1.0 + rate).powi(years)
    }

    pub fn partner_income(&self, date: NaiveDate) -> f64 {
        let started = self
            .scenario
            .partner_start_date
            .map_or(true, |start| date >= start);
        if started {
            amount::coerce(self.scenario.partner_income)
        } else {
            0.0
        }
    }

    pub fn recurring_income(&self, date: NaiveDate) -> f64 {
        self.inputs
            .recurring_income
            .iter()
            .filter(|source| source.is_active_on(date))
            .map(|source| amount::coerce(source.monthly_amount))
            .fold(0.0, |total, value| total + value)
    }

    /// Amount of the most recently started ramp tier, if any has started.
    pub fn freelance_income(&self, month: u32) -> f64 {
        current_tier(&self.scenario.freelance_ramp, month)
            .map(|tier| amount::coerce(tier.monthly_amount))
            .unwrap_or(0.0)
    }

    pub fn benefit_income(&self, date: NaiveDate) -> f64 {
        match self.benefit {
            Some(window) if window.contains(date) => window.monthly_amount,
            _ => 0.0,
        }
    }

    /// Every recurring income source for month offset `month`.
    pub fn income_at(&self, month: u32) -> IncomeBreakdown {
        let date = self.date_at(month);
        let mut income = IncomeBreakdown {
            jobs: self.job_income(date),
            job_offer: self.job_offer_income(date),
            partner: self.partner_income(date),
            recurring: self.recurring_income(date),
            freelance: self.freelance_income(month),
            benefits: self.benefit_income(date),
            ..IncomeBreakdown::default()
        };
        if !income.employed() {
            income.side_income = amount::coerce(self.scenario.side_income_monthly);
        }
        income
    }
}

fn current_tier(tiers: &[RampTier], month: u32) -> Option<&RampTier> {
    tiers
        .iter()
        .filter(|tier| tier.month_offset <= month)
        .max_by_key(|tier| tier.month_offset)
}
