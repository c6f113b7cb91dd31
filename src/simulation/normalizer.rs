//! Reduces the heterogeneous input collections to monthly aggregates.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::{
    domain::{amount, OneTimeEvent, ScenarioBundle, SimulationInputs},
    time::months_between,
};

/// One-time amounts keyed by the month index they land in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthBuckets(BTreeMap<u32, f64>);

impl MonthBuckets {
    pub fn from_events(events: &[OneTimeEvent], today: NaiveDate) -> Self {
        let mut buckets = BTreeMap::new();
        for event in events {
            if let Some(month) = bucket_month(today, event.date) {
                *buckets.entry(month).or_insert(0.0) += amount::coerce(event.amount);
            }
        }
        Self(buckets)
    }

    /// Amount landing in `month`, if any event landed there.
    pub fn get(&self, month: u32) -> Option<f64> {
        self.0.get(&month).copied()
    }

    pub fn amount(&self, month: u32) -> f64 {
        self.get(month).unwrap_or(0.0)
    }
}

/// Month index an event dated `date` lands in, or `None` when it is already past.
///
/// Events never land in month 0; anything due before the first simulated month is
/// charged in month 1.
pub fn bucket_month(today: NaiveDate, date: NaiveDate) -> Option<u32> {
    if date < today {
        return None;
    }
    let offset = months_between(today, date).max(0) as u32;
    Some(offset + 1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInputs {
    pub initial_balance: f64,
    pub essential_total: f64,
    pub non_essential_total: f64,
    pub reduction_factor: f64,
    pub raise_factor: f64,
    pub monthly_investments: f64,
    pub one_time_expenses: MonthBuckets,
    pub one_time_income: MonthBuckets,
}

impl NormalizedInputs {
    pub fn build(inputs: &SimulationInputs, scenario: &ScenarioBundle, today: NaiveDate) -> Self {
        let mut essential_total = 0.0;
        let mut non_essential_total = 0.0;
        for line in &inputs.expenses {
            if line.essential {
                essential_total += amount::coerce(line.monthly_amount);
            } else {
                non_essential_total += amount::coerce(line.monthly_amount);
            }
        }

        let monthly_investments = inputs
            .investments
            .iter()
            .filter(|contribution| contribution.active)
            .map(|contribution| amount::coerce(contribution.monthly_amount))
            .fold(0.0, |total, value| total + value);

        let skipped = count_non_finite(inputs);
        if skipped > 0 {
            warn!("{skipped} non-finite amount(s) in simulation inputs were treated as zero");
        }

        Self {
            initial_balance: inputs.initial_balance(),
            essential_total,
            non_essential_total,
            reduction_factor: 1.0 - amount::percent(scenario.expense_reduction_pct),
            raise_factor: 1.0 + amount::percent(scenario.expense_raise_pct),
            monthly_investments,
            one_time_expenses: MonthBuckets::from_events(&inputs.one_time_expenses, today),
            one_time_income: MonthBuckets::from_events(&inputs.one_time_income, today),
        }
    }

    /// Recurring expenses with the reduction applied; the current-month snapshot value.
    pub fn effective_expenses(&self) -> f64 {
        self.recurring_expenses(true)
    }

    /// Recurring expenses for a month, reducing the non-essential pool only when
    /// `reduced` is set. The raise always applies.
    pub fn recurring_expenses(&self, reduced: bool) -> f64 {
        let discretionary = if reduced {
            self.non_essential_total * self.reduction_factor
        } else {
            self.non_essential_total
        };
        (self.essential_total + discretionary) * self.raise_factor
    }
}

fn count_non_finite(inputs: &SimulationInputs) -> usize {
    let amounts = [inputs.savings.base_amount, inputs.savings.extra_cash]
        .into_iter()
        .chain(inputs.expenses.iter().map(|line| line.monthly_amount))
        .chain(inputs.investments.iter().map(|item| item.monthly_amount))
        .chain(inputs.one_time_expenses.iter().map(|event| event.amount))
        .chain(inputs.one_time_income.iter().map(|event| event.amount))
        .chain(inputs.recurring_income.iter().map(|source| source.monthly_amount))
        .chain(inputs.jobs.iter().map(|job| job.monthly_salary));
    amounts.filter(|value| !value.is_finite()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExpenseLine, InvestmentContribution};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_events_are_dropped() {
        let today = date(2025, 1, 15);
        assert_eq!(bucket_month(today, date(2025, 1, 14)), None);
        assert_eq!(bucket_month(today, today), Some(1));
        assert_eq!(bucket_month(today, date(2025, 2, 10)), Some(1));
        assert_eq!(bucket_month(today, date(2025, 3, 15)), Some(3));
    }

    #[test]
    fn buckets_accumulate_events_in_the_same_month() {
        let today = date(2025, 1, 1);
        let events = vec![
            OneTimeEvent::new("car repair", date(2025, 4, 2), 600.0),
            OneTimeEvent::new("dentist", date(2025, 4, 20), 150.0),
            OneTimeEvent::new("old bill", date(2024, 12, 1), 999.0),
        ];
        let buckets = MonthBuckets::from_events(&events, today);
        assert_eq!(buckets.get(4), Some(750.0));
        assert_eq!(buckets.get(1), None);
        assert_eq!(buckets.amount(3), 0.0);
    }

    #[test]
    fn reduction_only_touches_non_essential_pool() {
        let mut inputs = SimulationInputs::with_savings(10_000.0);
        inputs.expenses = vec![
            ExpenseLine::essential("rent", 1000.0),
            ExpenseLine::discretionary("dining", 400.0),
        ];
        inputs.investments = vec![
            InvestmentContribution::new("index fund", 200.0, true),
            InvestmentContribution::new("paused", 500.0, false),
        ];
        let scenario = ScenarioBundle {
            expense_reduction_pct: 50.0,
            expense_raise_pct: 10.0,
            ..ScenarioBundle::default()
        };

        let normalized = NormalizedInputs::build(&inputs, &scenario, date(2025, 1, 1));
        assert!((normalized.effective_expenses() - 1320.0).abs() < 1e-9);
        assert!((normalized.recurring_expenses(false) - 1540.0).abs() < 1e-9);
        assert_eq!(normalized.monthly_investments, 200.0);
    }

    #[test]
    fn non_finite_amounts_count_as_zero() {
        let mut inputs = SimulationInputs::with_savings(f64::NAN);
        inputs.expenses = vec![ExpenseLine::essential("rent", f64::INFINITY)];
        let normalized =
            NormalizedInputs::build(&inputs, &ScenarioBundle::default(), date(2025, 1, 1));
        assert_eq!(normalized.initial_balance, 0.0);
        assert_eq!(normalized.essential_total, 0.0);
    }
}
