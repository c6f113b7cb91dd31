use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::domain::{amount, ScenarioBundle, SimulationInputs};

use super::{
    interpolate::{self, Runout},
    normalizer::NormalizedInputs,
    types::{DataPoint, SimulationOptions, SimulationResult},
    window::TemporalResolver,
};

/// Projects the cash balance month by month from `today`.
///
/// Pure with respect to its arguments: the same inputs always produce the same result,
/// and nothing outside the returned value is touched.
pub fn simulate(
    inputs: &SimulationInputs,
    scenario: &ScenarioBundle,
    today: NaiveDate,
    options: &SimulationOptions,
) -> SimulationResult {
    let normalized = NormalizedInputs::build(inputs, scenario, today);
    let resolver = TemporalResolver::new(today, inputs, scenario);
    let floor = amount::coerce(scenario.emergency_floor);
    let horizon = options.horizon();
    let tail = options.tail_months as f64;

    let mut balance = normalized.initial_balance;
    let mut runout: Option<Runout> = None;
    let mut data_points = Vec::with_capacity(horizon as usize + 1);
    data_points.push(DataPoint::new(today, 0, balance, floor, None));

    for month in 1..=horizon {
        let date = resolver.date_at(month);
        let income =
            resolver.income_at(month).total() + normalized.one_time_income.amount(month);
        let one_time_cost = normalized.one_time_expenses.get(month);
        let expenses = normalized.recurring_expenses(resolver.reduction_active(date))
            + normalized.monthly_investments
            + one_time_cost.unwrap_or(0.0);
        let net_burn = expenses - income;

        let previous_effective = balance - floor;
        balance -= net_burn;
        let effective = balance - floor;

        if runout.is_none() && effective <= 0.0 {
            let crossing = interpolate::locate(today, month, previous_effective, net_burn);
            debug!(
                month,
                runout_month = crossing.month,
                runout_date = %crossing.date,
                "effective balance reached the floor"
            );
            runout = Some(crossing);
        }

        trace!(month, income, expenses, balance, "simulated month");
        data_points.push(DataPoint::new(date, month, balance, floor, one_time_cost));

        if let Some(crossing) = runout {
            if month as f64 >= crossing.month + tail {
                break;
            }
        }
    }

    let effective_expenses = normalized.effective_expenses();
    let current_income = resolver.income_at(0).total();
    let current_net_burn = effective_expenses + normalized.monthly_investments - current_income;
    let benefit = resolver.benefit_window();

    SimulationResult {
        data_points,
        runout_date: runout.map(|crossing| crossing.date),
        total_runway_months: runout.map(|crossing| crossing.month),
        current_net_burn,
        effective_expenses,
        monthly_benefits: benefit.map_or(0.0, |window| window.monthly_amount),
        monthly_investments: normalized.monthly_investments,
        benefit_end_date: benefit.map(|window| window.end),
    }
}
