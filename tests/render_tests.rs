mod common;

use common::{burn_inputs, date};
use insta::assert_snapshot;
use runway_core::{
    domain::{BenefitSpec, ScenarioBundle},
    simulation::{render, simulate, SimulationOptions},
};

#[test]
fn summary_for_a_draining_plan() {
    let result = simulate(
        &burn_inputs(1_200.0, 200.0),
        &ScenarioBundle::neutral(),
        date(2025, 1, 1),
        &SimulationOptions::default(),
    );
    assert_snapshot!(render::summary(&result), @r###"
    Runway:              6.0 months (runs out 2025-07-01)
    Monthly net burn:    200.00
    Effective expenses:  200.00
    Monthly investments: 0.00
    Monthly benefits:    0.00
    "###);
}

#[test]
fn summary_mentions_benefit_end() {
    let mut inputs = burn_inputs(1_000_000.0, 100.0);
    inputs.benefit = Some(BenefitSpec::new(date(2025, 1, 1), 120.0, 26.0));
    let result = simulate(
        &inputs,
        &ScenarioBundle::neutral(),
        date(2025, 1, 1),
        &SimulationOptions::default(),
    );
    assert_snapshot!(render::summary(&result), @r###"
    Runway:              does not run out within the horizon
    Monthly net burn:    100.00
    Effective expenses:  100.00
    Monthly investments: 0.00
    Monthly benefits:    520.00 (until 2025-07-02)
    "###);
}

#[test]
fn month_table_lists_every_point() {
    let result = simulate(
        &burn_inputs(1_200.0, 200.0),
        &ScenarioBundle::neutral(),
        date(2025, 1, 1),
        &SimulationOptions::default(),
    );
    let table = render::month_table(&result);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "month  date        balance      raw  one-time");
    assert_eq!(lines[1], "    0  2025-01-01     1200     1200");
    assert_eq!(lines[7], "    6  2025-07-01        0        0");
    assert_eq!(lines[10], "    9  2025-10-01        0     -600");
}

#[test]
fn month_table_shows_one_time_costs() {
    let mut inputs = burn_inputs(5_000.0, 100.0);
    inputs
        .one_time_expenses
        .push(runway_core::domain::OneTimeEvent::new("laptop", date(2025, 2, 10), 900.0));
    let options = SimulationOptions {
        horizon_months: 3,
        ..SimulationOptions::default()
    };
    let result = simulate(&inputs, &ScenarioBundle::neutral(), date(2025, 1, 1), &options);
    let table = render::month_table(&result);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[2], "    1  2025-02-01     4900     4900");
    assert_eq!(lines[3], "    2  2025-03-01     3900     3900  900");
}
