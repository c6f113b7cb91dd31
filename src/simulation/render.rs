//! Plain-text views of a [`SimulationResult`].

use std::fmt::Write;

use super::types::SimulationResult;

/// Multi-line headline figures.
pub fn summary(result: &SimulationResult) -> String {
    let mut out = String::new();
    let runway = match (result.total_runway_months, result.runout_date) {
        (Some(months), Some(date)) => format!("{months:.1} months (runs out {date})"),
        _ => "does not run out within the horizon".to_string(),
    };
    let _ = writeln!(out, "Runway:              {runway}");
    let _ = writeln!(out, "Monthly net burn:    {:.2}", result.current_net_burn);
    let _ = writeln!(out, "Effective expenses:  {:.2}", result.effective_expenses);
    let _ = writeln!(out, "Monthly investments: {:.2}", result.monthly_investments);
    let _ = write!(out, "Monthly benefits:    {:.2}", result.monthly_benefits);
    if let Some(end) = result.benefit_end_date {
        let _ = write!(out, " (until {end})");
    }
    out
}

/// One row per simulated month.
pub fn month_table(result: &SimulationResult) -> String {
    let mut out = String::from("month  date        balance      raw  one-time");
    for point in &result.data_points {
        let cost = point
            .one_time_cost
            .map(|cost| format!("{cost:.0}"))
            .unwrap_or_default();
        let row = format!(
            "{:>5}  {}  {:>7.0}  {:>7.0}  {}",
            point.month_index, point.date, point.display_balance, point.raw_balance, cost
        );
        out.push('\n');
        out.push_str(row.trim_end());
    }
    out
}
