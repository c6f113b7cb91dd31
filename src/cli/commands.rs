use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tracing::info;

use crate::{
    config::Config,
    core::services::{ScenarioReport, ScenarioService},
    domain::FinancialSnapshot,
    simulation::{render, SimulationResult},
    storage::{ScenarioTemplate, TemplateStore},
    time::Clock,
    utils::persistence::load_snapshot_from_file,
};

use super::{args::ParsedArgs, output, CliContext, CliError};

pub fn simulate(
    args: &ParsedArgs,
    context: &CliContext,
    clock: &dyn Clock,
) -> Result<(), CliError> {
    let mut config = context.config.load()?;
    let (path, snapshot) = load_input(args, &config)?;
    let today = args.today.unwrap_or_else(|| clock.today());
    let result = ScenarioService::current(&snapshot, today, &config.simulation_options());
    info!(snapshot = %path.display(), %today, "simulation complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::section(format!("Runway from {today}"));
        output::info(render::summary(&result));
        if args.months {
            output::section("Monthly balance");
            output::info(render::month_table(&result));
        }
        if !result.runs_out() {
            output::success("Savings last beyond the simulated horizon.");
        }
    }

    remember_snapshot(context, &mut config, &path)
}

pub fn compare(
    args: &ParsedArgs,
    context: &CliContext,
    clock: &dyn Clock,
) -> Result<(), CliError> {
    let mut config = context.config.load()?;
    let (path, snapshot) = load_input(args, &config)?;
    let today = args.today.unwrap_or_else(|| clock.today());

    let mut targets = ScenarioService::template_targets(&context.templates, &args.templates)?;
    targets.extend(args.jobs.iter().cloned());
    if targets.is_empty() {
        output::warning("No --template or --job given; comparing against the baseline only.");
    }
    let report = ScenarioService::compose(&snapshot, &targets, today, &config.simulation_options());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, today);
    }

    remember_snapshot(context, &mut config, &path)
}

pub fn template(args: &ParsedArgs, context: &CliContext) -> Result<(), CliError> {
    match (args.positional(0), args.positional(1), args.positional(2)) {
        (Some("save"), Some(name), Some(file)) => {
            let snapshot = load_snapshot_from_file(Path::new(file))?;
            context.templates.save(&ScenarioTemplate::new(name, snapshot))?;
            output::success(format!("Template `{name}` saved."));
            Ok(())
        }
        (Some("list"), None, None) => {
            let names = context.templates.list()?;
            if names.is_empty() {
                output::info("No templates saved.");
            }
            for name in names {
                output::info(name);
            }
            Ok(())
        }
        (Some("remove"), Some(name), None) => {
            context.templates.remove(name)?;
            output::success(format!("Template `{name}` removed."));
            Ok(())
        }
        _ => Err(CliError::Usage("template expects save, list or remove".into())),
    }
}

pub fn config(args: &ParsedArgs, context: &CliContext) -> Result<(), CliError> {
    match (args.positional(0), args.positional(1), args.positional(2)) {
        (Some("show"), None, None) => {
            let config = context.config.load()?;
            output::section(format!("Configuration ({})", context.config.path().display()));
            output::info(serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        (Some("set"), Some(key), Some(value)) => {
            let mut config = context.config.load()?;
            config.set(key, value)?;
            context.config.save(&config)?;
            output::success(format!("{key} updated."));
            Ok(())
        }
        _ => Err(CliError::Usage("config expects show or set <key> <value>".into())),
    }
}

/// Resolves the snapshot path (argument, else the last one used) and applies the
/// configured default floor when the snapshot leaves it unset.
fn load_input(
    args: &ParsedArgs,
    config: &Config,
) -> Result<(PathBuf, FinancialSnapshot), CliError> {
    let path = args
        .positional(0)
        .map(PathBuf::from)
        .or_else(|| config.last_snapshot.clone())
        .ok_or_else(|| CliError::Usage("no snapshot file given and none used before".into()))?;
    let mut snapshot = load_snapshot_from_file(&path)?;
    if snapshot.scenario.emergency_floor == 0.0 {
        if let Some(floor) = config.default_emergency_floor {
            snapshot.scenario.emergency_floor = floor;
        }
    }
    Ok((path, snapshot))
}

fn remember_snapshot(
    context: &CliContext,
    config: &mut Config,
    path: &Path,
) -> Result<(), CliError> {
    let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if config.last_snapshot.as_deref() == Some(path.as_path()) {
        return Ok(());
    }
    config.last_snapshot = Some(path);
    context.config.save(config)?;
    Ok(())
}

fn print_report(report: &ScenarioReport, today: NaiveDate) {
    output::section(format!("Scenario comparison from {today}"));
    output::info(format!("Baseline: {}", runway_label(&report.baseline)));
    output::info(format!(
        "Current:  {}  ({} vs baseline)",
        runway_label(&report.current),
        output::delta(report.current_vs_baseline())
    ));
    for outcome in &report.comparisons {
        output::info(format!(
            "{}: {}  ({} vs current)",
            outcome.label,
            runway_label(&outcome.result),
            output::delta(outcome.runway_delta)
        ));
    }
}

fn runway_label(result: &SimulationResult) -> String {
    match (result.total_runway_months, result.runout_date) {
        (Some(months), Some(date)) => format!("{months:.1} months, runs out {date}"),
        _ => "no runout within horizon".to_string(),
    }
}
