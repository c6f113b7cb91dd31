//! Runs the engine once per scenario and lines the results up for comparison.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::{
    domain::{FinancialSnapshot, JobOffer, ScenarioBundle, SimulationInputs},
    simulation::{simulate, SimulationOptions, SimulationResult},
    storage::{ScenarioTemplate, TemplateStore},
};

use super::ServiceResult;

/// Something to simulate next to the current scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonTarget {
    /// A full alternate snapshot, simulated with its own inputs and levers.
    Snapshot {
        label: String,
        snapshot: FinancialSnapshot,
    },
    /// The current inputs with only a job offer applied.
    JobScenario { label: String, offer: JobOffer },
}

impl ComparisonTarget {
    pub fn label(&self) -> &str {
        match self {
            ComparisonTarget::Snapshot { label, .. } => label,
            ComparisonTarget::JobScenario { label, .. } => label,
        }
    }
}

impl From<ScenarioTemplate> for ComparisonTarget {
    fn from(template: ScenarioTemplate) -> Self {
        ComparisonTarget::Snapshot {
            label: template.name,
            snapshot: template.snapshot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonOutcome {
    pub label: String,
    pub result: SimulationResult,
    /// Runway of this target minus runway of the current scenario.
    pub runway_delta: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub baseline: SimulationResult,
    pub current: SimulationResult,
    pub comparisons: Vec<ComparisonOutcome>,
}

impl ScenarioReport {
    /// Months the active scenario adds (or removes) relative to the neutral baseline.
    pub fn current_vs_baseline(&self) -> Option<f64> {
        runway_delta(&self.current, &self.baseline)
    }
}

/// `a - b` in runway months. `None` unless both runs reach the floor inside the horizon,
/// since a run that never drains has no finite runway to subtract.
pub fn runway_delta(a: &SimulationResult, b: &SimulationResult) -> Option<f64> {
    Some(a.total_runway_months? - b.total_runway_months?)
}

pub struct ScenarioService;

impl ScenarioService {
    /// Simulation with every lever neutralised.
    pub fn baseline(
        inputs: &SimulationInputs,
        today: NaiveDate,
        options: &SimulationOptions,
    ) -> SimulationResult {
        simulate(inputs, &ScenarioBundle::neutral(), today, options)
    }

    pub fn current(
        snapshot: &FinancialSnapshot,
        today: NaiveDate,
        options: &SimulationOptions,
    ) -> SimulationResult {
        simulate(&snapshot.inputs, &snapshot.scenario, today, options)
    }

    /// Simulates one comparison target. Job scenarios reuse `inputs`.
    pub fn compare(
        target: &ComparisonTarget,
        inputs: &SimulationInputs,
        today: NaiveDate,
        options: &SimulationOptions,
    ) -> SimulationResult {
        debug!(target = target.label(), "simulating comparison");
        match target {
            ComparisonTarget::Snapshot { snapshot, .. } => {
                simulate(&snapshot.inputs, &snapshot.scenario, today, options)
            }
            ComparisonTarget::JobScenario { offer, .. } => {
                simulate(inputs, &ScenarioBundle::job_only(offer.clone()), today, options)
            }
        }
    }

    /// Baseline, current and every comparison target, each from an independent run.
    pub fn compose(
        snapshot: &FinancialSnapshot,
        targets: &[ComparisonTarget],
        today: NaiveDate,
        options: &SimulationOptions,
    ) -> ScenarioReport {
        let baseline = Self::baseline(&snapshot.inputs, today, options);
        let current = Self::current(snapshot, today, options);
        let comparisons = targets
            .iter()
            .map(|target| {
                let result = Self::compare(target, &snapshot.inputs, today, options);
                ComparisonOutcome {
                    label: target.label().to_string(),
                    runway_delta: runway_delta(&result, &current),
                    result,
                }
            })
            .collect();
        ScenarioReport {
            baseline,
            current,
            comparisons,
        }
    }

    /// Loads the named templates from `store` as comparison targets.
    pub fn template_targets(
        store: &dyn TemplateStore,
        template_names: &[String],
    ) -> ServiceResult<Vec<ComparisonTarget>> {
        let targets = template_names
            .iter()
            .map(|name| store.load(name).map(ComparisonTarget::from))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(targets)
    }
}
