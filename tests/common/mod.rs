#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use runway_core::{
    domain::{ExpenseLine, FinancialSnapshot, ScenarioBundle, SimulationInputs},
    utils::persistence::save_snapshot_to_file,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A fresh directory usable as `RUNWAY_CORE_HOME`.
pub fn test_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// `savings` on hand and a single essential expense of `monthly`.
pub fn burn_inputs(savings: f64, monthly: f64) -> SimulationInputs {
    let mut inputs = SimulationInputs::with_savings(savings);
    inputs.expenses.push(ExpenseLine::essential("rent", monthly));
    inputs
}

pub fn burn_snapshot(savings: f64, monthly: f64) -> FinancialSnapshot {
    FinancialSnapshot::new(burn_inputs(savings, monthly), ScenarioBundle::neutral())
}

/// Writes `snapshot` to `<dir>/<file_name>` and returns the path.
pub fn write_snapshot(dir: &Path, file_name: &str, snapshot: &FinancialSnapshot) -> PathBuf {
    let path = dir.join(file_name);
    save_snapshot_to_file(snapshot, &path).expect("write snapshot");
    path
}
