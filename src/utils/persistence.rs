use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::{domain::FinancialSnapshot, errors::Result};

const TMP_SUFFIX: &str = "tmp";

/// Writes the snapshot as pretty JSON, staging through a temporary file.
pub fn save_snapshot_to_file(snapshot: &FinancialSnapshot, path: &Path) -> Result<()> {
    write_json_atomic(snapshot, path)?;
    info!(path = %path.display(), "snapshot saved");
    Ok(())
}

/// Loads a snapshot previously written by [`save_snapshot_to_file`] or by hand.
pub fn load_snapshot_from_file(path: &Path) -> Result<FinancialSnapshot> {
    read_json(path)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub(crate) fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExpenseLine, ScenarioBundle, SimulationInputs};
    use tempfile::tempdir;

    #[test]
    fn snapshot_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshot.json");
        let mut inputs = SimulationInputs::with_savings(8000.0);
        inputs.expenses.push(ExpenseLine::essential("rent", 1500.0));
        let snapshot = FinancialSnapshot::new(
            inputs,
            ScenarioBundle {
                emergency_floor: 1000.0,
                ..ScenarioBundle::default()
            },
        );

        save_snapshot_to_file(&snapshot, &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(load_snapshot_from_file(&path).unwrap(), snapshot);
    }

    #[test]
    fn malformed_dates_surface_as_serde_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"inputs": {"one_time_expenses": [{"date": "2025-13-45", "amount": 10}]}}"#,
        )
        .unwrap();
        let err = load_snapshot_from_file(&path).unwrap_err();
        assert!(matches!(err, crate::errors::RunwayError::Serde(_)));
    }
}
