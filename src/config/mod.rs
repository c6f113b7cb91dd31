use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    errors::{Result, RunwayError},
    simulation::{SimulationOptions, DEFAULT_TAIL_MONTHS, MAX_HORIZON_MONTHS},
    utils::{
        paths,
        persistence::{read_json, write_json_atomic},
    },
};

/// User preferences plus the simulation defaults the CLI applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_horizon_months")]
    pub horizon_months: u32,
    #[serde(default = "Config::default_tail_months")]
    pub tail_months: u32,
    /// Floor used when a snapshot's scenario leaves it at zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_emergency_floor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_snapshot: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            horizon_months: Self::default_horizon_months(),
            tail_months: Self::default_tail_months(),
            default_emergency_floor: None,
            last_snapshot: None,
        }
    }
}

impl Config {
    pub fn default_horizon_months() -> u32 {
        MAX_HORIZON_MONTHS
    }

    pub fn default_tail_months() -> u32 {
        DEFAULT_TAIL_MONTHS
    }

    pub fn simulation_options(&self) -> SimulationOptions {
        SimulationOptions {
            horizon_months: self.horizon_months.min(MAX_HORIZON_MONTHS),
            tail_months: self.tail_months,
        }
    }

    /// Applies a `key value` pair as typed on the command line.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "locale" => self.locale = value.to_string(),
            "currency" => self.currency = value.to_ascii_uppercase(),
            "horizon_months" => {
                let months = parse_number::<u32>(key, value)?;
                if months == 0 || months > MAX_HORIZON_MONTHS {
                    return Err(RunwayError::Config(format!(
                        "horizon_months must be between 1 and {MAX_HORIZON_MONTHS}"
                    )));
                }
                self.horizon_months = months;
            }
            "tail_months" => self.tail_months = parse_number(key, value)?,
            "default_emergency_floor" => {
                self.default_emergency_floor = match value {
                    "none" | "" => None,
                    other => Some(parse_number(key, other)?),
                }
            }
            other => {
                return Err(RunwayError::Config(format!(
                    "unknown configuration key `{other}`"
                )))
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| RunwayError::Config(format!("`{value}` is not a valid value for {key}")))
}

/// Loads and saves [`Config`] under the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: paths::config_file_in(&base),
        }
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            read_json(&self.path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        write_json_atomic(config, &self.path)?;
        info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.simulation_options(), SimulationOptions::default());
    }

    #[test]
    fn set_validates_horizon() {
        let mut config = Config::default();
        config.set("horizon_months", "60").unwrap();
        assert_eq!(config.horizon_months, 60);
        assert!(config.set("horizon_months", "240").is_err());
        assert!(config.set("horizon_months", "soon").is_err());
        assert!(config.set("colour", "blue").is_err());
    }

    #[test]
    fn emergency_floor_can_be_cleared() {
        let mut config = Config::default();
        config.set("default_emergency_floor", "2500").unwrap();
        assert_eq!(config.default_emergency_floor, Some(2500.0));
        config.set("default_emergency_floor", "none").unwrap();
        assert_eq!(config.default_emergency_floor, None);
    }
}
