use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".runway_core";
const TEMPLATE_DIR: &str = "templates";
const CONFIG_FILE: &str = "config.json";

/// Application data directory: `RUNWAY_CORE_HOME`, else `~/.runway_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("RUNWAY_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn templates_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(TEMPLATE_DIR)
}

pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
