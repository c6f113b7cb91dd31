//! Non-interactive command line front end for the runway engine.

mod args;
mod commands;
pub mod output;

use std::{env, path::PathBuf};

use thiserror::Error;

use crate::{
    config::ConfigManager,
    core::services::ServiceError,
    errors::RunwayError,
    storage::JsonTemplateStore,
    time::{Clock, SystemClock},
    utils::paths,
};

pub use args::ParsedArgs;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] RunwayError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Core(RunwayError::from(err))
    }
}

pub const USAGE: &str = "Usage: runway_cli <command>
Commands:
  simulate [snapshot.json] [--today YYYY-MM-DD] [--months] [--json]
  compare [snapshot.json] [--template NAME]... [--job LABEL,SALARY,START[,RAISE_PCT]]...
          [--today YYYY-MM-DD] [--json]
  template save <name> <snapshot.json>
  template list
  template remove <name>
  config show
  config set <key> <value>
  version";

/// Storage handles the commands work against.
pub struct CliContext {
    pub config: ConfigManager,
    pub templates: JsonTemplateStore,
}

impl CliContext {
    pub fn with_base_dir(base: PathBuf) -> Result<Self, CliError> {
        Ok(Self {
            config: ConfigManager::with_base_dir(base.clone()),
            templates: JsonTemplateStore::new(Some(base))?,
        })
    }
}

/// Entry point used by the `runway_cli` binary.
pub fn run_cli() -> Result<(), CliError> {
    output::configure_colors();
    let args: Vec<String> = env::args().skip(1).collect();
    let context = CliContext::with_base_dir(paths::app_data_dir())?;
    run_with(&args, &context, &SystemClock)
}

/// Dispatches `args` (without the program name). `clock` supplies the default "today".
pub fn run_with(args: &[String], context: &CliContext, clock: &dyn Clock) -> Result<(), CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage("missing command".into()));
    };
    let parsed = ParsedArgs::parse(rest)?;
    match command.as_str() {
        "simulate" => commands::simulate(&parsed, context, clock),
        "compare" => commands::compare(&parsed, context, clock),
        "template" => commands::template(&parsed, context),
        "config" => commands::config(&parsed, context),
        "version" | "--version" => {
            output::info(crate::utils::build_info::current().summary());
            Ok(())
        }
        "help" | "--help" => {
            output::info(USAGE);
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}
