use thiserror::Error;

/// Failures raised around the engine: storage, configuration and caller input.
///
/// The simulation itself is infallible; these only come from the surfaces feeding it.
#[derive(Debug, Error)]
pub enum RunwayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}

pub type Result<T> = std::result::Result<T, RunwayError>;
