pub mod scenario_service;

pub use scenario_service::{
    runway_delta, ComparisonOutcome, ComparisonTarget, ScenarioReport, ScenarioService,
};

use crate::errors::RunwayError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Runway(#[from] RunwayError),
}
