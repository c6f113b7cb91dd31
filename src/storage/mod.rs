pub mod json_backend;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{domain::FinancialSnapshot, errors::Result};

pub use json_backend::JsonTemplateStore;

/// A named alternate snapshot kept around for side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTemplate {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub snapshot: FinancialSnapshot,
}

impl ScenarioTemplate {
    pub fn new(name: impl Into<String>, snapshot: FinancialSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            snapshot,
        }
    }
}

/// Abstraction over places templates can be kept.
pub trait TemplateStore: Send + Sync {
    fn save(&self, template: &ScenarioTemplate) -> Result<()>;
    fn load(&self, name: &str) -> Result<ScenarioTemplate>;
    /// Template names, sorted.
    fn list(&self) -> Result<Vec<String>>;
    fn remove(&self, name: &str) -> Result<()>;

    fn load_all(&self) -> Result<Vec<ScenarioTemplate>> {
        self.list()?
            .iter()
            .map(|name| self.load(name))
            .collect()
    }
}
