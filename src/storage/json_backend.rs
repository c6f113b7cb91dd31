use std::{fs, path::PathBuf};

use tracing::info;

use crate::{
    errors::{Result, RunwayError},
    utils::{
        paths,
        persistence::{read_json, write_json_atomic},
    },
};

use super::{ScenarioTemplate, TemplateStore};

const TEMPLATE_EXTENSION: &str = "json";

/// Keeps one JSON file per template under `<base>/templates`.
#[derive(Debug, Clone)]
pub struct JsonTemplateStore {
    templates_dir: PathBuf,
}

impl JsonTemplateStore {
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let base = base.unwrap_or_else(paths::app_data_dir);
        let templates_dir = paths::templates_dir_in(&base);
        fs::create_dir_all(&templates_dir)?;
        Ok(Self { templates_dir })
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir
            .join(format!("{}.{}", canonical_name(name), TEMPLATE_EXTENSION))
    }
}

impl TemplateStore for JsonTemplateStore {
    fn save(&self, template: &ScenarioTemplate) -> Result<()> {
        if template.name.trim().is_empty() {
            return Err(RunwayError::InvalidInput(
                "template name cannot be empty".into(),
            ));
        }
        let path = self.template_path(&template.name);
        write_json_atomic(template, &path)?;
        info!(template = %template.name, "template saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<ScenarioTemplate> {
        let path = self.template_path(name);
        if !path.exists() {
            return Err(RunwayError::TemplateNotFound(name.to_string()));
        }
        read_json(&path)
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.templates_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.templates_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn remove(&self, name: &str) -> Result<()> {
        let path = self.template_path(name);
        if !path.exists() {
            return Err(RunwayError::TemplateNotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        info!(template = %name, "template removed");
        Ok(())
    }
}

/// File-safe form of a template name: lowercase ASCII alphanumerics, everything else `_`.
fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "template".into()
    } else {
        sanitized
    }
}
