use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::spec::KeyOrder;

/// Top-level project configuration loaded from `.vsg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VsgConfig {
    pub input: String,
    pub output: String,
    pub order: KeyOrder,
    /// Reject documents whose names collide after normalization.
    pub strict: bool,
    pub project: ProjectConfig,
}

impl Default for VsgConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: ".".to_string(),
            order: KeyOrder::Lexicographic,
            strict: false,
            project: ProjectConfig::default(),
        }
    }
}

/// What gets generated besides models, routes and controllers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Swift package name written to `Package.swift`.
    pub name: String,
    /// Emit `Package.swift`, `main.swift` and `configure.swift`.
    pub files: bool,
    /// Emit one Fluent migration per model.
    pub migrations: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "VaporApp".to_string(),
            files: true,
            migrations: true,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".vsg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<VsgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: VsgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# vsg configuration
input: openapi.yaml
output: .               # Vapor project root the scaffold is written into
order: lexicographic    # lexicographic | document
strict: false           # fail on model/controller name collisions

project:
  name: VaporApp
  files: true           # Package.swift, main.swift, configure.swift
  migrations: true      # one Create<Model> migration per schema
"#
}
