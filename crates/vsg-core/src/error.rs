use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while turning an API document into a `Specification`.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("spec file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Structural problems found while emitting artifacts.
///
/// Duplicate checks only fire when the generator runs in strict mode.
#[derive(Debug, Error)]
pub enum EmissionError {
    #[error("two schemas map to the model name `{name}`")]
    DuplicateModel { name: String },

    #[error("two properties of `{model}` map to the field name `{name}`")]
    DuplicateField { model: String, name: String },

    #[error("two operations map to the controller name `{name}`")]
    DuplicateController { name: String },

    #[error("failed to render template `{template}`: {message}")]
    Render { template: String, message: String },
}

/// One artifact that could not be written.
#[derive(Debug, Error)]
#[error("failed to write {path}: {source}")]
pub struct WriteError {
    pub path: String,
    #[source]
    pub source: io::Error,
}

/// Outcome of the write stage: which artifacts landed and which did not.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<String>,
    pub failed: Vec<WriteError>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Emission(#[from] EmissionError),

    #[error(
        "{} of {} artifacts failed to write",
        .0.failed.len(),
        .0.failed.len() + .0.written.len()
    )]
    Write(WriteReport),
}
