pub mod node;

use std::fs;
use std::path::Path;

use crate::error::{ParseError, SpecError};
use crate::spec::Specification;
use node::Node;

/// Parse a specification from YAML.
pub fn from_yaml(input: &str) -> Result<Specification, ParseError> {
    let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(input)?;
    Ok(Specification::from_node(&Node::from(value)))
}

/// Parse a specification from JSON.
pub fn from_json(input: &str) -> Result<Specification, ParseError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(Specification::from_node(&Node::from(value)))
}

/// Read and parse the specification at `path`.
///
/// `.json` files go through the JSON parser, everything else through YAML.
/// Missing `paths` or `schemas` sections are read as empty.
pub fn load(path: &Path) -> Result<Specification, SpecError> {
    if !path.is_file() {
        return Err(SpecError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| SpecError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    let spec = match ext {
        "json" => from_json(&content)?,
        _ => from_yaml(&content)?,
    };

    log::debug!(
        "loaded {}: {} paths, {} schemas",
        path.display(),
        spec.paths.len(),
        spec.schemas.len()
    );
    Ok(spec)
}
