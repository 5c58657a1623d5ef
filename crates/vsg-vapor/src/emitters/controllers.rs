use std::collections::HashMap;

use serde::Serialize;
use vsg_core::spec::{Binding, Specification};
use vsg_core::{Artifact, ArtifactKind, EmissionError};

use super::{CONTROLLERS_DIR, render, source_path};

/// A controller holding the single handler for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerDef {
    pub name: String,
    pub handler: String,
    pub method: &'static str,
    pub path: String,
    pub summary: Option<String>,
    /// `GET` handlers get the read skeleton, everything else the write one.
    pub read: bool,
}

impl ControllerDef {
    pub fn from_binding(binding: &Binding<'_>) -> Self {
        Self {
            name: binding.controller_name(),
            handler: binding.handler_name(),
            method: binding.method.as_str(),
            path: binding.pattern.to_string(),
            summary: binding
                .operation
                .summary
                .as_deref()
                .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|s| !s.is_empty()),
            read: binding.method.is_read(),
        }
    }
}

/// Emit one `Sources/App/Controllers/<Name>Controller.swift` per routed operation.
///
/// Operations that map to the same controller name are rejected in strict
/// mode; otherwise the later operation replaces the earlier file in place.
pub fn emit_controllers(
    spec: &Specification,
    strict: bool,
) -> Result<Vec<Artifact>, EmissionError> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut files: Vec<Artifact> = Vec::new();

    for binding in spec.bindings() {
        let controller = ControllerDef::from_binding(&binding);
        let artifact = emit_controller(&controller)?;
        match index.get(&controller.name) {
            Some(_) if strict => {
                return Err(EmissionError::DuplicateController {
                    name: controller.name,
                });
            }
            Some(&at) => {
                log::warn!(
                    "controller `{}` emitted twice; {} {} wins",
                    controller.name,
                    binding.method,
                    binding.pattern
                );
                files[at] = artifact;
            }
            None => {
                index.insert(controller.name, files.len());
                files.push(artifact);
            }
        }
    }

    Ok(files)
}

pub fn emit_controller(controller: &ControllerDef) -> Result<Artifact, EmissionError> {
    let content = render(
        "controller.swift.j2",
        include_str!("../../templates/controller.swift.j2"),
        controller,
    )?;
    log::debug!("emitted controller {}", controller.name);

    Ok(Artifact {
        path: source_path(CONTROLLERS_DIR, &format!("{}.swift", controller.name)),
        content,
        kind: ArtifactKind::Controller,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsg_core::load::from_yaml;

    const SPEC: &str = r#"
paths:
  /files/{filename}:
    get:
      operationId: get_file_content
      summary: |
        Return the content
        of one file
    put:
      operationId: update_file
    delete:
      operationId: delete_file
"#;

    #[test]
    fn test_read_and_write_skeletons() {
        let spec = from_yaml(SPEC).unwrap();
        let files = emit_controllers(&spec, false).unwrap();
        assert_eq!(files.len(), 3);

        let get = &files[0];
        assert_eq!(get.path, "Sources/App/Controllers/GetFileContentController.swift");
        assert!(get.content.contains("final class GetFileContentController {"));
        assert!(get.content.contains(
            "func getFileContent(req: Request) throws -> EventLoopFuture<HTTPStatus> {"
        ));
        assert!(get.content.contains("return req.eventLoop.future(.ok)"));
        assert!(!get.content.contains(".created"));
        assert!(get.content.contains("/// Return the content of one file"));
        assert!(get.content.contains("/// `GET /files/{filename}`"));

        for write in &files[1..] {
            assert!(write.content.contains("return req.eventLoop.future(.created)"));
            assert!(!write.content.contains(".ok)"));
        }
    }

    #[test]
    fn test_controller_without_summary() {
        let spec = from_yaml(SPEC).unwrap();
        let binding = spec.bindings().nth(1).unwrap();
        let controller = ControllerDef::from_binding(&binding);
        assert_eq!(controller.name, "UpdateFileController");
        assert_eq!(controller.summary, None);
        assert!(!controller.read);

        let artifact = emit_controller(&controller).unwrap();
        assert!(artifact.content.contains("    /// `PUT /files/{filename}`\n    func updateFile("));
    }

    #[test]
    fn test_duplicate_controllers() {
        let yaml = r#"
paths:
  /a:
    get:
      operationId: fetch
  /b:
    get:
      operationId: fetch
"#;
        let spec = from_yaml(yaml).unwrap();
        let files = emit_controllers(&spec, false).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].content.contains("/// `GET /b`"));
        assert!(matches!(
            emit_controllers(&spec, true),
            Err(EmissionError::DuplicateController { .. })
        ));
    }
}
