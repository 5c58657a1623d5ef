use minijinja::context;
use serde::Serialize;
use vsg_core::spec::{Binding, HttpMethod, Specification};
use vsg_core::{Artifact, ArtifactKind, EmissionError};

use super::{APP_DIR, render, source_path};

/// One `app.<method>(...)` registration line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteBinding {
    pub method: &'static str,
    /// Vapor has a dedicated builder method for this verb.
    pub helper: bool,
    pub pattern: String,
    pub controller: String,
    pub handler: String,
}

impl RouteBinding {
    pub fn from_binding(binding: &Binding<'_>) -> Self {
        Self {
            method: binding.method.as_str(),
            helper: has_route_helper(binding.method),
            pattern: binding.route_pattern(),
            controller: binding.controller_name(),
            handler: binding.handler_name(),
        }
    }
}

fn has_route_helper(method: HttpMethod) -> bool {
    matches!(
        method,
        HttpMethod::Get | HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch | HttpMethod::Delete
    )
}

/// Route bindings for every operation that has an operationId.
pub fn route_bindings(spec: &Specification) -> Vec<RouteBinding> {
    let routes: Vec<RouteBinding> = spec
        .bindings()
        .map(|binding| RouteBinding::from_binding(&binding))
        .collect();

    let skipped = spec.skipped_operations();
    if skipped > 0 {
        log::debug!("{skipped} operations without an operationId are not routed");
    }
    routes
}

/// Emit `Sources/App/routes.swift`, the aggregate route table.
pub fn emit_routes(spec: &Specification) -> Result<Artifact, EmissionError> {
    let routes = route_bindings(spec);
    let count = routes.len();
    let content = render(
        "routes.swift.j2",
        include_str!("../../templates/routes.swift.j2"),
        context! {
            routes => routes,
        },
    )?;
    log::debug!("emitted {count} route bindings");

    Ok(Artifact {
        path: source_path(APP_DIR, "routes.swift"),
        content,
        kind: ArtifactKind::Routes,
    })
}
