pub mod controllers;
pub mod migrations;
pub mod models;
pub mod project;
pub mod routes;

use minijinja::Environment;
use serde::Serialize;
use vsg_core::EmissionError;

pub const APP_DIR: &str = "Sources/App";
pub const MODELS_DIR: &str = "Sources/App/Models";
pub const CONTROLLERS_DIR: &str = "Sources/App/Controllers";
pub const MIGRATIONS_DIR: &str = "Sources/App/Migrations";

/// Build a file path under a source directory.
///
/// - `dir = "Sources/App"` → `"Sources/App/routes.swift"`
/// - `dir = ""` → `"Package.swift"`
pub fn source_path(dir: &str, file: &str) -> String {
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}

/// Render one embedded template against a serializable context.
pub(crate) fn render<S: Serialize>(
    name: &'static str,
    source: &'static str,
    ctx: S,
) -> Result<String, EmissionError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template(name, source)
        .map_err(|e| render_error(name, e))?;
    let tmpl = env.get_template(name).map_err(|e| render_error(name, e))?;
    tmpl.render(ctx).map_err(|e| render_error(name, e))
}

fn render_error(template: &str, e: minijinja::Error) -> EmissionError {
    EmissionError::Render {
        template: template.to_string(),
        message: e.to_string(),
    }
}

const SWIFT_KEYWORDS: &[&str] = &[
    "Any", "Self", "as", "associatedtype", "break", "case", "catch", "class", "continue",
    "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough", "false",
    "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout", "internal",
    "is", "let", "nil", "open", "operator", "private", "protocol", "public", "repeat",
    "rethrows", "return", "self", "static", "struct", "subscript", "super", "switch", "throw",
    "throws", "true", "try", "typealias", "var", "where", "while",
];

/// Backtick-escape identifiers that collide with Swift keywords, and prefix
/// the ones that start with a digit with `_`.
pub fn swift_identifier(name: &str) -> String {
    if SWIFT_KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}
