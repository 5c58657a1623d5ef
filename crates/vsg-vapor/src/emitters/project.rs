use minijinja::context;
use vsg_core::transform::normalize_name;
use vsg_core::{Artifact, ArtifactKind, EmissionError};

use super::migrations::migration_name;
use super::models::ModelDef;
use super::{APP_DIR, render, source_path};

/// Emit the package manifest and the app entry points.
///
/// `configure.swift` registers one migration per model when `migrations` is set.
pub fn emit_project(
    package_name: &str,
    models: &[ModelDef],
    migrations: bool,
) -> Result<Vec<Artifact>, EmissionError> {
    let registered: Vec<String> = if migrations {
        models.iter().map(migration_name).collect()
    } else {
        Vec::new()
    };

    Ok(vec![
        Artifact {
            path: source_path("", "Package.swift"),
            content: render(
                "Package.swift.j2",
                include_str!("../../templates/Package.swift.j2"),
                context! {
                    package_name => package_name,
                },
            )?,
            kind: ArtifactKind::Project,
        },
        Artifact {
            path: source_path(APP_DIR, "main.swift"),
            content: include_str!("../../templates/main.swift.j2").to_string(),
            kind: ArtifactKind::Project,
        },
        Artifact {
            path: source_path(APP_DIR, "configure.swift"),
            content: render(
                "configure.swift.j2",
                include_str!("../../templates/configure.swift.j2"),
                context! {
                    database => normalize_name(package_name).snake_case,
                    migrations => registered,
                },
            )?,
            kind: ArtifactKind::Project,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str) -> ModelDef {
        ModelDef {
            name: name.to_string(),
            table: format!("{}s", name.to_lowercase()),
            fields: vec![],
        }
    }

    #[test]
    fn test_project_files() {
        let files = emit_project("MusicSound", &[model("Script"), model("Track")], true).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["Package.swift", "Sources/App/main.swift", "Sources/App/configure.swift"]
        );
        assert!(files.iter().all(|f| f.kind == ArtifactKind::Project));

        assert!(files[0].content.contains("name: \"MusicSound\","));
        assert!(files[1].content.contains("try configure(app)"));

        let configure = &files[2].content;
        assert!(configure.contains("?? \"music_sound\""));
        assert!(configure.contains("    app.migrations.add(CreateScript())\n    app.migrations.add(CreateTrack())\n"));
        assert!(configure.contains("    try routes(app)\n}\n"));
    }

    #[test]
    fn test_configure_without_migrations() {
        let files = emit_project("VaporApp", &[model("Script")], false).unwrap();
        let configure = &files[2].content;
        assert!(!configure.contains("migrations.add"));
        assert!(configure.contains("), as: .psql)\n\n    try routes(app)\n}\n"));
    }
}
