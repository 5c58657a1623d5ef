use serde::Serialize;
use vsg_core::{Artifact, ArtifactKind, EmissionError};

use super::models::{FieldDef, ModelDef};
use super::{MIGRATIONS_DIR, render, source_path};

/// `Create<Model>`: builds the table a model is stored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationDef<'a> {
    pub name: String,
    pub table: &'a str,
    pub fields: &'a [FieldDef],
}

impl<'a> MigrationDef<'a> {
    pub fn for_model(model: &'a ModelDef) -> Self {
        Self {
            name: migration_name(model),
            table: &model.table,
            fields: &model.fields,
        }
    }
}

pub fn migration_name(model: &ModelDef) -> String {
    format!("Create{}", model.name)
}

/// Emit one `Sources/App/Migrations/Create<Model>.swift` per model.
pub fn emit_migrations(models: &[ModelDef]) -> Result<Vec<Artifact>, EmissionError> {
    models
        .iter()
        .map(|model| emit_migration(&MigrationDef::for_model(model)))
        .collect()
}

pub fn emit_migration(migration: &MigrationDef<'_>) -> Result<Artifact, EmissionError> {
    let content = render(
        "migration.swift.j2",
        include_str!("../../templates/migration.swift.j2"),
        migration,
    )?;
    log::debug!("emitted migration {}", migration.name);

    Ok(Artifact {
        path: source_path(MIGRATIONS_DIR, &format!("{}.swift", migration.name)),
        content,
        kind: ArtifactKind::Migration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsg_core::load::from_yaml;

    #[test]
    fn test_script_migration() {
        let spec = from_yaml(
            r#"
schemas:
  Script:
    properties:
      title: { type: string }
      sequence: { type: integer }
      published: { type: boolean }
"#,
        )
        .unwrap();
        let model = ModelDef::from_schema(&spec.schemas["Script"], false).unwrap();
        let files = emit_migrations(std::slice::from_ref(&model)).unwrap();
        assert_eq!(files.len(), 1);

        let migration = &files[0];
        assert_eq!(migration.path, "Sources/App/Migrations/CreateScript.swift");
        assert_eq!(migration.kind, ArtifactKind::Migration);
        assert!(migration.content.contains("struct CreateScript: Migration {"));
        assert!(migration.content.contains("database.schema(\"scripts\")\n            .id()\n"));
        assert!(migration.content.contains(".field(\"title\", .string, .required)"));
        assert!(migration.content.contains(".field(\"sequence\", .int64, .required)"));
        assert!(migration.content.contains(".field(\"published\", .bool, .required)"));
        assert!(migration.content.contains("database.schema(\"scripts\").delete()"));
    }
}
