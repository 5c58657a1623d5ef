use serde::Serialize;
use vsg_core::spec::{SchemaDef, Specification};
use vsg_core::transform::normalize_name;
use vsg_core::{Artifact, ArtifactKind, EmissionError};

use super::{MODELS_DIR, render, source_path, swift_identifier};
use crate::type_mapper::map_type;

/// A Fluent model ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDef {
    pub name: String,
    pub table: String,
    pub fields: Vec<FieldDef>,
}

/// One stored property of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Column key, as written in the API document.
    pub key: String,
    /// Swift property name.
    pub name: String,
    pub swift_type: &'static str,
    pub fluent_type: &'static str,
}

impl ModelDef {
    /// Build the model for one schema.
    ///
    /// Properties whose Swift name is `id` are replaced by the identity field.
    /// Two properties with the same Swift name are an error when `strict` is
    /// set; otherwise the first one is kept.
    pub fn from_schema(schema: &SchemaDef, strict: bool) -> Result<Self, EmissionError> {
        let name = normalize_name(&schema.name);
        let model_name = name.pascal_case;
        let mut fields: Vec<FieldDef> = Vec::with_capacity(schema.properties.len());

        for (key, prop) in &schema.properties {
            let camel = normalize_name(key).camel_case;
            if camel == "id" {
                log::warn!("{model_name}: property `{key}` replaced by the identity field");
                continue;
            }

            let field_name = swift_identifier(&camel);
            if let Some(first) = fields.iter().find(|f| f.name == field_name) {
                if strict {
                    return Err(EmissionError::DuplicateField {
                        model: model_name,
                        name: field_name,
                    });
                }
                log::warn!(
                    "{model_name}: property `{key}` maps to `{field_name}` like `{}`; keeping the first",
                    first.key
                );
                continue;
            }

            let mapped = map_type(prop.type_name.as_deref());
            fields.push(FieldDef {
                key: key.clone(),
                name: field_name,
                swift_type: mapped.as_str(),
                fluent_type: mapped.fluent_data_type(),
            });
        }

        Ok(Self {
            table: format!("{}s", name.snake_case),
            name: model_name,
            fields,
        })
    }
}

/// Every model of the API document, one per distinct Swift name.
///
/// When two schemas map to the same name, strict mode rejects the document;
/// otherwise the later schema replaces the earlier one in place.
pub fn model_defs(spec: &Specification, strict: bool) -> Result<Vec<ModelDef>, EmissionError> {
    let mut models: Vec<ModelDef> = Vec::with_capacity(spec.schemas.len());

    for schema in spec.schemas.values() {
        let model = ModelDef::from_schema(schema, strict)?;
        match models.iter_mut().find(|m| m.name == model.name) {
            Some(_) if strict => {
                return Err(EmissionError::DuplicateModel { name: model.name });
            }
            Some(existing) => {
                log::warn!("model `{}` emitted twice; the later schema wins", model.name);
                *existing = model;
            }
            None => models.push(model),
        }
    }

    Ok(models)
}

pub fn emit_model(model: &ModelDef) -> Result<Artifact, EmissionError> {
    let content = render(
        "model.swift.j2",
        include_str!("../../templates/model.swift.j2"),
        model,
    )?;
    log::debug!("emitted model {}", model.name);

    Ok(Artifact {
        path: source_path(MODELS_DIR, &format!("{}.swift", model.name)),
        content,
        kind: ArtifactKind::Model,
    })
}
