use vsg_core::config::VsgConfig;
use vsg_core::spec::Specification;
use vsg_core::{Artifact, CodeGenerator, EmissionError};

use crate::emitters;

/// What the Vapor generator emits besides models, routes and controllers.
#[derive(Debug, Clone)]
pub struct VaporOptions {
    pub package_name: String,
    pub project_files: bool,
    pub migrations: bool,
    pub strict: bool,
}

impl Default for VaporOptions {
    fn default() -> Self {
        Self::from(&VsgConfig::default())
    }
}

impl From<&VsgConfig> for VaporOptions {
    fn from(config: &VsgConfig) -> Self {
        Self {
            package_name: config.project.name.clone(),
            project_files: config.project.files,
            migrations: config.project.migrations,
            strict: config.strict,
        }
    }
}

/// Vapor 4 / Fluent scaffold generator.
#[derive(Debug, Clone, Default)]
pub struct VaporGenerator {
    options: VaporOptions,
}

impl VaporGenerator {
    pub fn new(options: VaporOptions) -> Self {
        Self { options }
    }
}

impl CodeGenerator for VaporGenerator {
    fn generate(&self, spec: &Specification) -> Result<Vec<Artifact>, EmissionError> {
        let models = emitters::models::model_defs(spec, self.options.strict)?;

        let mut files = models
            .iter()
            .map(emitters::models::emit_model)
            .collect::<Result<Vec<_>, _>>()?;
        files.push(emitters::routes::emit_routes(spec)?);
        files.extend(emitters::controllers::emit_controllers(
            spec,
            self.options.strict,
        )?);

        if self.options.migrations {
            files.extend(emitters::migrations::emit_migrations(&models)?);
        }
        if self.options.project_files {
            files.extend(emitters::project::emit_project(
                &self.options.package_name,
                &models,
                self.options.migrations,
            )?);
        }

        log::info!("generated {} artifacts", files.len());
        Ok(files)
    }
}
