pub mod config;
pub mod error;
pub mod load;
pub mod scaffold;
pub mod spec;
pub mod transform;

pub use error::{EmissionError, ParseError, ScaffoldError, SpecError, WriteError, WriteReport};

/// The role a generated file plays in the scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Model,
    Routes,
    Controller,
    Migration,
    Project,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Routes => "routes",
            Self::Controller => "controller",
            Self::Migration => "migration",
            Self::Project => "project",
        }
    }
}

/// A generated file with a path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: String,
    pub content: String,
    pub kind: ArtifactKind,
}

/// Trait for code generators that turn a loaded specification into artifacts.
///
/// Generation is pure: implementations must not touch the filesystem.
pub trait CodeGenerator {
    fn generate(&self, spec: &spec::Specification) -> Result<Vec<Artifact>, EmissionError>;
}
