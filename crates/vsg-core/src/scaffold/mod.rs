//! Load → emit → write pipeline for one scaffold run.
//!
//! Loading and emission are all-or-nothing: a document that fails to load or a
//! generator that rejects it leaves the target untouched. Writing is
//! best-effort: every artifact is attempted, the ones that land stay on disk,
//! and the failures are reported together. Existing files are overwritten.

pub mod fs;

use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, WriteError, WriteReport};
use crate::load;
use crate::spec::{KeyOrder, Specification};
use crate::{Artifact, CodeGenerator};
use fs::{FileSystem, LocalFileSystem};

/// Where a scaffold run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldState {
    Idle,
    SpecLoaded,
    Emitted,
    Written,
    Done,
    Failed,
}

/// Drives a generator against a target project root.
pub struct Scaffold<F = LocalFileSystem> {
    root: PathBuf,
    fs: F,
    order: KeyOrder,
    state: ScaffoldState,
}

impl Scaffold<LocalFileSystem> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, LocalFileSystem)
    }
}

impl<F: FileSystem> Scaffold<F> {
    pub fn with_fs(root: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            root: root.into(),
            fs,
            order: KeyOrder::default(),
            state: ScaffoldState::Idle,
        }
    }

    pub fn order(mut self, order: KeyOrder) -> Self {
        self.order = order;
        self
    }

    pub fn state(&self) -> ScaffoldState {
        self.state
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the document at `spec_path`, generate, and write everything.
    pub fn run<G>(&mut self, spec_path: &Path, generator: &G) -> Result<WriteReport, ScaffoldError>
    where
        G: CodeGenerator + ?Sized,
    {
        self.state = ScaffoldState::Idle;
        let spec = match load::load(spec_path) {
            Ok(spec) => spec,
            Err(e) => return Err(self.fail(e.into())),
        };
        self.run_loaded(spec, generator)
    }

    /// Same as [`Scaffold::run`] for a specification that is already in memory.
    pub fn run_loaded<G>(
        &mut self,
        spec: Specification,
        generator: &G,
    ) -> Result<WriteReport, ScaffoldError>
    where
        G: CodeGenerator + ?Sized,
    {
        let spec = spec.ordered(self.order);
        self.transition(ScaffoldState::SpecLoaded);

        let artifacts = match generator.generate(&spec) {
            Ok(artifacts) => artifacts,
            Err(e) => return Err(self.fail(e.into())),
        };
        self.transition(ScaffoldState::Emitted);

        let report = self.write(&artifacts);
        if !report.is_success() {
            return Err(self.fail(ScaffoldError::Write(report)));
        }
        self.transition(ScaffoldState::Written);
        self.transition(ScaffoldState::Done);
        Ok(report)
    }

    /// Write every artifact under the root, continuing past failures.
    pub fn write(&self, artifacts: &[Artifact]) -> WriteReport {
        let mut report = WriteReport::default();

        for artifact in artifacts {
            match self.write_one(artifact) {
                Ok(()) => {
                    log::info!("wrote {} {}", artifact.kind.as_str(), artifact.path);
                    report.written.push(artifact.path.clone());
                }
                Err(source) => {
                    log::warn!("failed to write {}: {source}", artifact.path);
                    report.failed.push(WriteError {
                        path: artifact.path.clone(),
                        source,
                    });
                }
            }
        }

        report
    }

    fn write_one(&self, artifact: &Artifact) -> std::io::Result<()> {
        let path = self.root.join(&artifact.path);
        if let Some(parent) = path.parent() {
            if !self.fs.exists(parent) {
                self.fs.create_dir(parent, true)?;
            }
        }
        self.fs.write_file(&path, &artifact.content)
    }

    fn transition(&mut self, next: ScaffoldState) {
        log::debug!("scaffold: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn fail(&mut self, error: ScaffoldError) -> ScaffoldError {
        self.transition(ScaffoldState::Failed);
        error
    }
}
