use std::path::Path;

use pybump_core::{ConfigTarget, VersionSpec};
use pybump_manifest::Validator;
use tracing::debug;

use super::transaction::TransactionalWriter;
use crate::providers::{FileSystemEditStore, SectionTextPatcher};
use crate::traits::{EditStore, TextPatcher};
use crate::types::{BumpInput, BumpOutcome, TargetReport, TargetStatus};
use crate::{OperationError, Result};

/// Sets the version in every known config file under a project root.
///
/// Targets are processed in order; the first failure stops the run and
/// files committed before it stay committed.
pub struct BumpOperation<S, P> {
    store: S,
    patcher: P,
    targets: Vec<ConfigTarget>,
}

impl<S, P> BumpOperation<S, P>
where
    S: EditStore,
    P: TextPatcher,
{
    #[must_use]
    pub fn new(store: S, patcher: P) -> Self {
        Self {
            store,
            patcher,
            targets: ConfigTarget::defaults().to_vec(),
        }
    }

    #[must_use]
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = ConfigTarget>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// # Errors
    ///
    /// Returns `OperationError::InvalidVersion` before touching any file if
    /// `version` is malformed, `OperationError::ProjectRoot` if `root` is not
    /// an accessible directory, and otherwise the first read, validation,
    /// recovery or I/O error hit while processing a target.
    pub fn execute(&self, root: &Path, version: &str, input: &BumpInput) -> Result<BumpOutcome> {
        let version = VersionSpec::parse(version)?;
        self.store
            .check_dir(root)
            .map_err(|source| OperationError::ProjectRoot {
                path: root.to_path_buf(),
                source,
            })?;
        let writer = TransactionalWriter::new(&self.store);

        let mut targets = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            let path = target.path_in(root);
            let status = self.apply(&writer, target, &path, &version, input)?;
            debug!(path = %path.display(), ?status, "processed target");
            targets.push(TargetReport { path, status });
        }

        Ok(BumpOutcome {
            version: version.to_string(),
            targets,
        })
    }

    fn apply(
        &self,
        writer: &TransactionalWriter<'_, S>,
        target: &ConfigTarget,
        path: &Path,
        version: &VersionSpec,
        input: &BumpInput,
    ) -> Result<TargetStatus> {
        let read_error = |source| OperationError::Read {
            path: path.to_path_buf(),
            source,
        };

        if !self.store.exists(path).map_err(read_error)? {
            return Ok(TargetStatus::Missing);
        }

        let original = self.store.read(path).map_err(read_error)?;

        let edit = self.patcher.patch(target, &original, version);
        if !edit.changed {
            return Ok(TargetStatus::Unchanged);
        }

        if input.dry_run {
            target
                .format
                .validate(&edit.new_text)
                .map_err(|source| OperationError::Validation {
                    path: path.to_path_buf(),
                    source,
                })?;
            return Ok(TargetStatus::WouldUpdate);
        }

        let backup = writer.commit(path, &edit.new_text, &target.format)?;
        Ok(TargetStatus::Updated { backup })
    }
}

/// Bumps `pyproject.toml` and `setup.cfg` under `root` on the local filesystem.
///
/// # Errors
///
/// See [`BumpOperation::execute`].
pub fn bump_project(root: &Path, version: &str, input: &BumpInput) -> Result<BumpOutcome> {
    BumpOperation::new(FileSystemEditStore::new(), SectionTextPatcher::new())
        .execute(root, version, input)
}
