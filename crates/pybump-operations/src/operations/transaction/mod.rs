mod data;
mod steps;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use pybump_manifest::Validator;
use pybump_saga::{SagaBuilder, SagaError};
use tracing::{debug, warn};

use self::data::{PendingEdit, WriteContext};
use self::steps::{BackupStep, CommitStep, StageStep, ValidateStep};
use crate::traits::EditStore;
use crate::{OperationError, Result};

const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Sibling backup path `<path>.bak.<YYYYmmddHHMMSS>`.
#[must_use]
pub fn backup_path_for(path: &Path, at: NaiveDateTime) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".bak.{}", at.format(BACKUP_TIMESTAMP_FORMAT)));
    PathBuf::from(name)
}

/// Replaces a file's content only after the new content has been staged
/// next to it and accepted by a validator.
///
/// The sequence is backup, stage, validate, commit. A failure after the
/// backup restores the file from it; backups are left on disk in every case.
pub struct TransactionalWriter<'a, S> {
    store: &'a S,
}

impl<'a, S: EditStore> TransactionalWriter<'a, S> {
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Commits `new_text` to `path`, backing it up under a timestamped name.
    /// Returns the backup path.
    ///
    /// # Errors
    ///
    /// - `OperationError::Backup` if the backup copy fails; nothing else is attempted.
    /// - `OperationError::Validation` if `validator` rejects the staged content;
    ///   the file holds its original content.
    /// - `OperationError::Recovery` if a step failed and restoring the file
    ///   from the backup failed too.
    /// - `OperationError::Stage` or `OperationError::Commit` for other I/O failures.
    pub fn commit(&self, path: &Path, new_text: &str, validator: &dyn Validator) -> Result<PathBuf> {
        let backup = backup_path_for(path, Local::now().naive_local());
        self.commit_with_backup(path, new_text, validator, backup)
    }

    /// Like [`commit`](Self::commit), with an explicit backup path.
    ///
    /// # Errors
    ///
    /// See [`commit`](Self::commit).
    pub fn commit_with_backup(
        &self,
        path: &Path,
        new_text: &str,
        validator: &dyn Validator,
        backup: PathBuf,
    ) -> Result<PathBuf> {
        let ctx = WriteContext {
            store: self.store,
            validator,
        };
        let saga = SagaBuilder::new()
            .step(BackupStep::<S>::new())
            .step(StageStep::<S>::new())
            .step(ValidateStep::<S>::new())
            .step(CommitStep::<S>::new())
            .build();

        let mut edit = PendingEdit::new(path.to_path_buf(), backup, new_text.to_string());
        let (result, audit) = saga.execute_with_audit(&ctx, &mut edit);
        debug!(path = %path.display(), steps = %audit.summary(), "transactional write finished");

        match result {
            Ok(()) => Ok(edit.backup),
            Err(SagaError::StepFailed { step, source }) => {
                warn!(path = %path.display(), step = %step, "edit rolled back");
                Err(source)
            }
            Err(SagaError::CompensationFailed {
                failed_step,
                step_error,
                compensation_errors,
            }) => {
                let Some(failure) = compensation_errors.into_iter().next() else {
                    return Err(step_error);
                };
                warn!(
                    path = %path.display(),
                    step = %failed_step,
                    backup = %edit.backup.display(),
                    "rollback failed"
                );
                Err(OperationError::Recovery {
                    path: edit.path,
                    backup: edit.backup,
                    step_error: Box::new(step_error),
                    source: Box::new(failure.error),
                })
            }
        }
    }
}
