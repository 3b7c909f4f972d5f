use std::io;
use std::marker::PhantomData;

use pybump_saga::SagaStep;
use tracing::{debug, info, warn};

use super::data::{PendingEdit, WriteContext};
use crate::OperationError;
use crate::traits::EditStore;

macro_rules! marker_step {
    ($name:ident) => {
        pub struct $name<'a, S> {
            _marker: PhantomData<&'a S>,
        }

        impl<S> $name<'_, S> {
            #[must_use]
            pub fn new() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }
        }

        impl<S> Default for $name<'_, S> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

marker_step!(BackupStep);
marker_step!(StageStep);
marker_step!(ValidateStep);
marker_step!(CommitStep);

impl<'a, S: EditStore> SagaStep for BackupStep<'a, S> {
    type Data = PendingEdit<S::Staged>;
    type Context = WriteContext<'a, S>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "backup"
    }

    fn execute(&self, ctx: &Self::Context, data: &mut Self::Data) -> Result<(), Self::Error> {
        ctx.store
            .backup(&data.path, &data.backup)
            .map_err(|source| OperationError::Backup {
                path: data.path.clone(),
                backup: data.backup.clone(),
                source,
            })?;
        debug!(
            path = %data.path.display(),
            backup = %data.backup.display(),
            "backed up file"
        );
        Ok(())
    }

    fn compensate(&self, ctx: &Self::Context, data: &mut Self::Data) -> Result<(), Self::Error> {
        warn!(
            path = %data.path.display(),
            backup = %data.backup.display(),
            "restoring file from backup"
        );
        ctx.store
            .restore(&data.backup, &data.path)
            .map_err(|source| OperationError::Restore {
                path: data.path.clone(),
                backup: data.backup.clone(),
                source,
            })
    }

    fn compensation_description(&self) -> String {
        "restore file from backup".to_string()
    }
}

impl<'a, S: EditStore> SagaStep for StageStep<'a, S> {
    type Data = PendingEdit<S::Staged>;
    type Context = WriteContext<'a, S>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "stage"
    }

    fn execute(&self, ctx: &Self::Context, data: &mut Self::Data) -> Result<(), Self::Error> {
        let staged = ctx
            .store
            .stage(&data.path, &data.new_text)
            .map_err(|source| OperationError::Stage {
                path: data.path.clone(),
                source,
            })?;
        data.staged = Some(staged);
        debug!(path = %data.path.display(), "staged new content");
        Ok(())
    }

    fn compensate(&self, ctx: &Self::Context, data: &mut Self::Data) -> Result<(), Self::Error> {
        if let Some(staged) = data.staged.take() {
            if let Err(err) = ctx.store.discard(staged) {
                debug!(error = %err, "ignoring failure to remove staging file");
            }
        }
        Ok(())
    }

    fn compensation_description(&self) -> String {
        "remove staging file".to_string()
    }
}

impl<'a, S: EditStore> SagaStep for ValidateStep<'a, S> {
    type Data = PendingEdit<S::Staged>;
    type Context = WriteContext<'a, S>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "validate"
    }

    fn execute(&self, ctx: &Self::Context, data: &mut Self::Data) -> Result<(), Self::Error> {
        let stage_error = |source: io::Error| OperationError::Stage {
            path: data.path.clone(),
            source,
        };

        let staged = data
            .staged
            .as_ref()
            .ok_or_else(|| stage_error(io::Error::other("no staged content")))?;
        let content = ctx.store.read_staged(staged).map_err(stage_error)?;

        ctx.validator
            .validate(&content)
            .map_err(|source| OperationError::Validation {
                path: data.path.clone(),
                source,
            })?;
        debug!(path = %data.path.display(), "staged content is valid");
        Ok(())
    }
}

impl<'a, S: EditStore> SagaStep for CommitStep<'a, S> {
    type Data = PendingEdit<S::Staged>;
    type Context = WriteContext<'a, S>;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "commit"
    }

    fn execute(&self, ctx: &Self::Context, data: &mut Self::Data) -> Result<(), Self::Error> {
        let commit_error = |source: io::Error| OperationError::Commit {
            path: data.path.clone(),
            source,
        };

        let staged = data
            .staged
            .take()
            .ok_or_else(|| commit_error(io::Error::other("no staged content")))?;
        ctx.store.commit(staged, &data.path).map_err(commit_error)?;
        info!(path = %data.path.display(), "updated file");
        Ok(())
    }
}
