use std::path::PathBuf;

use pybump_core::VersionError;
use pybump_manifest::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    InvalidVersion(#[from] VersionError),

    #[error("updated '{path}' failed validation; original content kept")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("could not restore '{path}' from backup '{backup}'; recover it manually")]
    Recovery {
        path: PathBuf,
        backup: PathBuf,
        /// Why the edit was rolled back.
        step_error: Box<OperationError>,
        /// Why the rollback failed.
        #[source]
        source: Box<OperationError>,
    },

    #[error("cannot use '{path}' as the project root")]
    ProjectRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to back up '{path}' to '{backup}'")]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stage new content for '{path}'")]
    Stage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to replace '{path}' with staged content")]
    Commit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to restore '{path}' from '{backup}'")]
    Restore {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OperationError {
    /// True if the on-disk state of a target may no longer match either its
    /// original or its intended content.
    #[must_use]
    pub fn needs_manual_recovery(&self) -> bool {
        matches!(self, Self::Recovery { .. })
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
