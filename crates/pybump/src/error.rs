use std::process::ExitCode;

use pybump_operations::OperationError;
use thiserror::Error;

/// Bad version argument or command-line usage.
pub(crate) const EXIT_USAGE: u8 = 2;
/// Rewritten content was rejected; the file was restored.
pub(crate) const EXIT_VALIDATION: u8 = 3;
/// Restore failed or another I/O error occurred.
pub(crate) const EXIT_FAILURE: u8 = 4;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl CliError {
    pub(crate) fn exit_status(&self) -> u8 {
        match self {
            Self::Operation(OperationError::InvalidVersion(_)) => EXIT_USAGE,
            Self::Operation(OperationError::Validation { .. }) => EXIT_VALIDATION,
            Self::Operation(_) | Self::CurrentDir(_) => EXIT_FAILURE,
        }
    }

    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub(crate) fn hint(&self) -> Option<String> {
        match self {
            Self::Operation(OperationError::Recovery { path, backup, .. }) => Some(format!(
                "copy '{}' over '{}' to restore the original content",
                backup.display(),
                path.display()
            )),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use pybump_operations::{ValidationError, VersionError};

    use super::*;

    fn io_error() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    }

    fn operation_error(err: OperationError) -> CliError {
        err.into()
    }

    #[test]
    fn invalid_version_is_usage_error() {
        let err = operation_error(OperationError::InvalidVersion(VersionError::Invalid {
            input: "1.2".to_string(),
        }));

        assert_eq!(err.exit_status(), EXIT_USAGE);
    }

    #[test]
    fn validation_error_has_its_own_status() {
        let err = operation_error(OperationError::Validation {
            path: PathBuf::from("setup.cfg"),
            source: ValidationError::Rejected("bad".to_string()),
        });

        assert_eq!(err.exit_status(), EXIT_VALIDATION);
        assert!(err.hint().is_none());
    }

    #[test]
    fn recovery_error_is_failure_with_hint() {
        let err = operation_error(OperationError::Recovery {
            path: PathBuf::from("setup.cfg"),
            backup: PathBuf::from("setup.cfg.bak.20240101000000"),
            step_error: Box::new(OperationError::Commit {
                path: PathBuf::from("setup.cfg"),
                source: io_error(),
            }),
            source: Box::new(OperationError::Restore {
                path: PathBuf::from("setup.cfg"),
                backup: PathBuf::from("setup.cfg.bak.20240101000000"),
                source: io_error(),
            }),
        });

        assert_eq!(err.exit_status(), EXIT_FAILURE);
        let hint = err.hint().expect("recovery has a hint");
        assert!(hint.contains("setup.cfg.bak.20240101000000"));
    }

    #[test]
    fn io_errors_are_failures() {
        let read = operation_error(OperationError::Read {
            path: PathBuf::from("pyproject.toml"),
            source: io_error(),
        });
        let cwd = CliError::CurrentDir(io_error());

        assert_eq!(read.exit_status(), EXIT_FAILURE);
        assert_eq!(cwd.exit_status(), EXIT_FAILURE);
    }

    #[test]
    fn operation_error_display_is_transparent() {
        let err = operation_error(OperationError::Read {
            path: PathBuf::from("pyproject.toml"),
            source: io_error(),
        });

        assert_eq!(err.to_string(), "failed to read 'pyproject.toml'");
        assert!(std::error::Error::source(&err).is_some());
    }
}
