use std::fmt::Debug;

use thiserror::Error;

/// Error from a failed compensation.
#[derive(Debug, Error)]
#[error("compensation failed for step '{step}': {description}")]
pub struct CompensationError<E> {
    /// Name of the step whose compensation failed.
    pub step: String,
    /// Description of what the compensation was trying to do.
    pub description: String,
    #[source]
    pub error: E,
}

/// Error from saga execution.
#[derive(Debug, Error)]
pub enum SagaError<E: Debug> {
    /// A step failed and every completed step was compensated.
    #[error("step '{step}' failed")]
    StepFailed {
        step: String,
        #[source]
        source: E,
    },

    /// A step failed and at least one compensation failed as well.
    #[error("step '{failed_step}' failed, and {} compensation(s) also failed", compensation_errors.len())]
    CompensationFailed {
        failed_step: String,
        step_error: E,
        compensation_errors: Vec<CompensationError<E>>,
    },
}

impl<E: Debug> SagaError<E> {
    /// Name of the step whose failure started the rollback.
    #[must_use]
    pub fn failed_step(&self) -> &str {
        match self {
            Self::StepFailed { step, .. } => step,
            Self::CompensationFailed { failed_step, .. } => failed_step,
        }
    }

    /// The error returned by the failing step.
    #[must_use]
    pub fn step_error(&self) -> &E {
        match self {
            Self::StepFailed { source, .. } => source,
            Self::CompensationFailed { step_error, .. } => step_error,
        }
    }
}
