use std::fmt::Debug;

use crate::audit::SagaAuditLog;
use crate::error::{CompensationError, SagaError};
use crate::step::SagaStep;

pub(crate) type BoxedStep<'a, Data, Ctx, Err> =
    Box<dyn SagaStep<Data = Data, Context = Ctx, Error = Err> + 'a>;

/// A sequence of steps ready for execution.
///
/// If any step fails, the steps that completed before it are compensated in
/// reverse order (LIFO). The failing step itself is not compensated.
pub struct Saga<'a, Data, Ctx, Err> {
    steps: Vec<BoxedStep<'a, Data, Ctx, Err>>,
}

impl<'a, Data, Ctx, Err> Saga<'a, Data, Ctx, Err> {
    pub(crate) fn from_steps(steps: Vec<BoxedStep<'a, Data, Ctx, Err>>) -> Self {
        Self { steps }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<Data, Ctx, Err> Saga<'_, Data, Ctx, Err>
where
    Err: Debug,
{
    /// # Errors
    ///
    /// Returns `SagaError::StepFailed` if a step fails and all compensations succeed.
    /// Returns `SagaError::CompensationFailed` if a step fails and some compensations also fail.
    pub fn execute(&self, ctx: &Ctx, data: &mut Data) -> Result<(), SagaError<Err>> {
        self.execute_with_audit(ctx, data).0
    }

    /// Execute the saga and return both the result and an audit log of
    /// every execution and compensation.
    pub fn execute_with_audit(
        &self,
        ctx: &Ctx,
        data: &mut Data,
    ) -> (Result<(), SagaError<Err>>, SagaAuditLog) {
        let mut audit_log = SagaAuditLog::new();

        for (index, step) in self.steps.iter().enumerate() {
            match step.execute(ctx, data) {
                Ok(()) => {
                    audit_log.record_executed(step.name(), step.compensation_description());
                }
                Err(error) => {
                    audit_log.record_failed(step.name());
                    let saga_error =
                        self.compensate(ctx, data, &mut audit_log, index, step.name(), error);
                    return (Err(saga_error), audit_log);
                }
            }
        }

        (Ok(()), audit_log)
    }

    fn compensate(
        &self,
        ctx: &Ctx,
        data: &mut Data,
        audit_log: &mut SagaAuditLog,
        failed_index: usize,
        failed_step: &str,
        step_error: Err,
    ) -> SagaError<Err> {
        let mut compensation_errors = Vec::new();

        for (index, step) in self.steps[..failed_index].iter().enumerate().rev() {
            match step.compensate(ctx, data) {
                Ok(()) => audit_log.record_compensated(index),
                Err(error) => {
                    audit_log.record_compensation_failed(index);
                    compensation_errors.push(CompensationError {
                        step: step.name().to_string(),
                        description: step.compensation_description(),
                        error,
                    });
                }
            }
        }

        if compensation_errors.is_empty() {
            SagaError::StepFailed {
                step: failed_step.to_string(),
                source: step_error,
            }
        } else {
            SagaError::CompensationFailed {
                failed_step: failed_step.to_string(),
                step_error,
                compensation_errors,
            }
        }
    }
}
