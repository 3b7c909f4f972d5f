/// A step in a saga that can be executed and compensated.
///
/// Steps communicate through `Data`, which every step may read and update.
/// `Context` carries injected dependencies that do not change during a run.
pub trait SagaStep {
    /// State threaded through all steps of one saga run.
    type Data;

    /// Shared dependencies.
    type Context;

    /// Error type for step and compensation failures.
    type Error;

    /// Human-readable name for logging and error messages.
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns an error if the step fails to complete. The step must leave
    /// `data` in a state its own compensation is not needed for.
    fn execute(&self, ctx: &Self::Context, data: &mut Self::Data) -> Result<(), Self::Error>;

    /// Undo the step's effects after a later step failed.
    ///
    /// The default implementation is a no-op, suitable for steps with no
    /// side effects.
    ///
    /// # Errors
    ///
    /// Returns an error if compensation fails.
    fn compensate(&self, ctx: &Self::Context, data: &mut Self::Data) -> Result<(), Self::Error> {
        let _ = (ctx, data);
        Ok(())
    }

    /// Human-readable description of what compensation will do.
    fn compensation_description(&self) -> String {
        format!("undo {}", self.name())
    }
}
