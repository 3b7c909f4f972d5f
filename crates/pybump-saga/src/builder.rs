use crate::saga::{BoxedStep, Saga};
use crate::step::SagaStep;

/// Collects steps in execution order.
///
/// ```
/// use pybump_saga::{SagaBuilder, SagaStep};
///
/// struct Push(u8);
///
/// impl SagaStep for Push {
///     type Data = Vec<u8>;
///     type Context = ();
///     type Error = String;
///
///     fn name(&self) -> &'static str {
///         "push"
///     }
///
///     fn execute(&self, _: &(), data: &mut Vec<u8>) -> Result<(), String> {
///         data.push(self.0);
///         Ok(())
///     }
/// }
///
/// let saga = SagaBuilder::new().step(Push(1)).step(Push(2)).build();
/// let mut data = Vec::new();
/// saga.execute(&(), &mut data).unwrap();
/// assert_eq!(data, [1, 2]);
/// ```
pub struct SagaBuilder<'a, Data, Ctx, Err> {
    steps: Vec<BoxedStep<'a, Data, Ctx, Err>>,
}

impl<'a, Data, Ctx, Err> SagaBuilder<'a, Data, Ctx, Err> {
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    #[must_use]
    pub fn step<S>(mut self, step: S) -> Self
    where
        S: SagaStep<Data = Data, Context = Ctx, Error = Err> + 'a,
    {
        self.steps.push(Box::new(step));
        self
    }

    #[must_use]
    pub fn build(self) -> Saga<'a, Data, Ctx, Err> {
        Saga::from_steps(self.steps)
    }
}

impl<Data, Ctx, Err> Default for SagaBuilder<'_, Data, Ctx, Err> {
    fn default() -> Self {
        Self::new()
    }
}
