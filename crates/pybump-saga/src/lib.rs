//! Saga pattern for all-or-nothing multi-step operations.
//!
//! Steps run in order against a shared, mutable piece of data. When a step
//! fails, every step that already completed is compensated in reverse order,
//! and the outcome tells the caller whether the rollback itself succeeded.

mod audit;
mod builder;
mod error;
mod saga;
mod step;

pub use audit::{SagaAuditLog, StepRecord, StepStatus};
pub use builder::SagaBuilder;
pub use error::{CompensationError, SagaError};
pub use saga::Saga;
pub use step::SagaStep;
