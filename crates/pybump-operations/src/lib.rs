mod error;
pub mod operations;
pub mod providers;
pub mod traits;
mod types;

#[cfg(test)]
pub mod mocks;

pub use error::{OperationError, Result};
pub use pybump_core::VersionError;
pub use pybump_manifest::ValidationError;
pub use types::{BumpInput, BumpOutcome, TargetReport, TargetStatus};
