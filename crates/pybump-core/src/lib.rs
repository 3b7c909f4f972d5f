pub mod error;
mod target;
mod version;

pub use error::VersionError;
pub use target::{ConfigFormat, ConfigTarget, EditResult};
pub use version::{VersionSpec, parse_version};
