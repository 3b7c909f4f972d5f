mod error;
mod ini;
mod patcher;
mod validate;

pub use error::{IniErrorKind, ValidationError};
pub use ini::validate_ini;
pub use patcher::{patch_sections, patch_target};
pub use validate::{Validator, validate, validate_toml};
