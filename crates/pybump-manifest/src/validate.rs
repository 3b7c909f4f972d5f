use pybump_core::ConfigFormat;
use toml_edit::DocumentMut;

use crate::error::ValidationError;
use crate::ini::validate_ini;

/// Accept/reject oracle for candidate file content.
///
/// Implementations only check syntax; the parsed content is discarded.
pub trait Validator {
    /// # Errors
    ///
    /// Returns a `ValidationError` describing why `text` was rejected.
    fn validate(&self, text: &str) -> Result<(), ValidationError>;
}

impl Validator for ConfigFormat {
    fn validate(&self, text: &str) -> Result<(), ValidationError> {
        validate(*self, text)
    }
}

/// # Errors
///
/// Returns `ValidationError::Toml` or `ValidationError::Ini` when `text` is
/// not well-formed for `format`.
pub fn validate(format: ConfigFormat, text: &str) -> Result<(), ValidationError> {
    match format {
        ConfigFormat::Toml => validate_toml(text),
        ConfigFormat::Ini => validate_ini(text),
    }
}

/// # Errors
///
/// Returns `ValidationError::Toml` if `text` is malformed TOML, including
/// duplicate keys and tables.
pub fn validate_toml(text: &str) -> Result<(), ValidationError> {
    text.parse::<DocumentMut>()
        .map(drop)
        .map_err(ValidationError::Toml)
}
