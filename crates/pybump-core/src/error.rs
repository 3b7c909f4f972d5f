use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("invalid version '{input}' (expected [v]MAJOR.MINOR.PATCH[-PRE|+BUILD])")]
    Invalid { input: String },
}
