use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid TOML")]
    Toml(#[source] toml_edit::TomlError),

    #[error("invalid INI at line {line}: {kind}")]
    Ini { line: usize, kind: IniErrorKind },

    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IniErrorKind {
    #[error("option appears before any section header")]
    MissingSectionHeader,

    #[error("line is neither a section header nor an option")]
    Malformed,

    #[error("option name is empty")]
    EmptyOptionName,

    #[error("section '{0}' already exists")]
    DuplicateSection(String),

    #[error("option '{option}' already exists in section '{section}'")]
    DuplicateOption { section: String, option: String },
}
