use std::fmt;
use std::path::{Path, PathBuf};

/// Syntax family of a config file. Decides how section headers are compared
/// and which parser validates rewritten content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Toml,
    Ini,
}

impl ConfigFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Ini => "INI",
        }
    }

    /// Returns true if the trimmed header line `header` (brackets included)
    /// names `section`.
    ///
    /// TOML table names are case-sensitive; INI section names are compared
    /// case-insensitively.
    #[must_use]
    pub fn header_matches(self, header: &str, section: &str) -> bool {
        let Some(name) = header
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        else {
            return false;
        };

        match self {
            Self::Toml => name == section,
            Self::Ini => name.to_lowercase() == section.to_lowercase(),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A config file that may carry a project version, relative to a project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigTarget {
    pub file_name: &'static str,
    pub format: ConfigFormat,
    /// Sections whose first `version` assignment is rewritten, in scan order.
    pub sections: &'static [&'static str],
}

impl ConfigTarget {
    #[must_use]
    pub const fn pyproject() -> Self {
        Self {
            file_name: "pyproject.toml",
            format: ConfigFormat::Toml,
            sections: &["tool.poetry", "project"],
        }
    }

    #[must_use]
    pub const fn setup_cfg() -> Self {
        Self {
            file_name: "setup.cfg",
            format: ConfigFormat::Ini,
            sections: &["metadata"],
        }
    }

    /// The targets a bump visits, in processing order.
    #[must_use]
    pub const fn defaults() -> [Self; 2] {
        [Self::pyproject(), Self::setup_cfg()]
    }

    #[must_use]
    pub fn path_in(&self, root: &Path) -> PathBuf {
        root.join(self.file_name)
    }
}

/// Outcome of patching one file's text, computed before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    pub changed: bool,
    pub new_text: String,
}

impl EditResult {
    #[must_use]
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            changed: false,
            new_text: text.into(),
        }
    }
}
