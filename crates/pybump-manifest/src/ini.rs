use std::collections::HashSet;

use crate::error::{IniErrorKind, ValidationError};

const COMMENT_PREFIXES: [char; 2] = ['#', ';'];
const OPTION_DELIMITERS: [char; 2] = ['=', ':'];
const DEFAULT_SECTION: &str = "DEFAULT";

/// Checks `text` with the strict rules of a standard INI reader.
///
/// Full-line `#`/`;` comments and blank lines are skipped. An option line
/// indented deeper than the option above it continues that option's value.
/// Section names are case-sensitive; option names are not. Repeating a
/// section (other than `DEFAULT`) or an option within one section is an
/// error.
///
/// # Errors
///
/// Returns `ValidationError::Ini` with the 1-based line number of the first
/// offending line.
pub fn validate_ini(text: &str) -> Result<(), ValidationError> {
    let mut reader = IniReader::default();

    for (index, line) in text.lines().enumerate() {
        reader
            .read_line(line)
            .map_err(|kind| ValidationError::Ini {
                line: index + 1,
                kind,
            })?;
    }

    Ok(())
}

#[derive(Default)]
struct IniReader {
    sections: HashSet<String>,
    options: HashSet<(String, String)>,
    current_section: Option<String>,
    in_option: bool,
    indent_level: usize,
}

impl IniReader {
    fn read_line(&mut self, line: &str) -> Result<(), IniErrorKind> {
        let value = line.trim();
        if value.is_empty() || value.starts_with(COMMENT_PREFIXES) {
            return Ok(());
        }

        let indent = line.len() - line.trim_start().len();
        if self.current_section.is_some() && self.in_option && indent > self.indent_level {
            return Ok(());
        }
        self.indent_level = indent;

        if let Some(name) = section_header(value) {
            return self.enter_section(name);
        }

        let Some(section) = self.current_section.clone() else {
            return Err(IniErrorKind::MissingSectionHeader);
        };

        let Some(delimiter) = value.find(OPTION_DELIMITERS) else {
            return Err(IniErrorKind::Malformed);
        };

        let option = value[..delimiter].trim_end().to_lowercase();
        if option.is_empty() {
            return Err(IniErrorKind::EmptyOptionName);
        }

        if !self.options.insert((section.clone(), option.clone())) {
            return Err(IniErrorKind::DuplicateOption { section, option });
        }
        self.in_option = true;

        Ok(())
    }

    fn enter_section(&mut self, name: &str) -> Result<(), IniErrorKind> {
        if name != DEFAULT_SECTION && !self.sections.insert(name.to_string()) {
            return Err(IniErrorKind::DuplicateSection(name.to_string()));
        }
        self.current_section = Some(name.to_string());
        self.in_option = false;

        Ok(())
    }
}

/// `[name]` at the start of a trimmed line; `name` runs to the last `]`.
fn section_header(value: &str) -> Option<&str> {
    let rest = value.strip_prefix('[')?;
    let end = rest.rfind(']')?;
    (end > 0).then(|| &rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ini_error(text: &str) -> (usize, IniErrorKind) {
        match validate_ini(text) {
            Err(ValidationError::Ini { line, kind }) => (line, kind),
            other => panic!("expected INI error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_typical_setup_cfg() {
        let text = "\
[metadata]
name = pkg
version = 0.3.0
description: A package
classifiers =
    Programming Language :: Python :: 3
    License :: OSI Approved :: MIT License

; options section
[options]
packages = find:
install_requires =
    requests>=2

# trailing comment
";

        assert!(validate_ini(text).is_ok());
    }

    #[test]
    fn accepts_empty_document() {
        assert!(validate_ini("").is_ok());
        assert!(validate_ini("\n# only a comment\n").is_ok());
    }

    #[test]
    fn rejects_option_before_header() {
        assert_eq!(
            ini_error("version = 1.0.0\n[metadata]\n"),
            (1, IniErrorKind::MissingSectionHeader)
        );
    }

    #[test]
    fn rejects_line_without_delimiter() {
        assert_eq!(
            ini_error("[metadata]\nname = pkg\nthis is not an option\n"),
            (3, IniErrorKind::Malformed)
        );
    }

    #[test]
    fn rejects_empty_option_name() {
        assert_eq!(
            ini_error("[metadata]\n= 1.0.0\n"),
            (2, IniErrorKind::EmptyOptionName)
        );
    }

    #[test]
    fn rejects_duplicate_section() {
        assert_eq!(
            ini_error("[metadata]\nname = a\n[options]\n[metadata]\n"),
            (4, IniErrorKind::DuplicateSection("metadata".to_string()))
        );
    }

    #[test]
    fn section_names_are_case_sensitive_for_duplicates() {
        assert!(validate_ini("[metadata]\n[Metadata]\n").is_ok());
    }

    #[test]
    fn default_section_may_repeat() {
        assert!(validate_ini("[DEFAULT]\na = 1\n[DEFAULT]\nb = 2\n").is_ok());
    }

    #[test]
    fn rejects_duplicate_option_ignoring_case() {
        assert_eq!(
            ini_error("[metadata]\nversion = 1.0.0\nVersion = 2.0.0\n"),
            (
                3,
                IniErrorKind::DuplicateOption {
                    section: "metadata".to_string(),
                    option: "version".to_string(),
                }
            )
        );
    }

    #[test]
    fn same_option_in_different_sections_is_allowed() {
        assert!(validate_ini("[a]\nversion = 1\n[b]\nversion = 2\n").is_ok());
    }

    #[test]
    fn indented_line_after_header_is_not_a_continuation() {
        assert_eq!(
            ini_error("[metadata]\n    stray text\n"),
            (2, IniErrorKind::Malformed)
        );
    }

    #[test]
    fn header_with_trailing_text_is_still_a_header() {
        assert!(validate_ini("[metadata] trailing\nname = pkg\n").is_ok());
    }

    #[test]
    fn empty_brackets_are_not_a_header() {
        assert_eq!(ini_error("[]\n"), (1, IniErrorKind::MissingSectionHeader));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        assert!(validate_ini("[metadata]\r\nversion = 1.0.0\r\n").is_ok());
    }
}
