use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// A `major.minor.patch` triple taken from a user-supplied version string.
///
/// The digit groups are kept as the literal matched text, so `01.2.3` stays
/// `01.2.3`. A leading `v` and any `-`/`+` suffix are accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionSpec {
    major: String,
    minor: String,
    patch: String,
}

impl VersionSpec {
    /// # Errors
    ///
    /// Returns `VersionError::Invalid` if `input` does not match
    /// `v?DIGITS.DIGITS.DIGITS` optionally followed by a single-line `-` or
    /// `+` suffix. A trailing newline is not accepted.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let invalid = || VersionError::Invalid {
            input: input.to_string(),
        };

        let rest = input.strip_prefix('v').unwrap_or(input);
        let (major, rest) = split_digits(rest).ok_or_else(invalid)?;
        let rest = rest.strip_prefix('.').ok_or_else(invalid)?;
        let (minor, rest) = split_digits(rest).ok_or_else(invalid)?;
        let rest = rest.strip_prefix('.').ok_or_else(invalid)?;
        let (patch, suffix) = split_digits(rest).ok_or_else(invalid)?;

        if !is_discardable_suffix(suffix) {
            return Err(invalid());
        }

        Ok(Self {
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.to_string(),
        })
    }

    #[must_use]
    pub fn major(&self) -> &str {
        &self.major
    }

    #[must_use]
    pub fn minor(&self) -> &str {
        &self.minor
    }

    #[must_use]
    pub fn patch(&self) -> &str {
        &self.patch
    }
}

impl FromStr for VersionSpec {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Normalizes a version argument to `major.minor.patch`.
///
/// # Errors
///
/// Returns `VersionError::Invalid` if the input is not a semver-prefixed string.
pub fn parse_version(input: &str) -> Result<String, VersionError> {
    VersionSpec::parse(input).map(|spec| spec.to_string())
}

fn split_digits(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (end > 0).then(|| s.split_at(end))
}

/// Empty, or a `-`/`+` suffix on a single line.
///
/// Any `\n` is rejected, including a lone trailing newline after the patch
/// number: `"1.2.3\n"` is not a version.
fn is_discardable_suffix(suffix: &str) -> bool {
    match suffix.chars().next() {
        None => true,
        Some('-' | '+') => !suffix.contains('\n'),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_triple_is_returned_unchanged() {
        assert_eq!(parse_version("1.2.3").as_deref(), Ok("1.2.3"));
    }

    #[test]
    fn leading_v_is_stripped() {
        assert_eq!(parse_version("v4.5.6").as_deref(), Ok("4.5.6"));
    }

    #[test]
    fn prerelease_and_build_suffixes_are_dropped() {
        assert_eq!(parse_version("1.2.3-rc.1").as_deref(), Ok("1.2.3"));
        assert_eq!(parse_version("1.2.3+build.7").as_deref(), Ok("1.2.3"));
        assert_eq!(parse_version("v0.0.1-alpha+exp").as_deref(), Ok("0.0.1"));
    }

    #[test]
    fn bare_separator_suffix_is_accepted() {
        assert_eq!(parse_version("1.2.3-").as_deref(), Ok("1.2.3"));
    }

    #[test]
    fn leading_zeros_are_kept_verbatim() {
        let spec = VersionSpec::parse("01.2.003").expect("valid version");

        assert_eq!(spec.major(), "01");
        assert_eq!(spec.minor(), "2");
        assert_eq!(spec.patch(), "003");
        assert_eq!(spec.to_string(), "01.2.003");
    }

    #[test]
    fn long_digit_groups_are_accepted() {
        let input = "123456789012345678901234567890.0.0";
        assert_eq!(parse_version(input).as_deref(), Ok(input));
    }

    #[test]
    fn rejects_malformed_inputs() {
        for input in [
            "",
            "v",
            "1",
            "1.2",
            "1.2.",
            "1..3",
            ".1.2.3",
            "1.2.3.4",
            "1.2.3rc1",
            "1.2.3 ",
            " 1.2.3",
            "V1.2.3",
            "vv1.2.3",
            "a.b.c",
            "1.2.x",
            "1.2.3-rc\nnext",
        ] {
            assert_eq!(
                parse_version(input),
                Err(VersionError::Invalid {
                    input: input.to_string()
                }),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn trailing_newline_is_rejected() {
        for input in ["1.2.3\n", "v1.2.3\n", "1.2.3-rc.1\n", "1.2.3\r\n"] {
            assert!(parse_version(input).is_err(), "expected {input:?} to be rejected");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(parse_version("١.٢.٣").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let spec: VersionSpec = "v2.0.0-beta".parse().expect("valid version");

        assert_eq!(spec, VersionSpec::parse("2.0.0").expect("valid version"));
    }
}
