use pybump_core::{ConfigFormat, ConfigTarget, EditResult};

const VERSION_KEY: &str = "version";
const QUOTES: [char; 2] = ['"', '\''];

/// Rewrites the `version` assignment of each section in `target.sections`.
#[must_use]
pub fn patch_target(original: &str, target: &ConfigTarget, new_version: &str) -> EditResult {
    patch_sections(original, target.sections, target.format, new_version)
}

/// Rewrites the first `version = …` line inside each of `sections`.
///
/// The text is scanned line by line. A trimmed line wrapped in `[` and `]`
/// switches the current section; the header must name a listed section
/// exactly (ignoring case for INI). Each listed section gets at most one
/// replacement, even when its header appears more than once. Lines before
/// the first header are never touched.
///
/// The replacement keeps the key spacing, the quote character, trailing
/// whitespace and the line terminator of the original line. TOML values
/// must be quoted to qualify; INI values may be bare.
#[must_use]
pub fn patch_sections(
    original: &str,
    sections: &[&str],
    format: ConfigFormat,
    new_version: &str,
) -> EditResult {
    let mut replaced = vec![false; sections.len()];
    let mut current: Option<usize> = None;
    let mut new_text = String::with_capacity(original.len() + new_version.len());

    for line in original.split_inclusive('\n') {
        let trimmed = line.trim();
        if is_section_header(trimmed) {
            current = sections
                .iter()
                .position(|section| format.header_matches(trimmed, section));
            new_text.push_str(line);
            continue;
        }

        if let Some(index) = current.filter(|&index| !replaced[index]) {
            if let Some(assignment) = VersionAssignment::parse(line, format) {
                assignment.write_to(&mut new_text, new_version);
                replaced[index] = true;
                continue;
            }
        }

        new_text.push_str(line);
    }

    EditResult {
        changed: replaced.contains(&true),
        new_text,
    }
}

fn is_section_header(trimmed: &str) -> bool {
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// A `version = value` line split around its value.
#[derive(Debug, PartialEq, Eq)]
struct VersionAssignment<'a> {
    /// `version`, the `=` and the whitespace around it.
    prefix: &'a str,
    quote: Option<char>,
    /// Trailing whitespace plus the line terminator.
    suffix: &'a str,
}

impl<'a> VersionAssignment<'a> {
    fn parse(line: &'a str, format: ConfigFormat) -> Option<Self> {
        let (body, suffix) = line.split_at(line.trim_end().len());

        let after_key = body.strip_prefix(VERSION_KEY)?;
        let after_eq = after_key.trim_start().strip_prefix('=')?;
        let value = after_eq.trim_start();
        if value.is_empty() {
            return None;
        }
        let prefix = &body[..body.len() - value.len()];

        let quote = match quoted_with(value) {
            Some(quote) => Some(quote),
            // INI has no string syntax, so anything else is a bare value.
            None if format == ConfigFormat::Ini => None,
            None => return None,
        };

        Some(Self {
            prefix,
            quote,
            suffix,
        })
    }

    fn write_to(&self, out: &mut String, new_version: &str) {
        out.push_str(self.prefix);
        if let Some(quote) = self.quote {
            out.push(quote);
            out.push_str(new_version);
            out.push(quote);
        } else {
            out.push_str(new_version);
        }
        out.push_str(self.suffix);
    }
}

/// Returns the quote character if `value` is a single non-empty quoted string.
fn quoted_with(value: &str) -> Option<char> {
    let quote = value.chars().next().filter(|c| QUOTES.contains(c))?;
    let inner = value.strip_prefix(quote)?.strip_suffix(quote)?;
    (!inner.is_empty() && !inner.contains(quote)).then_some(quote)
}
