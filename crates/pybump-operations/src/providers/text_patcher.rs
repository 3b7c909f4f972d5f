use pybump_core::{ConfigTarget, EditResult, VersionSpec};

use crate::traits::TextPatcher;

/// Rewrites the `version` line of each of the target's sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionTextPatcher;

impl SectionTextPatcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextPatcher for SectionTextPatcher {
    fn patch(&self, target: &ConfigTarget, text: &str, version: &VersionSpec) -> EditResult {
        pybump_manifest::patch_target(text, target, &version.to_string())
    }
}
