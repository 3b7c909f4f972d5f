use pybump_core::{ConfigTarget, EditResult, VersionSpec};

/// Computes the rewritten text of a target. Must not touch the filesystem.
pub trait TextPatcher {
    fn patch(&self, target: &ConfigTarget, text: &str, version: &VersionSpec) -> EditResult;
}
