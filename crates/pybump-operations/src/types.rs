use std::path::PathBuf;

/// Options for a bump run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpInput {
    /// Compute and validate edits without backing up or writing anything.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    /// The file does not exist under the project root.
    Missing,
    /// No `version` assignment was found in a recognized section.
    Unchanged,
    /// The file was rewritten; `backup` holds its previous content.
    Updated { backup: PathBuf },
    /// Dry run: the file would be rewritten.
    WouldUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub path: PathBuf,
    pub status: TargetStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// Normalized `major.minor.patch` that was written.
    pub version: String,
    pub targets: Vec<TargetReport>,
}

impl BumpOutcome {
    /// Number of files rewritten (or that would be, for a dry run).
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|report| {
                matches!(
                    report.status,
                    TargetStatus::Updated { .. } | TargetStatus::WouldUpdate
                )
            })
            .count()
    }
}
