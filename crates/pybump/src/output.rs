use std::fmt::Write;
use std::path::Path;

use pybump_operations::{BumpOutcome, TargetStatus};

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// One line per known config file.
pub(crate) fn format_outcome(outcome: &BumpOutcome, root: &Path, dry_run: bool) -> String {
    let mut output = String::new();
    if dry_run {
        output.push_str("Dry run - no files will be modified.\n");
    }

    for report in &outcome.targets {
        let name = relative(&report.path, root).display();
        let _ = match &report.status {
            TargetStatus::Missing => writeln!(output, "  {name}: not found"),
            TargetStatus::Unchanged => writeln!(output, "  {name}: no version field"),
            TargetStatus::WouldUpdate => {
                writeln!(output, "  {name}: would set version {}", outcome.version)
            }
            TargetStatus::Updated { backup } => writeln!(
                output,
                "  {name}: version {} (backup: {})",
                outcome.version,
                relative(backup, root).display()
            ),
        };
    }

    output
}

pub(crate) fn summary_line(outcome: &BumpOutcome, dry_run: bool) -> String {
    match (outcome.changed_count(), dry_run) {
        (0, _) => "No version fields found; nothing changed.".to_string(),
        (_, true) => format!("Would update version -> {}", outcome.version),
        (_, false) => format!("Updated version -> {}", outcome.version),
    }
}
