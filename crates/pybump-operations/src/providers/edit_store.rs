use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, TempPath};
use tracing::debug;

use crate::traits::EditStore;

const STAGING_PREFIX: &str = ".tmp_bump_";
const RESTORE_PREFIX: &str = ".tmp_bump_restore_";

/// Local filesystem store. Staging files are created in the target's own
/// directory so the final rename never crosses a filesystem boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemEditStore;

impl FileSystemEditStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Gives the staging file the target's permissions so the rename does not
/// tighten them to the temp file default.
fn copy_permissions(target: &Path, staged: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(metadata) => fs::set_permissions(staged, metadata.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

/// Best effort: read-only backups may refuse a write handle.
fn copy_modified_time(source: &Path, copy: &Path) -> io::Result<()> {
    let modified = fs::metadata(source)?.modified()?;
    let file = File::options()
        .write(true)
        .open(copy)
        .or_else(|_| File::open(copy))?;
    file.set_modified(modified)
}

impl EditStore for FileSystemEditStore {
    type Staged = TempPath;

    fn check_dir(&self, path: &Path) -> io::Result<()> {
        if fs::metadata(path)?.is_dir() {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotADirectory, "not a directory"))
        }
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn backup(&self, path: &Path, backup: &Path) -> io::Result<()> {
        fs::copy(path, backup)?;
        if let Err(err) = copy_modified_time(path, backup) {
            debug!(backup = %backup.display(), error = %err, "could not keep modification time");
        }
        Ok(())
    }

    fn stage(&self, target: &Path, content: &str) -> io::Result<TempPath> {
        let mut file = Builder::new()
            .prefix(STAGING_PREFIX)
            .tempfile_in(parent_dir(target))?;
        file.write_all(content.as_bytes())?;
        file.as_file().sync_all()?;

        let staged = file.into_temp_path();
        copy_permissions(target, &staged)?;
        Ok(staged)
    }

    fn read_staged(&self, staged: &TempPath) -> io::Result<String> {
        fs::read_to_string(staged)
    }

    fn commit(&self, staged: TempPath, target: &Path) -> io::Result<()> {
        staged.persist(target).map_err(|err| err.error)
    }

    fn discard(&self, staged: TempPath) -> io::Result<()> {
        staged.close()
    }

    fn restore(&self, backup: &Path, target: &Path) -> io::Result<()> {
        let staged = Builder::new()
            .prefix(RESTORE_PREFIX)
            .tempfile_in(parent_dir(target))?
            .into_temp_path();
        fs::copy(backup, &staged)?;
        staged.persist(target).map_err(|err| err.error)
    }
}
