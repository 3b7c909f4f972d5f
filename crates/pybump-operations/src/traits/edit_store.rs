use std::io;
use std::path::Path;

/// File operations needed to edit a file without ever exposing partial
/// content at its path.
pub trait EditStore {
    /// Handle to content written next to a target but not yet committed.
    /// Dropping it must remove the staged content.
    type Staged;

    /// # Errors
    ///
    /// Returns an error if `path` cannot be a directory or cannot be
    /// inspected.
    fn check_dir(&self, path: &Path) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if it cannot be determined whether `path` exists,
    /// e.g. when a parent directory is not searchable.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8 text.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Copies `path` to `backup` byte for byte, leaving `path` in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the copy cannot be made.
    fn backup(&self, path: &Path, backup: &Path) -> io::Result<()>;

    /// Writes `content` to a new staging file in `target`'s directory and
    /// closes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the staging file cannot be created or written.
    fn stage(&self, target: &Path, content: &str) -> io::Result<Self::Staged>;

    /// # Errors
    ///
    /// Returns an error if the staged content cannot be read back.
    fn read_staged(&self, staged: &Self::Staged) -> io::Result<String>;

    /// Atomically replaces `target` with the staged content.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails. The staged content is removed
    /// either way.
    fn commit(&self, staged: Self::Staged, target: &Path) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the staged content could not be removed.
    fn discard(&self, staged: Self::Staged) -> io::Result<()>;

    /// Atomically replaces `target` with the content of `backup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup cannot be copied back.
    fn restore(&self, backup: &Path, target: &Path) -> io::Result<()>;
}
