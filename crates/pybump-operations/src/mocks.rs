use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use pybump_core::{ConfigTarget, EditResult, VersionSpec};

use crate::traits::{EditStore, TextPatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockFailure {
    Exists,
    Read,
    Backup,
    Stage,
    ReadStaged,
    Commit,
    Discard,
    Restore,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MockStaged(u32);

/// In-memory store that records every call and can be told to fail any
/// operation.
#[derive(Default)]
pub struct MockEditStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
    staged: RefCell<BTreeMap<u32, String>>,
    next_id: Cell<u32>,
    failures: RefCell<HashSet<MockFailure>>,
    missing_dirs: RefCell<HashSet<PathBuf>>,
    calls: RefCell<Vec<String>>,
}

impl MockEditStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(path.into(), content.to_string());
        self
    }

    #[must_use]
    pub fn without_dir(self, path: impl Into<PathBuf>) -> Self {
        self.missing_dirs.borrow_mut().insert(path.into());
        self
    }

    #[must_use]
    pub fn failing(self, failure: MockFailure) -> Self {
        self.failures.borrow_mut().insert(failure);
        self
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn staged_count(&self) -> usize {
        self.staged.borrow().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn check(&self, failure: MockFailure, call: &str) -> io::Result<()> {
        self.calls.borrow_mut().push(call.to_string());
        if self.failures.borrow().contains(&failure) {
            return Err(io::Error::other(format!("injected {call} failure")));
        }
        Ok(())
    }

    fn get(&self, path: &Path) -> io::Result<String> {
        self.file(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}

impl EditStore for MockEditStore {
    type Staged = MockStaged;

    fn check_dir(&self, path: &Path) -> io::Result<()> {
        if self.missing_dirs.borrow().contains(path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        if self.failures.borrow().contains(&MockFailure::Exists) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(self.files.borrow().contains_key(path))
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        self.check(MockFailure::Read, "read")?;
        self.get(path)
    }

    fn backup(&self, path: &Path, backup: &Path) -> io::Result<()> {
        self.check(MockFailure::Backup, "backup")?;
        let content = self.get(path)?;
        self.files.borrow_mut().insert(backup.to_path_buf(), content);
        Ok(())
    }

    fn stage(&self, _target: &Path, content: &str) -> io::Result<MockStaged> {
        self.check(MockFailure::Stage, "stage")?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.staged.borrow_mut().insert(id, content.to_string());
        Ok(MockStaged(id))
    }

    fn read_staged(&self, staged: &MockStaged) -> io::Result<String> {
        self.check(MockFailure::ReadStaged, "read_staged")?;
        self.staged
            .borrow()
            .get(&staged.0)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn commit(&self, staged: MockStaged, target: &Path) -> io::Result<()> {
        let content = self.staged.borrow_mut().remove(&staged.0);
        self.check(MockFailure::Commit, "commit")?;
        let content = content.ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        self.files.borrow_mut().insert(target.to_path_buf(), content);
        Ok(())
    }

    fn discard(&self, staged: MockStaged) -> io::Result<()> {
        self.check(MockFailure::Discard, "discard")?;
        self.staged.borrow_mut().remove(&staged.0);
        Ok(())
    }

    fn restore(&self, backup: &Path, target: &Path) -> io::Result<()> {
        self.check(MockFailure::Restore, "restore")?;
        let content = self.get(backup)?;
        self.files.borrow_mut().insert(target.to_path_buf(), content);
        Ok(())
    }
}

/// Patcher that returns a fixed text for every target.
pub struct FixedTextPatcher {
    text: String,
}

impl FixedTextPatcher {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl TextPatcher for FixedTextPatcher {
    fn patch(&self, _target: &ConfigTarget, _text: &str, _version: &VersionSpec) -> EditResult {
        EditResult {
            changed: true,
            new_text: self.text.clone(),
        }
    }
}
