use std::path::PathBuf;

use pybump_manifest::Validator;

/// Dependencies shared by every step of one transactional write.
pub struct WriteContext<'a, S> {
    pub store: &'a S,
    pub validator: &'a dyn Validator,
}

/// State of one file edit as it moves through the steps.
pub struct PendingEdit<T> {
    pub path: PathBuf,
    pub backup: PathBuf,
    pub new_text: String,
    /// Present between a successful stage and the commit or discard.
    pub staged: Option<T>,
}

impl<T> PendingEdit<T> {
    pub fn new(path: PathBuf, backup: PathBuf, new_text: String) -> Self {
        Self {
            path,
            backup,
            new_text,
            staged: None,
        }
    }
}
