//! The file-backed blob store behind the `/files/` routes.

use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub enum StoreError {
    /// Name would resolve outside the store root.
    InvalidName,
    Io(std::io::Error),
}

/// Blobs keyed by filename under a single root directory.
///
/// The root is injected at construction; the store never consults global
/// state. Concurrent `put`s to the same name race with last-write-wins
/// semantics, no locking.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Joins `name` under the root, rejecting anything that could escape it.
    ///
    /// Every path component must be a normal segment: empty names, absolute
    /// paths, `.` and `..` are all [`StoreError::InvalidName`]. Checked
    /// before any filesystem access.
    fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        let path = Path::new(name);
        if name.is_empty() || !path.components().all(|c| matches!(c, Component::Normal(_))) {
            return Err(StoreError::InvalidName);
        }
        Ok(self.root.join(path))
    }

    pub fn get(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(name)?;
        fs::read(path).map_err(StoreError::Io)
    }

    /// Creates or overwrites the blob in full.
    pub fn put(&self, name: &str, data: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(name)?;
        fs::write(path, data).map_err(StoreError::Io)
    }
}
