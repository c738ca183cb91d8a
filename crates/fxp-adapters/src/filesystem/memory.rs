//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use fxp_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, EntryKind, Filesystem},
    },
    error::FxpResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one copy to a service and inspect
/// the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Seed a file, creating its parent directories.
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) -> FxpResult<()> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_text(&path, &content.into())
    }
}

fn not_found(path: &Path, operation: &'static str) -> ApplicationError {
    ApplicationError::io(
        path,
        operation,
        io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
    )
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn list_entries(&self, path: &Path) -> FxpResult<Vec<DirEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.directories.contains(path) {
            return Err(not_found(path, "read directory").into());
        }

        let children = inner
            .directories
            .iter()
            .filter(|d| d.parent() == Some(path))
            .map(|d| DirEntry::new(d.clone(), EntryKind::Directory))
            .chain(
                inner
                    .files
                    .keys()
                    .filter(|f| f.parent() == Some(path))
                    .map(|f| DirEntry::new(f.clone(), EntryKind::File)),
            );

        let mut entries: Vec<_> = children.collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> FxpResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FxpResult<()> {
        let content = self.read_text(from)?;
        self.write_text(to, &content)
    }

    fn read_text(&self, path: &Path) -> FxpResult<String> {
        self.read_file(path)
            .ok_or_else(|| not_found(path, "read file").into())
    }

    fn write_text(&self, path: &Path, content: &str) -> FxpResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(not_found(parent, "write file").into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs
            .write_text(Path::new("/res/client/main.lua"), "x")
            .unwrap_err();
        assert!(err.is_io());

        fs.create_dir_all(Path::new("/res/client")).unwrap();
        fs.write_text(Path::new("/res/client/main.lua"), "x").unwrap();
        assert_eq!(
            fs.read_file(Path::new("/res/client/main.lua")).as_deref(),
            Some("x")
        );
    }

    #[test]
    fn lists_only_direct_children() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("/res/fxmanifest.lua", "m").unwrap();
        fs.insert_file("/res/client/main.lua", "c").unwrap();

        let entries = fs.list_entries(Path::new("/res")).unwrap();
        assert_eq!(
            entries,
            vec![
                DirEntry::new("/res/client", EntryKind::Directory),
                DirEntry::new("/res/fxmanifest.lua", EntryKind::File),
            ]
        );
    }

    #[test]
    fn clones_share_state() {
        let a = MemoryFilesystem::new();
        let b = a.clone();
        a.insert_file("/x/y.txt", "hi").unwrap();
        assert!(b.exists(Path::new("/x/y.txt")));
        assert!(b.is_dir(Path::new("/x")));
    }
}
