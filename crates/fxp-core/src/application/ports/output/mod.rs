//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fxp-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Framework, GeneratorId, ProjectStructure, Substitutions, TemplateDescriptor};
use crate::error::FxpResult;

/// Kind of a directory entry returned by [`Filesystem::list_entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fxp_adapters::filesystem::LocalFilesystem` (production)
/// - `fxp_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate children of `path`, sorted by path.
    fn list_entries(&self, path: &Path) -> FxpResult<Vec<DirEntry>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FxpResult<()>;

    /// Byte-for-byte copy of a single file.
    fn copy_file(&self, from: &Path, to: &Path) -> FxpResult<()>;

    /// Read a UTF-8 text file.
    fn read_text(&self, path: &Path) -> FxpResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_text(&self, path: &Path, content: &str) -> FxpResult<()>;
}

/// Port for the template registry.
///
/// Implemented by `fxp_adapters::template_store::BuiltinStore`.
pub trait TemplateStore: Send + Sync {
    /// Look up a template by identifier.
    ///
    /// Fails with `DomainError::UnknownTemplate` for unregistered ids.
    fn get(&self, id: &str) -> FxpResult<TemplateDescriptor>;

    /// All templates in registry order, optionally restricted to those
    /// supporting `framework`. An empty result is not an error.
    fn list(&self, framework: Option<Framework>) -> FxpResult<Vec<TemplateDescriptor>>;
}

/// Port for procedural template generation.
///
/// Implemented by `fxp_adapters::generator::ProceduralGenerator`.
pub trait TemplateGenerator: Send + Sync {
    /// Build the file tree for `descriptor` using `generator`.
    fn generate(
        &self,
        generator: GeneratorId,
        descriptor: &TemplateDescriptor,
        subs: &Substitutions,
    ) -> FxpResult<ProjectStructure>;
}
