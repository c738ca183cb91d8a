//! Template Materializer - turns a descriptor into files on disk.
//!
//! The source is resolved once, before any write:
//! 1. `<templates_root>/<id>` is a directory → [`TemplateSource::OnDisk`]
//! 2. otherwise → [`TemplateSource::Procedural`] with the descriptor's generator
//!
//! The destination must be absent or empty, and must not lie inside an
//! on-disk template. Both checks run before the first write, so a refused
//! materialization leaves the filesystem untouched.
//!
//! Values substituted into on-disk manifests are escaped for single-quoted
//! Lua strings, matching what [`manifest::render`] emits.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{EntryKind, Filesystem, TemplateGenerator},
    },
    domain::{
        FsEntry, ProjectStructure, Substitutions, TemplateDescriptor, TemplateSource,
        manifest::{self, is_manifest_file},
    },
    error::{FxpError, FxpResult},
};

pub struct Materializer {
    filesystem: Arc<dyn Filesystem>,
    generator: Arc<dyn TemplateGenerator>,
    templates_root: Option<PathBuf>,
}

impl Materializer {
    pub fn new(filesystem: Arc<dyn Filesystem>, generator: Arc<dyn TemplateGenerator>) -> Self {
        Self {
            filesystem,
            generator,
            templates_root: None,
        }
    }

    /// Directory searched for on-disk templates. `None` disables on-disk lookup.
    pub fn with_templates_root(mut self, root: Option<PathBuf>) -> Self {
        self.templates_root = root;
        self
    }

    pub fn templates_root(&self) -> Option<&Path> {
        self.templates_root.as_deref()
    }

    /// Decide where `descriptor`'s tree comes from. Reads, never writes.
    pub fn resolve_source(&self, descriptor: &TemplateDescriptor) -> TemplateSource {
        if let Some(root) = &self.templates_root {
            let candidate = root.join(descriptor.id);
            if self.filesystem.is_dir(&candidate) {
                return TemplateSource::OnDisk(candidate);
            }
            debug!(path = %candidate.display(), "no on-disk template, using generator");
        }
        TemplateSource::Procedural(descriptor.generator)
    }

    /// Populate `destination` from `descriptor`.
    ///
    /// Returns the source that was used.
    #[instrument(
        skip_all,
        fields(template = descriptor.id, destination = %destination.display())
    )]
    pub fn materialize(
        &self,
        descriptor: &TemplateDescriptor,
        destination: &Path,
        subs: &Substitutions,
    ) -> FxpResult<TemplateSource> {
        let source = self.resolve_source(descriptor);
        debug!(source = source.label(), "template source resolved");

        // Copying a tree into itself would recurse through its own output.
        if let TemplateSource::OnDisk(root) = &source {
            if absolute(destination).starts_with(absolute(root)) {
                return Err(ApplicationError::DestinationInsideTemplate {
                    destination: destination.to_path_buf(),
                    template: root.clone(),
                }
                .into());
            }
        }

        // Procedural trees are built before the emptiness check so that a
        // generator failure also leaves the destination untouched.
        let generated = match &source {
            TemplateSource::Procedural(_) => Some(self.generate(descriptor, subs)?),
            TemplateSource::OnDisk(_) => None,
        };

        self.ensure_empty(destination)?;
        self.filesystem.create_dir_all(destination)?;

        match (&source, generated) {
            (TemplateSource::OnDisk(root), _) => {
                let copied = self.copy_tree(root, destination, subs)?;
                info!(files = copied, "on-disk template copied");
            }
            (TemplateSource::Procedural(_), Some(structure)) => {
                self.write_structure(destination, &structure)?;
                info!(
                    entries = structure.entry_count(),
                    "procedural template written"
                );
            }
            (TemplateSource::Procedural(_), None) => {
                return Err(FxpError::Internal {
                    message: "procedural source without generated tree".into(),
                });
            }
        }

        Ok(source)
    }

    /// Run the descriptor's generator and validate its output.
    pub fn generate(
        &self,
        descriptor: &TemplateDescriptor,
        subs: &Substitutions,
    ) -> FxpResult<ProjectStructure> {
        let structure = self
            .generator
            .generate(descriptor.generator, descriptor, subs)?;
        structure.validate()?;
        Ok(structure)
    }

    fn ensure_empty(&self, destination: &Path) -> FxpResult<()> {
        if !self.filesystem.exists(destination) {
            return Ok(());
        }

        // A plain file at the destination counts as occupied.
        if !self.filesystem.is_dir(destination)
            || !self.filesystem.list_entries(destination)?.is_empty()
        {
            return Err(ApplicationError::DestinationNotEmpty {
                path: destination.to_path_buf(),
            }
            .into());
        }

        Ok(())
    }

    /// Recursive copy preserving relative structure. Symlinks are skipped.
    fn copy_tree(&self, from: &Path, to: &Path, subs: &Substitutions) -> FxpResult<usize> {
        let mut copied = 0;

        for entry in self.filesystem.list_entries(from)? {
            let Some(file_name) = entry.path.file_name() else {
                continue;
            };
            let target = to.join(file_name);

            match entry.kind {
                EntryKind::Directory => {
                    self.filesystem.create_dir_all(&target)?;
                    copied += self.copy_tree(&entry.path, &target, subs)?;
                }
                EntryKind::File if entry.file_name().is_some_and(is_manifest_file) => {
                    let text = self.filesystem.read_text(&entry.path)?;
                    let text = subs.apply_with(&text, manifest::quote);
                    self.filesystem.write_text(&target, &text)?;
                    copied += 1;
                }
                EntryKind::File => {
                    self.filesystem.copy_file(&entry.path, &target)?;
                    copied += 1;
                }
                EntryKind::Symlink => {
                    debug!(path = %entry.path.display(), "skipping symlink");
                }
            }
        }

        Ok(copied)
    }

    /// Write every entry of `structure` under `root`.
    pub fn write_structure(&self, root: &Path, structure: &ProjectStructure) -> FxpResult<()> {
        for entry in structure.entries() {
            let path = root.join(entry.path());
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_text(&path, &file.content)?;
                }
            }
        }
        Ok(())
    }
}

/// Lexically absolute form of `path`; `.` and `..` are folded, symlinks are not
/// resolved.
fn absolute(path: &Path) -> PathBuf {
    let base = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut out = PathBuf::new();
    for component in base.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
