//! Resource packaging into a zip archive.
//!
//! Entries are stored relative to the resource root with forward slashes, so
//! extracting the archive into `resources/` reproduces the folder contents.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use fxp_core::domain::MANIFEST_FILE;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Missing fxmanifest.lua in {}", dir.display())]
    MissingManifest { dir: PathBuf },

    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk resource directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl ArchiveError {
    fn io(path: &Path, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            operation,
            source,
        }
    }
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub files: usize,
}

/// Zips validated resource folders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceArchiver;

impl ResourceArchiver {
    pub fn new() -> Self {
        Self
    }

    /// `<cwd>/<resource folder name>.zip`.
    pub fn default_output(resource_dir: &Path, cwd: &Path) -> PathBuf {
        let absolute = if resource_dir.is_absolute() {
            resource_dir.to_path_buf()
        } else {
            cwd.join(resource_dir)
        };
        // `.` and `..` have no file name; resolve them before taking one.
        let resolved = absolute.canonicalize().unwrap_or(absolute);
        let name = resolved
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resource".to_string());
        cwd.join(format!("{name}.zip"))
    }

    /// Check that `dir` is a resource folder.
    pub fn validate(dir: &Path) -> Result<(), ArchiveError> {
        if dir.join(MANIFEST_FILE).is_file() {
            Ok(())
        } else {
            Err(ArchiveError::MissingManifest {
                dir: dir.to_path_buf(),
            })
        }
    }

    /// Write `resource_dir` into a new zip at `output`.
    #[instrument(skip(self), fields(dir = %resource_dir.display(), output = %output.display()))]
    pub fn export(&self, resource_dir: &Path, output: &Path) -> Result<ArchiveSummary, ArchiveError> {
        Self::validate(resource_dir)?;

        let root = resource_dir
            .canonicalize()
            .map_err(|e| ArchiveError::io(resource_dir, "resolve", e))?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ArchiveError::io(parent, "create directory", e))?;
        }
        let file = File::create(output).map_err(|e| ArchiveError::io(output, "create", e))?;
        let output_abs = output
            .canonicalize()
            .map_err(|e| ArchiveError::io(output, "resolve", e))?;

        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut files = 0;
        for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();

            if path == output_abs {
                debug!("skipping the archive itself");
                continue;
            }

            let Ok(relative) = path.strip_prefix(&root) else {
                continue;
            };
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            let file_type = entry.file_type();
            if file_type.is_dir() {
                zip.add_directory(format!("{name}/"), options)?;
            } else if file_type.is_file() {
                zip.start_file(name, options)?;
                let mut source =
                    File::open(path).map_err(|e| ArchiveError::io(path, "read", e))?;
                io::copy(&mut source, &mut zip)
                    .map_err(|e| ArchiveError::io(path, "compress", e))?;
                files += 1;
            } else {
                debug!(path = %path.display(), "skipping non-regular entry");
            }
        }

        zip.finish()?;
        info!(files, "resource exported");

        Ok(ArchiveSummary {
            path: output.to_path_buf(),
            files,
        })
    }
}
