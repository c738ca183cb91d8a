//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The destination already holds entries; nothing was written.
    #[error("Destination is not empty: {path}")]
    DestinationNotEmpty { path: PathBuf },

    /// The destination lies inside the on-disk template it would be copied from.
    #[error("Destination {destination} is inside the template directory {template}")]
    DestinationInsideTemplate {
        destination: PathBuf,
        template: PathBuf,
    },

    /// `init` found an existing manifest and was not told to overwrite it.
    #[error("A manifest already exists at {path}")]
    ManifestExists { path: PathBuf },

    /// An underlying filesystem call failed.
    ///
    /// A failure in the middle of a multi-file copy can leave a partially
    /// populated destination. Delete it and retry rather than resuming.
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: Arc<io::Error>,
    },

    /// A procedural generator could not build its tree.
    #[error("Template generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// Adapter state lock was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source: Arc::new(source),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationNotEmpty { path } => vec![
                format!("'{}' already contains files", path.display()),
                "Choose a different resource name".into(),
                "Or pass --output to scaffold somewhere else".into(),
            ],
            Self::DestinationInsideTemplate { template, .. } => vec![
                format!("Templates are read from {}", template.display()),
                "Create the resource outside the templates directory".into(),
            ],
            Self::ManifestExists { path } => vec![
                format!("Found {}", path.display()),
                "Use --force to regenerate the manifest".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Remove any partially created resource folder before retrying".into(),
            ],
            Self::GenerationFailed { .. } => vec![
                "The built-in generator failed; please report this issue".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationNotEmpty { .. }
            | Self::DestinationInsideTemplate { .. }
            | Self::ManifestExists { .. } => ErrorCategory::Conflict,
            Self::Io { .. } => ErrorCategory::Io,
            Self::GenerationFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
