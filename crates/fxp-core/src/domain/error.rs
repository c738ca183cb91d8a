// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the same error can be reported and logged)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName { name: String, reason: String },

    #[error("Unknown framework '{framework}'")]
    InvalidFramework { framework: String },

    #[error("Template '{template_id}' does not support framework '{framework}'")]
    UnsupportedFramework {
        template_id: String,
        framework: String,
        supported: Vec<String>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Duplicate path in generated resource: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown template '{id}'")]
    UnknownTemplate { id: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidResourceName { reason, .. } => vec![
                reason.clone(),
                "Use 2-50 letters, numbers, hyphens, and underscores".into(),
                "Start with a letter or underscore".into(),
                "Examples: my-shop, police_job, hud2".into(),
            ],
            Self::InvalidFramework { framework } => vec![
                format!("'{}' is not a supported framework", framework),
                "Supported frameworks: standalone, esx, qb-core, qbox, redm, rsg".into(),
            ],
            Self::UnsupportedFramework {
                template_id,
                supported,
                ..
            } => vec![
                format!(
                    "Template '{}' supports: {}",
                    template_id,
                    supported.join(", ")
                ),
                "Try: fxp list --framework <name> to find a matching template".into(),
            ],
            Self::UnknownTemplate { id } => vec![
                format!("No template is registered as '{}'", id),
                "Try: fxp list to see available templates".into(),
            ],
            Self::InvalidTemplate(_) | Self::DuplicatePath { .. } => vec![
                "The template produced an invalid file tree".into(),
                "Please report this issue or use a different template".into(),
            ],
            _ => vec!["Use --help for usage information".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidResourceName { .. }
            | Self::InvalidFramework { .. }
            | Self::UnsupportedFramework { .. }
            | Self::InvalidInput(_) => ErrorCategory::Validation,
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::InvalidTemplate(_)
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
