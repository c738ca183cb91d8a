//! Unified error handling for fxp core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for fxp core operations.
#[derive(Debug, Error, Clone)]
pub enum FxpError {
    /// Errors from the domain layer (rule violations, unknown templates).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl FxpError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in fxp".into(),
                "Please report this issue at: https://github.com/talbergh/fxp/issues".into(),
            ],
        }
    }

    /// Get error category for display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::InvalidInput,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.category() == ErrorCategory::InvalidInput
    }

    pub fn is_unknown_template(&self) -> bool {
        matches!(self, Self::Domain(DomainError::UnknownTemplate { .. }))
    }

    pub fn is_destination_not_empty(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::DestinationNotEmpty { .. })
        )
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Io { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad name or options, caught before any I/O.
    InvalidInput,
    /// Unknown template identifier.
    NotFound,
    /// The destination would be overwritten.
    Conflict,
    /// Underlying filesystem fault.
    Io,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type FxpResult<T> = Result<T, FxpError>;
