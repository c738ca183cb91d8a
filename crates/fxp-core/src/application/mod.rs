//! Application layer for fxp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TemplateService, Materializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{Materializer, ScaffoldService, TemplateInfo, TemplateService};

pub use ports::{DirEntry, EntryKind, Filesystem, TemplateGenerator, TemplateStore};

pub use error::ApplicationError;
