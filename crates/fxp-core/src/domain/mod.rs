//! Core domain layer for fxp.
//!
//! This module contains pure business logic with no I/O. Filesystem access,
//! template storage, and procedural generation are reached through ports
//! defined in the application layer.
//!
//! - **Registry data**: [`TemplateDescriptor`] and its value objects
//! - **Rules**: resource-name validation in [`DomainValidator`]
//! - **Output**: [`manifest::render`] for `fxmanifest.lua`
//! - **Requests**: [`ScaffoldRequest`] and the resolved [`Substitutions`]

pub mod entities;
pub mod error;
pub mod manifest;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    request::{
        DEFAULT_AUTHOR, DEFAULT_VERSION, InitReport, InitRequest, ScaffoldOptions,
        ScaffoldRequest, ScaffoldResult, Substitutions,
    },
    template::{TemplateDescriptor, TemplateSource},
};

pub use error::{DomainError, ErrorCategory};
pub use manifest::{MANIFEST_FILE, ManifestRecord};
pub use validation::DomainValidator;
pub use value_objects::{Framework, GeneratorId, ScriptLanguage, TargetPlatform};
