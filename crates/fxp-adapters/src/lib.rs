//! Infrastructure adapters for fxp.
//!
//! This crate implements the ports defined in `fxp_core::application::ports`
//! and hosts the collaborators the CLI drives directly (archiving, releases).
//! It contains all external dependencies and I/O operations.

pub mod archive;
pub mod builtin_templates;
pub mod filesystem;
pub mod generator;
pub mod release;
pub mod template_store;

// Re-export commonly used adapters
pub use archive::{ArchiveError, ArchiveSummary, ResourceArchiver};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::ProceduralGenerator;
pub use release::{Installer, ReleaseClient, ReleaseError};
pub use template_store::BuiltinStore;
