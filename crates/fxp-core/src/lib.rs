//! fxp Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the fxp
//! FiveM/RedM resource scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             fxp-cli (CLI)               │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, TemplateService,      │
//! │  Materializer)                          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Generator)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     fxp-adapters (Infrastructure)       │
//! │ (LocalFilesystem, BuiltinStore, ...)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fxp_core::prelude::*;
//!
//! # fn run(
//! #     store: Arc<dyn TemplateStore>,
//! #     filesystem: Arc<dyn Filesystem>,
//! #     generator: Arc<dyn TemplateGenerator>,
//! # ) -> FxpResult<()> {
//! let service = ScaffoldService::new(store, filesystem, generator);
//! let request = ScaffoldRequest::new("my-shop", "esx-basic", ".");
//! let result = service.scaffold(&request)?;
//! println!("created {}", result.path.display());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Materializer, ScaffoldService, TemplateInfo, TemplateService,
        ports::{Filesystem, TemplateGenerator, TemplateStore},
    };
    pub use crate::domain::{
        Framework, InitReport, InitRequest, ProjectStructure, ScaffoldOptions, ScaffoldRequest,
        ScaffoldResult, ScriptLanguage, Substitutions, TargetPlatform, TemplateDescriptor,
    };
    pub use crate::error::{FxpError, FxpResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
