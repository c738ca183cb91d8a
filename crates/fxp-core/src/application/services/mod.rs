//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a resource" or "list templates".

pub mod materializer;
pub mod scaffold_service;
pub mod template_service;

pub use materializer::Materializer;
pub use scaffold_service::ScaffoldService;
pub use template_service::{TemplateInfo, TemplateService};
