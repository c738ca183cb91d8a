pub mod project_structure;
pub mod request;
pub mod template;

pub use crate::domain::DomainError;
pub use project_structure::ProjectStructure;
pub use request::{
    InitReport, InitRequest, ScaffoldOptions, ScaffoldRequest, ScaffoldResult, Substitutions,
};
pub use template::{TemplateDescriptor, TemplateSource};
