//! Template descriptors and source resolution.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{Framework, GeneratorId, TargetPlatform};

/// Immutable metadata for one registered template.
///
/// Descriptors are defined once in a static table and never mutated, so every
/// field borrows `'static` data and the whole struct is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    /// Unique key, e.g. `basic-fivem`.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub platform: TargetPlatform,
    /// Frameworks the template targets. Empty means framework-agnostic.
    pub frameworks: &'static [Framework],
    /// Display-only feature tags, in presentation order.
    pub features: &'static [&'static str],
    /// Generator used when no on-disk tree exists for `id`.
    #[serde(skip)]
    pub generator: GeneratorId,
}

impl TemplateDescriptor {
    /// Whether this template can be scaffolded for `framework`.
    ///
    /// Framework-agnostic templates accept anything.
    pub fn supports(&self, framework: Framework) -> bool {
        self.frameworks.is_empty() || self.frameworks.contains(&framework)
    }

    /// The framework used when the caller does not pick one.
    pub fn default_framework(&self) -> Option<Framework> {
        self.frameworks.first().copied()
    }

    /// Description applied when the caller supplies none.
    pub fn default_description(&self) -> String {
        format!("A {} resource for FiveM/RedM", self.name)
    }
}

/// Where a template's file tree comes from.
///
/// Resolved once per materialization, before any write happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A literal tree under the templates root, copied recursively.
    OnDisk(PathBuf),
    /// Synthesized in memory by the named generator.
    Procedural(GeneratorId),
}

impl TemplateSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnDisk(_) => "on-disk",
            Self::Procedural(_) => "procedural",
        }
    }
}
