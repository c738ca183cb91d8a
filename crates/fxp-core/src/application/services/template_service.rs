//! Template Service - registry queries for display.
//!
//! Separated from ScaffoldService for single responsibility.

use std::sync::Arc;

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{Framework, TargetPlatform, TemplateDescriptor},
    error::FxpResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub platform: TargetPlatform,
    pub frameworks: Vec<String>,
    pub features: Vec<String>,
}

impl From<&TemplateDescriptor> for TemplateInfo {
    fn from(t: &TemplateDescriptor) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.to_string(),
            description: t.description.to_string(),
            platform: t.platform,
            frameworks: t.frameworks.iter().map(|f| f.to_string()).collect(),
            features: t.features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Service for template operations.
pub struct TemplateService {
    store: Arc<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by ID.
    pub fn get(&self, id: &str) -> FxpResult<TemplateDescriptor> {
        self.store.get(id)
    }

    /// Templates in registry order, optionally filtered by framework.
    pub fn list(&self, framework: Option<Framework>) -> FxpResult<Vec<TemplateInfo>> {
        Ok(self
            .store
            .list(framework)?
            .iter()
            .map(TemplateInfo::from)
            .collect())
    }

    /// Templates bucketed by platform (FiveM, RedM, Universal). Empty
    /// groups are dropped; order inside a group is registry order.
    pub fn grouped(
        &self,
        framework: Option<Framework>,
    ) -> FxpResult<Vec<(TargetPlatform, Vec<TemplateInfo>)>> {
        let templates = self.list(framework)?;

        Ok([
            TargetPlatform::FiveM,
            TargetPlatform::RedM,
            TargetPlatform::Universal,
        ]
        .into_iter()
        .map(|platform| {
            let group: Vec<_> = templates
                .iter()
                .filter(|t| t.platform == platform)
                .cloned()
                .collect();
            (platform, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect())
    }
}
