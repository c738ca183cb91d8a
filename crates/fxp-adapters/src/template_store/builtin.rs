//! Template store backed by the static built-in registry.

use fxp_core::{
    application::ports::TemplateStore,
    domain::{DomainError, Framework, TemplateDescriptor},
    error::FxpResult,
};
use tracing::debug;

use crate::builtin_templates::TEMPLATES;

/// Read-only store over a `'static` descriptor table.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinStore {
    templates: &'static [TemplateDescriptor],
}

impl BuiltinStore {
    /// Store over the templates that ship with fxp.
    pub fn new() -> Self {
        Self::with_table(TEMPLATES)
    }

    /// Store over an arbitrary table (tests, embedding).
    pub fn with_table(templates: &'static [TemplateDescriptor]) -> Self {
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for BuiltinStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for BuiltinStore {
    fn get(&self, id: &str) -> FxpResult<TemplateDescriptor> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .copied()
            .ok_or_else(|| DomainError::UnknownTemplate { id: id.to_string() }.into())
    }

    fn list(&self, framework: Option<Framework>) -> FxpResult<Vec<TemplateDescriptor>> {
        let templates: Vec<_> = match framework {
            // Filtering checks declared frameworks only; agnostic templates
            // are listed unfiltered but not under a specific tag.
            Some(fw) => self
                .templates
                .iter()
                .filter(|t| t.frameworks.contains(&fw))
                .copied()
                .collect(),
            None => self.templates.to_vec(),
        };
        debug!(filter = ?framework, count = templates.len(), "templates listed");
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_id_resolves() {
        let store = BuiltinStore::new();
        for t in store.list(None).unwrap() {
            assert_eq!(store.get(t.id).unwrap(), t);
        }
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = BuiltinStore::new().get("nope").unwrap_err();
        assert!(err.is_unknown_template());
    }

    #[test]
    fn filter_by_framework_keeps_order() {
        let ids: Vec<_> = BuiltinStore::new()
            .list(Some(Framework::Esx))
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, ["esx-basic", "esx-shop", "ui-nui"]);
    }

    #[test]
    fn qbox_matches_qb_templates() {
        let ids: Vec<_> = BuiltinStore::new()
            .list(Some(Framework::Qbox))
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, ["qb-basic", "qb-job"]);
    }

    #[test]
    fn filter_without_match_is_empty() {
        let store = BuiltinStore::with_table(&[]);
        assert!(store.list(Some(Framework::Rsg)).unwrap().is_empty());
        assert!(store.is_empty());
    }
}
