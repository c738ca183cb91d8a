//! Procedural template generation.
//!
//! Used when a template has no on-disk tree under the templates root. Every
//! generator produces the same skeleton (manifest, client, server, shared
//! config, locales, README) and layers its own additions on top.

mod scripts;
mod web;

use fxp_core::{
    application::ports::TemplateGenerator,
    domain::{
        Framework, GeneratorId, MANIFEST_FILE, ManifestRecord, ProjectStructure, Substitutions,
        TemplateDescriptor,
    },
    error::FxpResult,
};
use tracing::{debug, instrument};

/// Generator that builds resource trees from built-in sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProceduralGenerator;

impl ProceduralGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateGenerator for ProceduralGenerator {
    #[instrument(skip_all, fields(generator = %generator, template = descriptor.id))]
    fn generate(
        &self,
        generator: GeneratorId,
        descriptor: &TemplateDescriptor,
        subs: &Substitutions,
    ) -> FxpResult<ProjectStructure> {
        let blueprint = match generator {
            GeneratorId::Basic | GeneratorId::Esx | GeneratorId::QbCore => {
                Blueprint::standard(subs)
            }
            GeneratorId::RedM => Blueprint::redm(subs),
            GeneratorId::Nui => Blueprint::nui(subs),
        };

        let structure = blueprint.build(descriptor, subs);
        structure.validate()?;
        debug!(entries = structure.entry_count(), "resource tree generated");
        Ok(structure)
    }
}

/// The pieces a generator varies before the tree is assembled.
struct Blueprint {
    record: ManifestRecord,
    client: String,
    server: String,
    extra: Vec<(String, String)>,
}

impl Blueprint {
    fn standard(subs: &Substitutions) -> Self {
        Self {
            record: base_record(subs),
            client: scripts::client(subs),
            server: scripts::server(subs),
            extra: Vec::new(),
        }
    }

    fn redm(subs: &Substitutions) -> Self {
        Self {
            record: base_record(subs),
            client: scripts::redm_client(subs),
            server: scripts::redm_server(subs),
            extra: Vec::new(),
        }
    }

    fn nui(subs: &Substitutions) -> Self {
        let record = base_record(subs).ui(
            web::UI_PAGE,
            web::WEB_FILES.iter().map(|f| f.to_string()).collect(),
        );
        Self {
            record,
            client: web::client(subs),
            server: scripts::server(subs),
            extra: web::page(subs)
                .into_iter()
                .map(|(path, content)| (path.to_string(), content))
                .collect(),
        }
    }

    fn build(self, descriptor: &TemplateDescriptor, subs: &Substitutions) -> ProjectStructure {
        let ext = subs.language.file_extension();

        let mut structure = ProjectStructure::new()
            .with_file(MANIFEST_FILE, self.record.render())
            .with_file(format!("client/main.{ext}"), self.client)
            .with_file(format!("server/main.{ext}"), self.server)
            .with_file(format!("shared/config.{ext}"), scripts::config(subs))
            .with_file("locales/en.json", scripts::locales())
            .with_file("README.md", scripts::readme(descriptor, subs));

        for (path, content) in self.extra {
            structure.add_file(path, content);
        }
        structure
    }
}

/// Manifest record with library imports plus the framework's own hooks.
fn base_record(subs: &Substitutions) -> ManifestRecord {
    let mut record = subs.manifest_record();

    if let Some(framework) = subs.framework {
        if framework == Framework::Esx {
            record = record.shared_import("@es_extended/imports.lua");
        }
        if let Some(dependency) = framework.resource_dependency() {
            record = record.dependency(dependency);
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_templates::TEMPLATES;
    use fxp_core::domain::{ScaffoldOptions, ScriptLanguage};
    use std::path::Path;

    fn generate(id: &str, options: ScaffoldOptions) -> ProjectStructure {
        let descriptor = TEMPLATES.iter().find(|t| t.id == id).copied().unwrap();
        let subs = Substitutions::resolve("shop", &descriptor, &options).unwrap();
        ProceduralGenerator::new()
            .generate(descriptor.generator, &descriptor, &subs)
            .unwrap()
    }

    fn manifest(structure: &ProjectStructure) -> &str {
        &structure.file(MANIFEST_FILE).unwrap().content
    }

    #[test]
    fn every_builtin_template_generates_a_valid_tree() {
        for descriptor in TEMPLATES {
            let structure = generate(descriptor.id, ScaffoldOptions::default());
            assert!(structure.file(MANIFEST_FILE).is_some(), "{}", descriptor.id);
            assert!(structure.file("client/main.lua").is_some(), "{}", descriptor.id);
            assert!(structure.file("server/main.lua").is_some(), "{}", descriptor.id);
            for file in structure.files() {
                assert!(!file.content.contains("{{"), "{} {:?}", descriptor.id, file.path);
            }
        }
    }

    #[test]
    fn esx_manifest_imports_es_extended() {
        let structure = generate("esx-basic", ScaffoldOptions::default());
        let text = manifest(&structure);
        assert!(text.contains("'@es_extended/imports.lua'"));
        assert!(text.contains("dependencies {\n  'es_extended'\n}"));
    }

    #[test]
    fn qbox_depends_on_qbx_core() {
        let structure = generate(
            "qb-basic",
            ScaffoldOptions {
                framework: Some(Framework::Qbox),
                ..Default::default()
            },
        );
        assert!(manifest(&structure).contains("'qbx_core'"));
    }

    #[test]
    fn redm_uses_list_form_and_warning() {
        let structure = generate("redm-basic", ScaffoldOptions::default());
        let text = manifest(&structure);
        assert!(text.contains("games { 'rdr3' }"));
        assert!(text.contains("rdr3_warning"));
        assert!(
            structure
                .file("client/main.lua")
                .unwrap()
                .content
                .contains("RedM client script loaded")
        );
    }

    #[test]
    fn nui_adds_web_tree_and_ui_page() {
        let structure = generate("ui-nui", ScaffoldOptions::default());
        let text = manifest(&structure);
        assert!(text.contains("ui_page 'web/index.html'"));
        assert!(text.contains("'web/script.js'"));

        for file in ["web/index.html", "web/style.css", "web/script.js"] {
            assert!(structure.file(file).is_some(), "{file}");
        }
        assert!(
            structure
                .file(Path::new("client/main.lua"))
                .unwrap()
                .content
                .contains("RegisterNUICallback('close'")
        );
    }

    #[test]
    fn ox_libraries_are_wired_into_manifest() {
        let structure = generate(
            "basic-fivem",
            ScaffoldOptions {
                use_ox_lib: true,
                use_oxmysql: true,
                ..Default::default()
            },
        );
        let text = manifest(&structure);
        assert!(text.contains("'@ox_lib/init.lua'"));
        assert!(text.contains("'@oxmysql/lib/MySQL.lua'"));
        assert!(text.contains("'oxmysql'"));
    }

    #[test]
    fn javascript_language_switches_extensions() {
        let structure = generate(
            "basic-fivem",
            ScaffoldOptions {
                language: Some(ScriptLanguage::JavaScript),
                ..Default::default()
            },
        );
        assert!(structure.file("client/main.js").is_some());
        assert!(structure.file("shared/config.js").is_some());
        assert!(!manifest(&structure).contains("lua54"));
    }
}
