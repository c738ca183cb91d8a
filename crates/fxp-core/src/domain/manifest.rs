//! `fxmanifest.lua` generation.
//!
//! [`render`] is a pure function of a [`ManifestRecord`]. The output grammar
//! (key/value declarations plus `{ ... }` list blocks) is read by the game
//! server's resource loader, so the fixed fields are emitted in a stable order
//! with a fixed indentation.

use std::fmt::Write as _;

use crate::domain::value_objects::{ScriptLanguage, TargetPlatform};

pub const MANIFEST_FILE: &str = "fxmanifest.lua";

/// Legacy manifest name still honoured by the engine.
pub const LEGACY_MANIFEST_FILE: &str = "__resource.lua";

pub const FX_VERSION: &str = "cerulean";

pub const RDR3_WARNING: &str = "I acknowledge that this is a prerelease build of RedM, and I am aware my resources *will* become incompatible once RedM ships.";

/// Whether `file_name` is one of the manifest files that receive placeholder
/// substitution when copied from an on-disk template.
pub fn is_manifest_file(file_name: &str) -> bool {
    file_name == MANIFEST_FILE || file_name == LEGACY_MANIFEST_FILE
}

/// Fields rendered into a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    pub name: String,
    pub author: String,
    pub description: String,
    pub version: String,
    pub platform: TargetPlatform,
    pub language: ScriptLanguage,
    /// Extra entries placed before the shared glob, e.g. `@ox_lib/init.lua`.
    pub shared_imports: Vec<String>,
    /// Extra entries placed before the server glob, e.g. `@oxmysql/lib/MySQL.lua`.
    pub server_imports: Vec<String>,
    pub dependencies: Vec<String>,
    pub ui_page: Option<String>,
    pub files: Vec<String>,
}

impl ManifestRecord {
    pub fn new(name: impl Into<String>, platform: TargetPlatform, language: ScriptLanguage) -> Self {
        Self {
            name: name.into(),
            author: String::new(),
            description: String::new(),
            version: String::new(),
            platform,
            language,
            shared_imports: Vec::new(),
            server_imports: Vec::new(),
            dependencies: Vec::new(),
            ui_page: None,
            files: Vec::new(),
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn shared_import(mut self, entry: impl Into<String>) -> Self {
        push_unique(&mut self.shared_imports, entry.into());
        self
    }

    pub fn server_import(mut self, entry: impl Into<String>) -> Self {
        push_unique(&mut self.server_imports, entry.into());
        self
    }

    pub fn dependency(mut self, resource: impl Into<String>) -> Self {
        push_unique(&mut self.dependencies, resource.into());
        self
    }

    pub fn ui(mut self, page: impl Into<String>, files: Vec<String>) -> Self {
        self.ui_page = Some(page.into());
        self.files = files;
        self
    }

    /// Render this record. Shorthand for [`render`].
    pub fn render(&self) -> String {
        render(self)
    }
}

fn push_unique(list: &mut Vec<String>, entry: String) {
    if !list.contains(&entry) {
        list.push(entry);
    }
}

/// Render manifest text for `record`.
///
/// Callers validate `record.name` beforehand; the generator trusts its input
/// apart from escaping quotes inside string literals.
pub fn render(record: &ManifestRecord) -> String {
    let mut out = String::with_capacity(768);

    line(&mut out, &format!("fx_version '{FX_VERSION}'"));
    // Only FiveM uses the single `game` form; RedM expects the `games` list.
    match (record.platform, record.platform.game_tags()) {
        (TargetPlatform::FiveM, [single]) => line(&mut out, &format!("game '{single}'")),
        (_, tags) => {
            let games = tags
                .iter()
                .map(|g| format!("'{g}'"))
                .collect::<Vec<_>>()
                .join(", ");
            line(&mut out, &format!("games {{ {games} }}"));
        }
    }
    if record.platform.requires_rdr3_warning() {
        line(&mut out, &format!("rdr3_warning '{}'", quote(RDR3_WARNING)));
    }
    out.push('\n');

    line(&mut out, &format!("name '{}'", quote(&record.name)));
    line(&mut out, &format!("author '{}'", quote(&record.author)));
    line(&mut out, &format!("description '{}'", quote(&record.description)));
    line(&mut out, &format!("version '{}'", quote(&record.version)));

    if record.language == ScriptLanguage::Lua {
        out.push('\n');
        line(&mut out, "-- Runtime features");
        line(&mut out, "lua54 'yes'");
        line(&mut out, "use_experimental_fxv2_oal 'yes'");
    }

    block(&mut out, "client_scripts", &[], "client/**/*.*");
    block(&mut out, "server_scripts", &record.server_imports, "server/**/*.*");
    block(&mut out, "shared_scripts", &record.shared_imports, "shared/**/*.*");

    out.push('\n');
    if record.dependencies.is_empty() {
        line(&mut out, "-- Dependencies (uncomment if needed)");
        line(&mut out, "-- dependencies {");
        line(&mut out, "--   'oxmysql',");
        line(&mut out, "-- }");
    } else {
        list(&mut out, "dependencies", &record.dependencies);
    }

    out.push('\n');
    match &record.ui_page {
        Some(page) => {
            line(&mut out, &format!("ui_page '{}'", quote(page)));
            if !record.files.is_empty() {
                out.push('\n');
                list(&mut out, "files", &record.files);
            }
        }
        None => {
            line(&mut out, "-- UI (uncomment if needed)");
            line(&mut out, "-- ui_page 'html/index.html'");
            line(&mut out, "-- files {");
            line(&mut out, "--   'html/**/*',");
            line(&mut out, "-- }");
        }
    }

    out
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn block(out: &mut String, key: &str, imports: &[String], glob: &str) {
    out.push('\n');
    let mut entries: Vec<String> = imports.to_vec();
    entries.push(glob.to_string());
    list(out, key, &entries);
}

fn list(out: &mut String, key: &str, entries: &[String]) {
    let _ = writeln!(out, "{key} {{");
    let last = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        let _ = writeln!(out, "  '{}'{sep}", quote(entry));
    }
    out.push_str("}\n");
}

/// Escape `value` for a single-quoted Lua string literal.
pub fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(platform: TargetPlatform) -> ManifestRecord {
        ManifestRecord::new("my-shop", platform, ScriptLanguage::Lua)
            .author("talbergh")
            .description("A shop")
            .version("0.1.0")
    }

    #[test]
    fn render_is_deterministic() {
        let r = record(TargetPlatform::FiveM).dependency("es_extended");
        assert_eq!(render(&r), render(&r.clone()));
    }

    #[test]
    fn fivem_uses_single_game_declaration() {
        let text = render(&record(TargetPlatform::FiveM));
        assert!(text.starts_with("fx_version 'cerulean'\ngame 'gta5'\n"));
        assert!(!text.contains("games {"));
        assert!(!text.contains("rdr3_warning"));
    }

    #[test]
    fn redm_uses_list_declaration_and_warning() {
        let text = render(&record(TargetPlatform::RedM));
        assert!(text.contains("games { 'rdr3' }\n"));
        assert!(!text.contains("game 'gta5'"));
        assert!(text.contains("rdr3_warning 'I acknowledge"));
    }

    #[test]
    fn universal_lists_both_games() {
        let text = render(&record(TargetPlatform::Universal));
        assert!(text.contains("games { 'gta5', 'rdr3' }\n"));
    }

    #[test]
    fn metadata_fields_are_emitted_verbatim() {
        let text = render(&record(TargetPlatform::FiveM));
        assert!(text.contains("\nname 'my-shop'\n"));
        assert!(text.contains("\nauthor 'talbergh'\n"));
        assert!(text.contains("\ndescription 'A shop'\n"));
        assert!(text.contains("\nversion '0.1.0'\n"));
    }

    #[test]
    fn script_groups_use_conventional_globs() {
        let text = render(&record(TargetPlatform::FiveM));
        assert!(text.contains("client_scripts {\n  'client/**/*.*'\n}\n"));
        assert!(text.contains("server_scripts {\n  'server/**/*.*'\n}\n"));
        assert!(text.contains("shared_scripts {\n  'shared/**/*.*'\n}\n"));
    }

    #[test]
    fn imports_precede_globs() {
        let text = render(
            &record(TargetPlatform::FiveM)
                .shared_import("@ox_lib/init.lua")
                .server_import("@oxmysql/lib/MySQL.lua"),
        );
        assert!(text.contains("shared_scripts {\n  '@ox_lib/init.lua',\n  'shared/**/*.*'\n}"));
        assert!(text.contains("server_scripts {\n  '@oxmysql/lib/MySQL.lua',\n  'server/**/*.*'\n}"));
    }

    #[test]
    fn lua_features_only_for_lua() {
        let lua = render(&record(TargetPlatform::FiveM));
        assert!(lua.contains("lua54 'yes'"));

        let mut js = record(TargetPlatform::FiveM);
        js.language = ScriptLanguage::JavaScript;
        assert!(!render(&js).contains("lua54"));
    }

    #[test]
    fn dependencies_and_ui_blocks() {
        let text = render(
            &record(TargetPlatform::FiveM)
                .dependency("es_extended")
                .dependency("es_extended")
                .ui("html/index.html", vec!["html/index.html".into(), "html/style.css".into()]),
        );
        assert!(text.contains("dependencies {\n  'es_extended'\n}\n"));
        assert!(text.contains("ui_page 'html/index.html'\n"));
        assert!(text.contains("files {\n  'html/index.html',\n  'html/style.css'\n}\n"));
        assert!(!text.contains("-- ui_page"));
    }

    #[test]
    fn quotes_are_escaped() {
        let text = render(&record(TargetPlatform::FiveM).description("Tony's shop"));
        assert!(text.contains("description 'Tony\\'s shop'"));
    }

    #[test]
    fn recognises_manifest_file_names() {
        assert!(is_manifest_file("fxmanifest.lua"));
        assert!(is_manifest_file("__resource.lua"));
        assert!(!is_manifest_file("main.lua"));
    }
}
