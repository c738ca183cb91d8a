//! Per-invocation scaffolding inputs and outputs.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::template::{TemplateDescriptor, TemplateSource},
    error::DomainError,
    manifest::ManifestRecord,
    value_objects::{Framework, ScriptLanguage, TargetPlatform},
};

pub const DEFAULT_AUTHOR: &str = "talbergh";
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Caller-supplied overrides. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub author: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub framework: Option<Framework>,
    pub language: Option<ScriptLanguage>,
    pub use_ox_lib: bool,
    pub use_oxmysql: bool,
}

/// One `create` invocation.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub name: String,
    pub template_id: String,
    pub destination_root: PathBuf,
    pub options: ScaffoldOptions,
}

impl ScaffoldRequest {
    pub fn new(
        name: impl Into<String>,
        template_id: impl Into<String>,
        destination_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            template_id: template_id.into(),
            destination_root: destination_root.into(),
            options: ScaffoldOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScaffoldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn destination(&self) -> PathBuf {
        self.destination_root.join(&self.name)
    }
}

/// The resolved placeholder values for one materialization.
///
/// Built from a request with defaults applied; generators interpolate these
/// directly and on-disk manifests receive them through [`Self::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    pub resource_name: String,
    pub author: String,
    pub description: String,
    pub version: String,
    pub framework: Option<Framework>,
    pub language: ScriptLanguage,
    pub platform: TargetPlatform,
    pub use_ox_lib: bool,
    pub use_oxmysql: bool,
}

impl Substitutions {
    /// Apply defaults and check the framework choice against the template.
    pub fn resolve(
        name: &str,
        descriptor: &TemplateDescriptor,
        options: &ScaffoldOptions,
    ) -> Result<Self, DomainError> {
        let framework = match options.framework {
            Some(fw) if !descriptor.supports(fw) => {
                return Err(DomainError::UnsupportedFramework {
                    template_id: descriptor.id.to_string(),
                    framework: fw.to_string(),
                    supported: descriptor
                        .frameworks
                        .iter()
                        .map(|f| f.to_string())
                        .collect(),
                });
            }
            Some(fw) => Some(fw),
            None => descriptor.default_framework(),
        };

        Ok(Self {
            resource_name: name.to_string(),
            author: non_blank(&options.author).unwrap_or(DEFAULT_AUTHOR).to_string(),
            description: non_blank(&options.description)
                .map(str::to_string)
                .unwrap_or_else(|| descriptor.default_description()),
            version: non_blank(&options.version)
                .unwrap_or(DEFAULT_VERSION)
                .to_string(),
            framework,
            language: options.language.unwrap_or_default(),
            platform: descriptor.platform,
            // ox_lib targets the FiveM runtime only.
            use_ox_lib: options.use_ox_lib && descriptor.platform != TargetPlatform::RedM,
            use_oxmysql: options.use_oxmysql,
        })
    }

    /// Placeholder tokens and their values, in replacement order.
    pub fn tokens(&self) -> [(&'static str, String); 7] {
        [
            ("{{RESOURCE_NAME}}", self.resource_name.clone()),
            ("{{AUTHOR}}", self.author.clone()),
            ("{{DESCRIPTION}}", self.description.clone()),
            ("{{VERSION}}", self.version.clone()),
            (
                "{{FRAMEWORK}}",
                self.framework
                    .map_or_else(|| "standalone".to_string(), |f| f.to_string()),
            ),
            ("{{LANGUAGE}}", self.language.to_string()),
            ("{{GAME}}", self.platform.game_tags().join(",")),
        ]
    }

    /// Plain global find/replace of every token in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.apply_with(text, str::to_string)
    }

    /// Like [`apply`](Self::apply), passing each value through `escape`.
    ///
    /// One left-to-right pass over `text`: tokens are only matched in the
    /// original text, never inside a value that was just inserted.
    pub fn apply_with(&self, text: &str, escape: impl Fn(&str) -> String) -> String {
        let tokens = self.tokens();
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let candidate = &rest[start..];
            match tokens.iter().find(|(token, _)| candidate.starts_with(token)) {
                Some((token, value)) => {
                    out.push_str(&escape(value));
                    rest = &candidate[token.len()..];
                }
                None => {
                    // Step past one brace so `{{{TOKEN}}` still matches.
                    out.push('{');
                    rest = &candidate[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Base manifest record with the optional library imports applied.
    pub fn manifest_record(&self) -> ManifestRecord {
        let mut record = ManifestRecord::new(&self.resource_name, self.platform, self.language)
            .author(&self.author)
            .description(&self.description)
            .version(&self.version);

        if self.use_ox_lib {
            record = record.shared_import("@ox_lib/init.lua").dependency("ox_lib");
        }
        if self.use_oxmysql {
            record = record
                .server_import("@oxmysql/lib/MySQL.lua")
                .dependency("oxmysql");
        }
        record
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Outcome of a successful scaffold, for caller reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldResult {
    pub path: PathBuf,
    pub template_id: String,
    pub framework: Option<Framework>,
    /// `on-disk` or `procedural`.
    pub source: &'static str,
}

impl ScaffoldResult {
    pub fn new(
        path: impl Into<PathBuf>,
        descriptor: &TemplateDescriptor,
        subs: &Substitutions,
        source: &TemplateSource,
    ) -> Self {
        Self {
            path: path.into(),
            template_id: descriptor.id.to_string(),
            framework: subs.framework,
            source: source.label(),
        }
    }
}

/// Initialize an existing folder as a resource.
#[derive(Debug, Clone)]
pub struct InitRequest {
    pub directory: PathBuf,
    pub name: String,
    pub template_id: String,
    pub options: ScaffoldOptions,
    /// Replace an existing manifest instead of refusing.
    pub overwrite: bool,
}

impl InitRequest {
    pub fn new(directory: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            name: name.into(),
            template_id: "basic-fivem".into(),
            options: ScaffoldOptions::default(),
            overwrite: false,
        }
    }
}

/// What `init` wrote and what it left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub manifest: PathBuf,
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl InitReport {
    pub fn new(manifest: &Path) -> Self {
        Self {
            manifest: manifest.to_path_buf(),
            ..Self::default()
        }
    }
}
