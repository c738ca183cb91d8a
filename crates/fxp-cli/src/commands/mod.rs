//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on core services or
//! adapters and reports the outcome through [`OutputManager`]. Shared wiring
//! lives here.
//!
//! [`OutputManager`]: crate::output::OutputManager

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fxp_adapters::{
    BuiltinStore, Installer, LocalFilesystem, ProceduralGenerator, ReleaseClient,
    builtin_templates,
    release::{self, Release},
};
use fxp_core::{
    application::{ScaffoldService, TemplateService},
    domain::{DomainValidator, Framework, ScriptLanguage},
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

pub mod completions;
pub mod config;
pub mod create;
pub mod export;
pub mod init;
pub mod install;
pub mod list;
pub mod uninstall;
pub mod update;

/// Scaffolding service over the real filesystem and built-in registry.
pub(crate) fn scaffold_service(config: &AppConfig) -> ScaffoldService {
    let root = builtin_templates::templates_root(config.templates.root.as_deref());
    ScaffoldService::new(
        Arc::new(BuiltinStore::new()),
        Arc::new(LocalFilesystem::new()),
        Arc::new(ProceduralGenerator::new()),
    )
    .with_templates_root(root)
}

pub(crate) fn template_service() -> TemplateService {
    TemplateService::new(Arc::new(BuiltinStore::new()))
}

pub(crate) fn release_client(config: &AppConfig) -> CliResult<ReleaseClient> {
    Ok(ReleaseClient::new(
        &config.release.api_url,
        &config.release.repo,
        config.release.timeout(),
    )?)
}

/// Download this platform's binary from `latest` into `dir`.
pub(crate) fn download_binary(
    client: &ReleaseClient,
    latest: &Release,
    dir: &Path,
) -> CliResult<PathBuf> {
    let asset = latest.asset(release::platform_asset_name()?)?;
    let dest = dir.join(&asset.name);
    client.download(asset, &dest)?;
    Ok(dest)
}

/// Installer for `--dir`, else `install.dir`, else the platform default.
pub(crate) fn installer(dir: Option<PathBuf>, config: &AppConfig) -> CliResult<Installer> {
    dir.or_else(|| config.install.dir.clone())
        .or_else(Installer::default_install_dir)
        .map(Installer::new)
        .ok_or_else(|| CliError::ConfigError {
            message: "could not determine an install directory; set install.dir".into(),
            source: None,
        })
}

pub(crate) fn parse_framework(tag: Option<&str>) -> CliResult<Option<Framework>> {
    tag.map(DomainValidator::validate_framework)
        .transpose()
        .map_err(|e| CliError::Core(e.into()))
}

/// `--language`, else `defaults.language`, else Lua.
pub(crate) fn resolve_language(
    flag: Option<crate::cli::ScriptLang>,
    config: &AppConfig,
) -> CliResult<Option<ScriptLanguage>> {
    if let Some(lang) = flag {
        return Ok(Some(lang.into()));
    }
    config
        .defaults
        .language
        .as_deref()
        .map(str::parse::<ScriptLanguage>)
        .transpose()
        .map_err(|e| CliError::ConfigError {
            message: format!("defaults.language: {e}"),
            source: Some(Box::new(e)),
        })
}

pub(crate) fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().with_cli_context(|| "reading the current directory")
}

/// Resource-name check shaped for interactive validators.
pub(crate) fn name_validator(name: &str) -> Result<(), String> {
    DomainValidator::validate_resource_name(name).map_err(|e| match e {
        fxp_core::domain::DomainError::InvalidResourceName { reason, .. } => reason,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ScriptLang;

    #[test]
    fn framework_tags_are_case_insensitive() {
        assert_eq!(parse_framework(Some("QBOX")).unwrap(), Some(Framework::Qbox));
        assert_eq!(parse_framework(None).unwrap(), None);
    }

    #[test]
    fn unknown_framework_is_a_user_error() {
        let err = parse_framework(Some("vrp")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn language_flag_beats_config() {
        let mut config = AppConfig::default();
        config.defaults.language = Some("js".into());
        assert_eq!(
            resolve_language(Some(ScriptLang::Lua), &config).unwrap(),
            Some(ScriptLanguage::Lua)
        );
        assert_eq!(
            resolve_language(None, &config).unwrap(),
            Some(ScriptLanguage::JavaScript)
        );
    }

    #[test]
    fn bad_configured_language_is_a_config_error() {
        let mut config = AppConfig::default();
        config.defaults.language = Some("python".into());
        assert_eq!(resolve_language(None, &config).unwrap_err().exit_code(), 4);
    }

    #[test]
    fn name_validator_returns_the_reason() {
        assert!(name_validator("my-shop").is_ok());
        let reason = name_validator("1shop").unwrap_err();
        assert!(reason.contains("start"));
    }

    #[test]
    fn explicit_install_dir_wins() {
        let mut config = AppConfig::default();
        config.install.dir = Some(PathBuf::from("/from/config"));
        let from_flag = installer(Some(PathBuf::from("/from/flag")), &config).unwrap();
        assert_eq!(from_flag.install_dir(), std::path::Path::new("/from/flag"));

        let from_config = installer(None, &config).unwrap();
        assert_eq!(from_config.install_dir(), std::path::Path::new("/from/config"));
    }
}
