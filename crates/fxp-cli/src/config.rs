//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FXP_<SECTION>__<KEY>`, e.g. `FXP_DEFAULTS__AUTHOR`
//! 3. Config file: `--config FILE`, else the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use fxp_adapters::release::{DEFAULT_API_URL, DEFAULT_REPO, DEFAULT_TIMEOUT};

const ENV_PREFIX: &str = "FXP";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new resources.
    pub defaults: Defaults,
    /// Where on-disk templates live.
    pub templates: TemplateConfig,
    /// Release API used by `install` and `update`.
    pub release: ReleaseConfig,
    /// Where `install` puts the binary.
    pub install: InstallConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: Option<String>,
    pub version: Option<String>,
    /// `lua` or `js`.
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    pub api_url: String,
    /// `owner/name` on GitHub.
    pub repo: String,
    pub timeout_secs: u64,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            repo: DEFAULT_REPO.into(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ReleaseConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let config = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fxp.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "talbergh", "fxp")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".fxp.toml"))
    }

    /// Look up a dotted key, e.g. `defaults.author`. Unset values print empty.
    pub fn get(&self, key: &str) -> Option<String> {
        let path_str = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };

        let value = match key {
            "defaults.author" => self.defaults.author.clone().unwrap_or_default(),
            "defaults.version" => self.defaults.version.clone().unwrap_or_default(),
            "defaults.language" => self.defaults.language.clone().unwrap_or_default(),
            "templates.root" => path_str(&self.templates.root),
            "release.api_url" => self.release.api_url.clone(),
            "release.repo" => self.release.repo.clone(),
            "release.timeout_secs" => self.release.timeout_secs.to_string(),
            "install.dir" => path_str(&self.install.dir),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_the_public_repo() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.release.repo, "talbergh/fxp");
        assert_eq!(cfg.release.api_url, "https://api.github.com");
        assert!(cfg.defaults.author.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.release, ReleaseConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&temp.path().join("absent.toml"), true).is_err());
    }

    #[test]
    fn partial_file_overrides_only_what_it_names() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\nauthor = \"someone\"\n\n[templates]\nroot = \"/srv/templates\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.author.as_deref(), Some("someone"));
        assert_eq!(cfg.templates.root, Some(PathBuf::from("/srv/templates")));
        assert_eq!(cfg.release.repo, DEFAULT_REPO);
    }

    #[test]
    fn serialized_defaults_load_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, toml::to_string_pretty(&AppConfig::default()).unwrap()).unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.release, ReleaseConfig::default());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("release.repo").as_deref(), Some("talbergh/fxp"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("install.dir").as_deref(), Some(""));
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let release = ReleaseConfig {
            timeout_secs: 0,
            ..ReleaseConfig::default()
        };
        assert_eq!(release.timeout(), Duration::from_secs(1));
    }
}
