//! GitHub release lookup, version comparison and binary download.
//!
//! Network access is blocking and bounded by explicit timeouts. Nothing here
//! runs implicitly; the CLI calls it for `install` and `update`.

mod installer;

pub use installer::{Installer, UninstallOutcome};

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use semver::Version;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_REPO: &str = "talbergh/fxp";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const CLIENT_USER_AGENT: &str = "FXP-CLI";

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid version '{version}': {source}")]
    Version {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("Release {tag} has no asset named {asset}")]
    MissingAsset { tag: String, asset: String },

    #[error("No prebuilt fxp binary for this platform ({os})")]
    UnsupportedPlatform { os: &'static str },

    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },
}

impl ReleaseError {
    pub(crate) fn io(path: &Path, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            operation,
            source,
        }
    }

    /// Transport failures, as opposed to local or data problems.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Client(_))
    }
}

/// Subset of the GitHub release payload that fxp reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Release {
    pub tag_name: String,
    pub html_url: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub size: u64,
}

impl Release {
    pub fn version(&self) -> Result<Version, ReleaseError> {
        parse_version(&self.tag_name)
    }

    pub fn asset(&self, name: &str) -> Result<&Asset, ReleaseError> {
        self.assets
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| ReleaseError::MissingAsset {
                tag: self.tag_name.clone(),
                asset: name.to_string(),
            })
    }
}

/// Outcome of comparing the running binary against the latest release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateStatus {
    pub current: String,
    pub latest: String,
    pub update_available: bool,
    pub release_url: String,
    pub changelog: Option<String>,
}

/// Parse `1.2.3` or `v1.2.3`.
pub fn parse_version(raw: &str) -> Result<Version, ReleaseError> {
    let cleaned = raw.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|source| ReleaseError::Version {
        version: raw.to_string(),
        source,
    })
}

/// Compare `current` against `release` without touching the network.
pub fn compare(current: &str, release: &Release) -> Result<UpdateStatus, ReleaseError> {
    let current_version = parse_version(current)?;
    let latest_version = release.version()?;

    Ok(UpdateStatus {
        current: current_version.to_string(),
        latest: latest_version.to_string(),
        update_available: latest_version > current_version,
        release_url: release.html_url.clone(),
        changelog: release.body.clone().filter(|b| !b.trim().is_empty()),
    })
}

/// Release asset name for the platform this binary was built for.
pub fn platform_asset_name() -> Result<&'static str, ReleaseError> {
    match std::env::consts::OS {
        "windows" => Ok("fxp-win.exe"),
        "linux" => Ok("fxp-linux"),
        "macos" => Ok("fxp-macos"),
        os => Err(ReleaseError::UnsupportedPlatform { os }),
    }
}

/// Blocking client for one GitHub repository's releases.
#[derive(Debug, Clone)]
pub struct ReleaseClient {
    client: Client,
    api_url: String,
    repo: String,
}

impl ReleaseClient {
    pub fn new(
        api_url: impl Into<String>,
        repo: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ReleaseError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ReleaseError::Client)?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            repo: repo.into(),
        })
    }

    pub fn latest_url(&self) -> String {
        format!("{}/repos/{}/releases/latest", self.api_url, self.repo)
    }

    /// Fetch the latest published release.
    #[instrument(skip(self), fields(repo = %self.repo))]
    pub fn latest(&self) -> Result<Release, ReleaseError> {
        let url = self.latest_url();
        let http = |source| ReleaseError::Http {
            url: url.clone(),
            source,
        };

        let release: Release = self
            .client
            .get(&url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(http)?
            .json()
            .map_err(|source| ReleaseError::Http {
                url: url.clone(),
                source,
            })?;

        debug!(tag = %release.tag_name, assets = release.assets.len(), "latest release fetched");
        Ok(release)
    }

    /// Latest release compared against `current`.
    pub fn check(&self, current: &str) -> Result<(UpdateStatus, Release), ReleaseError> {
        let release = self.latest()?;
        let status = compare(current, &release)?;
        info!(
            current = %status.current,
            latest = %status.latest,
            update_available = status.update_available,
            "update check finished"
        );
        Ok((status, release))
    }

    /// Stream `asset` into `dest`. Returns bytes written.
    #[instrument(skip(self, asset), fields(asset = %asset.name, dest = %dest.display()))]
    pub fn download(&self, asset: &Asset, dest: &Path) -> Result<u64, ReleaseError> {
        let url = &asset.browser_download_url;
        let mut response = self
            .client
            .get(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|source| ReleaseError::Http {
                url: url.clone(),
                source,
            })?;

        let mut file = File::create(dest).map_err(|e| ReleaseError::io(dest, "create", e))?;
        let written = response
            .copy_to(&mut file)
            .map_err(|source| ReleaseError::Http {
                url: url.clone(),
                source,
            })?;

        info!(bytes = written, "asset downloaded");
        Ok(written)
    }
}
