//! Domain value objects: TargetPlatform, Framework, ScriptLanguage, GeneratorId.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one owns its string representation and a case-insensitive
//! `FromStr` parser. Nothing here performs I/O.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Reference it from the registry table in `fxp-adapters`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TargetPlatform ───────────────────────────────────────────────────────────

/// The game the resource is deployed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    /// GTA V servers (`gta5`).
    FiveM,
    /// Red Dead Redemption 2 servers (`rdr3`).
    RedM,
    /// Resources loadable by both engines.
    Universal,
}

impl TargetPlatform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FiveM => "fivem",
            Self::RedM => "redm",
            Self::Universal => "universal",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::FiveM => "FiveM",
            Self::RedM => "RedM",
            Self::Universal => "Universal",
        }
    }

    /// Game identifiers used in the manifest's platform declaration.
    pub const fn game_tags(&self) -> &'static [&'static str] {
        match self {
            Self::FiveM => &["gta5"],
            Self::RedM => &["rdr3"],
            Self::Universal => &["gta5", "rdr3"],
        }
    }

    /// Whether the RedM prerelease acknowledgement must be emitted.
    pub const fn requires_rdr3_warning(&self) -> bool {
        matches!(self, Self::RedM | Self::Universal)
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetPlatform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fivem" | "gta5" => Ok(Self::FiveM),
            "redm" | "rdr3" => Ok(Self::RedM),
            "universal" | "both" => Ok(Self::Universal),
            other => Err(DomainError::InvalidInput(format!(
                "unknown platform: {other}"
            ))),
        }
    }
}

// ── Framework ────────────────────────────────────────────────────────────────

/// A server framework a template can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    Standalone,
    Esx,
    QbCore,
    Qbox,
    #[serde(rename = "redm")]
    RedM,
    Rsg,
}

impl Framework {
    /// Every framework tag accepted on the command line.
    pub const ALL: [Framework; 6] = [
        Self::Standalone,
        Self::Esx,
        Self::QbCore,
        Self::Qbox,
        Self::RedM,
        Self::Rsg,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standalone => "standalone",
            Self::Esx => "esx",
            Self::QbCore => "qb-core",
            Self::Qbox => "qbox",
            Self::RedM => "redm",
            Self::Rsg => "rsg",
        }
    }

    /// Name of the server resource this framework is shipped as, if any.
    pub const fn resource_dependency(&self) -> Option<&'static str> {
        match self {
            Self::Esx => Some("es_extended"),
            Self::QbCore => Some("qb-core"),
            Self::Qbox => Some("qbx_core"),
            Self::Rsg => Some("rsg-core"),
            Self::Standalone | Self::RedM => None,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standalone" | "none" => Ok(Self::Standalone),
            "esx" | "es_extended" => Ok(Self::Esx),
            "qb-core" | "qbcore" | "qb" => Ok(Self::QbCore),
            "qbox" | "qbx" => Ok(Self::Qbox),
            "redm" => Ok(Self::RedM),
            "rsg" | "rsg-core" => Ok(Self::Rsg),
            other => Err(DomainError::InvalidFramework {
                framework: other.to_string(),
            }),
        }
    }
}

// ── ScriptLanguage ───────────────────────────────────────────────────────────

/// Language the generated client/server scripts are written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLanguage {
    #[default]
    Lua,
    #[serde(rename = "js")]
    JavaScript,
}

impl ScriptLanguage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lua => "lua",
            Self::JavaScript => "js",
        }
    }

    pub const fn file_extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lua" => Ok(Self::Lua),
            "js" | "javascript" => Ok(Self::JavaScript),
            other => Err(DomainError::InvalidInput(format!(
                "unknown script language: {other}"
            ))),
        }
    }
}

// ── GeneratorId ──────────────────────────────────────────────────────────────

/// Which procedural generator synthesizes a template that has no on-disk tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorId {
    Basic,
    Esx,
    QbCore,
    #[serde(rename = "redm")]
    RedM,
    Nui,
}

impl GeneratorId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Esx => "esx",
            Self::QbCore => "qb-core",
            Self::RedM => "redm",
            Self::Nui => "nui",
        }
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_parses_aliases_case_insensitively() {
        assert_eq!("ESX".parse::<Framework>().unwrap(), Framework::Esx);
        assert_eq!("qb".parse::<Framework>().unwrap(), Framework::QbCore);
        assert_eq!("Qbox".parse::<Framework>().unwrap(), Framework::Qbox);
        assert_eq!(" rsg ".parse::<Framework>().unwrap(), Framework::Rsg);
    }

    #[test]
    fn unknown_framework_is_rejected() {
        let err = "vrp".parse::<Framework>().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidFramework {
                framework: "vrp".into()
            }
        );
    }

    #[test]
    fn framework_round_trips_through_as_str() {
        for fw in Framework::ALL {
            assert_eq!(fw.as_str().parse::<Framework>().unwrap(), fw);
        }
    }

    #[test]
    fn platform_game_tags() {
        assert_eq!(TargetPlatform::FiveM.game_tags(), &["gta5"]);
        assert_eq!(TargetPlatform::RedM.game_tags(), &["rdr3"]);
        assert_eq!(TargetPlatform::Universal.game_tags(), &["gta5", "rdr3"]);
        assert!(!TargetPlatform::FiveM.requires_rdr3_warning());
        assert!(TargetPlatform::RedM.requires_rdr3_warning());
    }

    #[test]
    fn script_language_accepts_long_form() {
        assert_eq!(
            "JavaScript".parse::<ScriptLanguage>().unwrap(),
            ScriptLanguage::JavaScript
        );
        assert_eq!(ScriptLanguage::default(), ScriptLanguage::Lua);
        assert!("python".parse::<ScriptLanguage>().is_err());
    }
}
