//! Built-in template registry and on-disk template discovery.
//!
//! [`TEMPLATES`] is the process-wide, read-only descriptor table. Order is
//! significant: `fxp list` and interactive pickers show templates in the order
//! they appear here.
//!
//! # Templates root resolution order
//!
//! On-disk template trees override procedural generation. The root directory
//! holding them is searched in this priority order, stopping at the first
//! candidate that is a directory:
//!
//! 1. **`templates.root`** from configuration.
//! 2. **`$FXP_TEMPLATES_DIR`**, environment variable override.
//! 3. **`./templates`**, relative to the current working directory.
//! 4. **`<executable-dir>/templates`**, sibling to the `fxp` binary.
//!
//! If nothing is found, [`templates_root`] returns `None` and every template
//! is generated procedurally.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use fxp_core::domain::{Framework, GeneratorId, TargetPlatform, TemplateDescriptor};

/// Environment variable naming an alternative templates root.
pub const TEMPLATES_DIR_ENV: &str = "FXP_TEMPLATES_DIR";

pub static TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        id: "basic-fivem",
        name: "Basic FiveM",
        description: "Simple FiveM resource with client/server structure",
        platform: TargetPlatform::FiveM,
        frameworks: &[Framework::Standalone],
        features: &["Client/Server scripts", "fxmanifest.lua", "Basic structure"],
        generator: GeneratorId::Basic,
    },
    TemplateDescriptor {
        id: "esx-basic",
        name: "ESX Basic",
        description: "ESX framework compatible resource",
        platform: TargetPlatform::FiveM,
        frameworks: &[Framework::Esx],
        features: &["ESX integration", "Database ready", "Locales support"],
        generator: GeneratorId::Esx,
    },
    TemplateDescriptor {
        id: "esx-shop",
        name: "ESX Shop",
        description: "Complete shop system for ESX",
        platform: TargetPlatform::FiveM,
        frameworks: &[Framework::Esx],
        features: &[
            "Shop UI",
            "Item management",
            "Economy integration",
            "Admin panel",
        ],
        generator: GeneratorId::Esx,
    },
    TemplateDescriptor {
        id: "qb-basic",
        name: "QB-Core Basic",
        description: "QB-Core framework compatible resource",
        platform: TargetPlatform::FiveM,
        frameworks: &[Framework::QbCore, Framework::Qbox],
        features: &["QB-Core integration", "Player data", "Event system"],
        generator: GeneratorId::QbCore,
    },
    TemplateDescriptor {
        id: "qb-job",
        name: "QB-Core Job",
        description: "Complete job system for QB-Core",
        platform: TargetPlatform::FiveM,
        frameworks: &[Framework::QbCore, Framework::Qbox],
        features: &["Job mechanics", "Duty system", "Boss menu", "Payment system"],
        generator: GeneratorId::QbCore,
    },
    TemplateDescriptor {
        id: "redm-basic",
        name: "RedM Basic",
        description: "Basic RedM resource structure",
        platform: TargetPlatform::RedM,
        frameworks: &[Framework::Standalone],
        features: &["RedM compatible", "Client/Server scripts", "Native support"],
        generator: GeneratorId::RedM,
    },
    TemplateDescriptor {
        id: "redm-rsg",
        name: "RedM RSG",
        description: "RSG framework compatible resource",
        platform: TargetPlatform::RedM,
        frameworks: &[Framework::Rsg],
        features: &["RSG integration", "Character system", "Economy support"],
        generator: GeneratorId::RedM,
    },
    TemplateDescriptor {
        id: "ui-nui",
        name: "NUI Interface",
        description: "Modern NUI interface with HTML/CSS/JS",
        platform: TargetPlatform::FiveM,
        frameworks: &[Framework::Standalone, Framework::Esx, Framework::QbCore],
        features: &[
            "Modern UI",
            "Responsive design",
            "Dark theme",
            "CEF optimized",
        ],
        generator: GeneratorId::Nui,
    },
];

/// Resolve the templates root using the order described in the module docs.
#[instrument(level = "debug")]
pub fn templates_root(configured: Option<&Path>) -> Option<PathBuf> {
    let found = candidate_paths(configured, std::env::var_os(TEMPLATES_DIR_ENV))
        .into_iter()
        .find(|candidate| {
            let hit = candidate.is_dir();
            debug!(path = %candidate.display(), hit, "checking candidate templates path");
            hit
        });

    if found.is_none() {
        debug!("no templates directory found, all templates are procedural");
    }
    found
}

/// Build the candidate template roots, in lookup order.
fn candidate_paths(configured: Option<&Path>, env_dir: Option<OsString>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Some(dir) = configured {
        paths.push(dir.to_path_buf());
    }

    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        paths.push(PathBuf::from(dir));
    }

    paths.push(PathBuf::from("templates"));

    if let Some(exe_sibling) = exe_sibling_templates() {
        paths.push(exe_sibling);
    }

    paths
}

/// Return `<directory of current executable>/templates`, or `None` if the
/// executable path cannot be determined (some platforms / test runners).
fn exe_sibling_templates() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<_> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn table_order_is_stable() {
        let ids: Vec<_> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            [
                "basic-fivem",
                "esx-basic",
                "esx-shop",
                "qb-basic",
                "qb-job",
                "redm-basic",
                "redm-rsg",
                "ui-nui"
            ]
        );
    }

    #[test]
    fn redm_templates_use_redm_generator() {
        for t in TEMPLATES.iter().filter(|t| t.platform == TargetPlatform::RedM) {
            assert_eq!(t.generator, GeneratorId::RedM, "{}", t.id);
        }
    }

    #[test]
    fn configured_root_comes_first_then_env() {
        let paths = candidate_paths(
            Some(Path::new("/from/config")),
            Some(OsString::from("/from/env")),
        );
        assert_eq!(paths[0], PathBuf::from("/from/config"));
        assert_eq!(paths[1], PathBuf::from("/from/env"));
        assert_eq!(paths[2], PathBuf::from("templates"));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let paths = candidate_paths(None, Some(OsString::new()));
        assert_eq!(paths[0], PathBuf::from("templates"));
    }

    #[test]
    fn configured_directory_is_used_when_present() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            templates_root(Some(temp.path())),
            Some(temp.path().to_path_buf())
        );
    }
}
