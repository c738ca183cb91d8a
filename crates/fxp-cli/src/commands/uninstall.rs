//! `fxp uninstall` - remove an installed fxp binary.

use fxp_adapters::release::UninstallOutcome;
use serde_json::json;
use tracing::instrument;

use crate::{
    cli::UninstallArgs, commands::installer, config::AppConfig, error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: UninstallArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let installer = installer(args.dir, &config)?;
    let binary = installer.binary_path();
    let outcome = installer.uninstall()?;

    if output.is_json() {
        let (removed, directory_removed) = match outcome {
            UninstallOutcome::NotInstalled => (false, false),
            UninstallOutcome::Removed { directory_removed } => (true, directory_removed),
        };
        output.json(&json!({
            "path": binary,
            "removed": removed,
            "directory_removed": directory_removed,
        }))?;
        return Ok(());
    }

    match outcome {
        UninstallOutcome::NotInstalled => {
            output.info(&format!("fxp is not installed at {}", binary.display()))?;
        }
        UninstallOutcome::Removed { directory_removed } => {
            output.success(&format!("Removed {}", binary.display()))?;
            if directory_removed {
                output.detail(&format!(
                    "Removed empty directory {}",
                    installer.install_dir().display()
                ))?;
            }
            output.detail("You may want to remove the PATH entry manually.")?;
        }
    }
    Ok(())
}
