//! `fxp update` - replace the running binary with the latest release.

use fxp_adapters::{
    Installer, ReleaseClient,
    release::{Release, UpdateStatus},
};
use tracing::{info, instrument, warn};

use crate::{
    cli::UpdateArgs,
    commands::{download_binary, release_client},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli, RELEASES_PAGE},
    output::OutputManager,
};

#[instrument(skip_all, fields(force = args.force, check = args.check))]
pub fn execute(args: UpdateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let client = release_client(&config)?;

    let spinner = output.spinner("Checking for updates...");
    let checked = client.check(env!("CARGO_PKG_VERSION"));
    spinner.finish_and_clear();
    let (status, latest) = checked?;

    if args.check {
        return report_status(&output, &status);
    }

    if !status.update_available && !args.force {
        if output.is_json() {
            output.json(&status)?;
        } else {
            output.success(&format!("Already up to date! (v{})", status.current))?;
        }
        return Ok(());
    }

    if !output.is_json() {
        output.info(&format!(
            "Update available: v{} \u{2192} v{}",
            status.current, status.latest
        ))?;
        output.detail(&format!("Release: {}", status.release_url))?;
    }

    let spinner = output.spinner("Downloading update...");
    let installed = replace_running_binary(&client, &latest);
    spinner.finish_and_clear();

    if let Err(err) = installed {
        warn!(error = %err, "self-update failed");
        if !output.is_json() {
            output.error("Automatic update failed. To update manually:")?;
            output.print(&format!("  1. Download the latest binary from {RELEASES_PAGE}"))?;
            output.print("  2. Replace your current fxp binary with it")?;
            output.print("  3. Or run 'fxp install' from the downloaded file")?;
        }
        return Err(err);
    }

    info!(version = %status.latest, "update installed");

    if output.is_json() {
        output.json(&status)?;
        return Ok(());
    }

    output.success(&format!("Updated to v{}", status.latest))?;
    output.print("")?;
    match &status.changelog {
        Some(notes) => {
            output.header("What's new:")?;
            for line in notes.lines() {
                output.print(&format!("  {line}"))?;
            }
        }
        None => output.detail("Check the release notes on GitHub for details")?,
    }
    Ok(())
}

fn replace_running_binary(
    client: &ReleaseClient,
    latest: &Release,
) -> CliResult<()> {
    let current = std::env::current_exe().with_cli_context(|| "locating the running executable")?;
    let staging = tempfile::Builder::new()
        .prefix("fxp-update-")
        .tempdir()
        .with_cli_context(|| "creating a download directory")?;

    let downloaded = download_binary(client, latest, staging.path())?;
    Installer::replace_current(&current, &downloaded).map_err(CliError::from)
}

fn report_status(output: &OutputManager, status: &UpdateStatus) -> CliResult<()> {
    if output.is_json() {
        output.json(status)?;
        return Ok(());
    }

    if status.update_available {
        output.info(&format!(
            "Update available: v{} \u{2192} v{}",
            status.current, status.latest
        ))?;
        output.detail(&format!("Release: {}", status.release_url))?;
        output.detail("Run 'fxp update' to install it.")?;
    } else {
        output.success(&format!("Already up to date! (v{})", status.current))?;
    }
    Ok(())
}
