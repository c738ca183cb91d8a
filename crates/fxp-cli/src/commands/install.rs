//! `fxp install` - put the fxp binary into a directory on `PATH`.

use std::path::Path;

use serde_json::json;
use tracing::{info, instrument};

use crate::{
    cli::InstallArgs,
    commands::{download_binary, installer, release_client},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: InstallArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let installer = installer(args.dir, &config)?;

    // Keeps a downloaded binary alive until it has been copied.
    let mut staging = None;

    let (source, origin) = if let Some(path) = args.from {
        if !path.is_file() {
            return Err(CliError::invalid_path(&path, "no such file"));
        }
        let origin = format!("file {}", path.display());
        (path, origin)
    } else if args.current {
        let exe = std::env::current_exe()
            .with_cli_context(|| "locating the running executable")?;
        (exe, "running executable".to_string())
    } else {
        let client = release_client(&config)?;
        let spinner = output.spinner("Fetching latest release...");
        let fetched = client.latest().map_err(CliError::from).and_then(|latest| {
            let dir = tempfile::Builder::new()
                .prefix("fxp-install-")
                .tempdir()
                .with_cli_context(|| "creating a download directory")?;
            let path = download_binary(&client, &latest, dir.path())?;
            Ok((latest, dir, path))
        });
        spinner.finish_and_clear();
        let (latest, dir, path) = fetched?;
        staging = Some(dir);
        (path, format!("release {}", latest.tag_name))
    };

    let target = installer.install(&source)?;
    drop(staging);

    let on_path = installer.on_path();
    info!(path = %target.display(), on_path, "install finished");

    if output.is_json() {
        output.json(&json!({
            "path": target,
            "source": origin,
            "on_path": on_path,
        }))?;
        return Ok(());
    }

    output.success(&format!("fxp installed to {}", target.display()))?;
    output.detail(&format!("Source: {origin}"))?;

    if !on_path {
        output.warning(&format!(
            "{} is not on your PATH",
            installer.install_dir().display()
        ))?;
        output.print(&path_hint(installer.install_dir()))?;
    }

    output.print("")?;
    output.header("Get started:")?;
    output.print("  fxp create my-resource")?;
    output.print("  fxp list")?;
    Ok(())
}

fn path_hint(dir: &Path) -> String {
    if cfg!(windows) {
        format!(
            "  Add it with: setx PATH \"%PATH%;{}\" and restart your terminal",
            dir.display()
        )
    } else {
        format!(
            "  Add it with: echo 'export PATH=\"{}:$PATH\"' >> ~/.profile",
            dir.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_hint_names_the_directory() {
        let hint = path_hint(Path::new("/opt/fxp/bin"));
        assert!(hint.contains("/opt/fxp/bin"));
    }
}
