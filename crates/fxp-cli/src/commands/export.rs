//! Implementation of the `fxp export` command.

use fxp_adapters::ResourceArchiver;
use tracing::{info, instrument};

use crate::{
    cli::ExportArgs,
    commands::current_dir,
    error::CliResult,
    output::OutputManager,
};

/// Zip a resource folder for distribution.
#[instrument(skip_all, fields(directory = %args.directory.display()))]
pub fn execute(args: ExportArgs, output: OutputManager) -> CliResult<()> {
    let cwd = current_dir()?;
    let directory = cwd.join(&args.directory);

    // Fail before creating anything when the folder is not a resource.
    ResourceArchiver::validate(&directory)?;

    let destination = match args.out {
        Some(path) => cwd.join(path),
        None => ResourceArchiver::default_output(&directory, &cwd),
    };

    let spinner = output.spinner("Packaging resource...");
    let summary = ResourceArchiver::new().export(&directory, &destination);
    spinner.finish_and_clear();
    let summary = summary?;

    info!(path = %summary.path.display(), files = summary.files, "export finished");

    if output.is_json() {
        output.json(&summary)?;
        return Ok(());
    }

    output.success(&format!("Exported to {}", summary.path.display()))?;
    output.detail(&format!("{} files archived", summary.files))?;
    Ok(())
}
