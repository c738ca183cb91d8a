//! `fxp init` - turn an existing folder into a resource.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use fxp_core::domain::{
    DEFAULT_AUTHOR, DEFAULT_VERSION, DomainValidator, InitRequest, MANIFEST_FILE,
    ScaffoldOptions,
};

use crate::{
    cli::InitArgs,
    commands::{current_dir, parse_framework, resolve_language, scaffold_service, template_service},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::Prompter,
};

const DEFAULT_TEMPLATE: &str = "basic-fivem";

/// Write a manifest and starter files into `args.directory`.
#[instrument(skip_all, fields(directory = %args.directory.display()))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let directory = absolute(&args.directory)?;
    if directory.exists() && !directory.is_dir() {
        return Err(CliError::invalid_path(&directory, "not a directory"));
    }

    let prompter = Prompter::new(args.yes);

    let name = match args.name {
        Some(name) => name,
        None => prompter.text("Resource name", &folder_name(&directory))?,
    };
    DomainValidator::validate_resource_name(&name).map_err(|e| CliError::Core(e.into()))?;

    let templates = template_service();
    let template_id = match args.template {
        Some(id) => id,
        None => {
            let ids: Vec<String> = templates.list(None)?.into_iter().map(|t| t.id).collect();
            let default = ids.iter().position(|id| id == DEFAULT_TEMPLATE).unwrap_or(0);
            let index = prompter.select("Starter template", &ids, default)?;
            ids.get(index).cloned().ok_or(CliError::Cancelled)?
        }
    };
    let descriptor = templates.get(&template_id)?;

    let author = match args.author {
        Some(a) => a,
        None => prompter.text(
            "Author",
            config.defaults.author.as_deref().unwrap_or(DEFAULT_AUTHOR),
        )?,
    };
    let description = match args.description {
        Some(d) => d,
        None => prompter.text("Description", &descriptor.default_description())?,
    };
    let version = match args.resource_version {
        Some(v) => v,
        None => prompter.text(
            "Version",
            config.defaults.version.as_deref().unwrap_or(DEFAULT_VERSION),
        )?,
    };

    let manifest = directory.join(MANIFEST_FILE);
    let overwrite = if args.force {
        true
    } else if manifest.exists() && prompter.is_interactive() {
        if !prompter.confirm(&format!("{MANIFEST_FILE} already exists. Replace it?"), false)? {
            return Err(CliError::Cancelled);
        }
        true
    } else {
        false
    };

    let request = InitRequest {
        directory: directory.clone(),
        name: name.clone(),
        template_id: descriptor.id.to_string(),
        options: ScaffoldOptions {
            author: Some(author),
            description: Some(description),
            version: Some(version),
            framework: parse_framework(args.framework.as_deref())?,
            language: resolve_language(args.language, &config)?,
            use_ox_lib: false,
            use_oxmysql: false,
        },
        overwrite,
    };

    let spinner = output.spinner("Initializing resource...");
    let report = scaffold_service(&config).init_in_place(&request);
    spinner.finish_and_clear();
    let report = report?;

    info!(
        created = report.created.len(),
        skipped = report.skipped.len(),
        "init finished"
    );

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!(
        "Initialized resource '{name}' in {}",
        directory.display()
    ))?;
    for path in &report.created {
        output.detail(&format!("  + {}", path.display()))?;
    }
    for path in &report.skipped {
        output.warning(&format!("Kept existing {}", path.display()))?;
    }

    output.print("")?;
    output.header("Next steps:")?;
    output.print("  - Edit fxmanifest.lua to add dependencies")?;
    output.print("  - Start coding in client/ and server/")?;
    output.print("  - Use 'fxp export' to package for distribution")?;

    Ok(())
}

fn absolute(path: &Path) -> CliResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let joined = current_dir()?.join(path);
    Ok(joined.canonicalize().unwrap_or(joined))
}

fn folder_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "my-resource".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_name_uses_last_component() {
        assert_eq!(folder_name(Path::new("/srv/resources/my-shop")), "my-shop");
        assert_eq!(folder_name(Path::new("/")), "my-resource");
    }

    #[test]
    fn absolute_resolves_dot_to_a_named_folder() {
        let dir = absolute(Path::new(".")).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.file_name().is_some());
    }
}
