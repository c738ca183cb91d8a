//! Implementation of the `fxp create` command.
//!
//! Responsibility: gather the request (flags first, prompts for the rest),
//! call the scaffold service, and display results. No business logic lives
//! here.

use tracing::{debug, info, instrument};

use fxp_core::domain::{
    DEFAULT_AUTHOR, DomainValidator, Framework, ScaffoldOptions, ScaffoldRequest,
    TargetPlatform, TemplateDescriptor,
};

use crate::{
    cli::CreateArgs,
    commands::{
        current_dir, name_validator, parse_framework, resolve_language, scaffold_service,
        template_service,
    },
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::Prompter,
};

const DEFAULT_TEMPLATE: &str = "basic-fivem";

/// Execute the `fxp create` command.
#[instrument(skip_all, fields(name = ?args.name, template = ?args.template))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let prompter = Prompter::new(args.yes);

    if prompter.is_interactive() {
        output.header("\u{1f680} Creating new FiveM/RedM resource")?;
    }

    // 1. Name, checked before anything else is asked.
    let name = match args.name {
        Some(name) => name,
        None => prompter.required("Resource name", "resource name", name_validator)?,
    };
    DomainValidator::validate_resource_name(&name).map_err(|e| CliError::Core(e.into()))?;

    // 2. Template.
    let templates = template_service();
    let template_id = match args.template {
        Some(id) => id,
        None => pick_template(&prompter)?,
    };
    let descriptor = templates.get(&template_id)?;

    // 3. Framework and remaining options.
    let framework = match parse_framework(args.framework.as_deref())? {
        Some(fw) => Some(fw),
        None => pick_framework(&prompter, &descriptor)?,
    };

    let description = match args.description {
        Some(d) => d,
        None => prompter.text("Resource description", &descriptor.default_description())?,
    };

    let author = match args.author {
        Some(a) => a,
        None => {
            let default = config.defaults.author.as_deref().unwrap_or(DEFAULT_AUTHOR);
            prompter.text("Author", default)?
        }
    };

    let fivem = descriptor.platform != TargetPlatform::RedM;
    let use_ox_lib = args.ox_lib
        || (fivem
            && prompter.is_interactive()
            && prompter.confirm("Use ox_lib? (recommended)", true)?);
    let use_oxmysql =
        args.oxmysql || (prompter.is_interactive() && prompter.confirm("Use oxmysql?", false)?);

    let options = ScaffoldOptions {
        author: Some(author),
        description: Some(description),
        version: args
            .resource_version
            .or_else(|| config.defaults.version.clone()),
        framework,
        language: resolve_language(args.language, &config)?,
        use_ox_lib,
        use_oxmysql,
    };
    debug!(?options, "create options resolved");

    let root = match args.output {
        Some(dir) => dir,
        None => current_dir()?,
    };
    let request = ScaffoldRequest::new(&name, descriptor.id, root).with_options(options);

    // 4. Scaffold.
    let spinner = output.spinner("Creating resource...");
    let result = scaffold_service(&config).scaffold(&request);
    spinner.finish_and_clear();
    let result = result?;

    info!(path = %result.path.display(), source = result.source, "create finished");

    // 5. Report.
    if output.is_json() {
        output.json(&result)?;
        return Ok(());
    }

    output.success("Resource created successfully!")?;
    output.detail(&format!("\u{1f4c1} Location: {}", result.path.display()))?;
    output.detail(&format!("\u{1f3a8} Template: {}", descriptor.name))?;
    if let Some(fw) = result.framework {
        output.detail(&format!("\u{1f527} Framework: {fw}"))?;
    }

    output.print("")?;
    output.header("\u{1f4dd} Next steps:")?;
    output.print(&format!("   cd {name}"))?;
    output.print("   Start coding! Use 'fxp export' to package it for distribution.")?;

    Ok(())
}

fn pick_template(prompter: &Prompter) -> CliResult<String> {
    let templates = template_service().list(None)?;
    let labels: Vec<String> = templates
        .iter()
        .map(|t| format!("{} - {}", t.name, t.description))
        .collect();
    let default = templates
        .iter()
        .position(|t| t.id == DEFAULT_TEMPLATE)
        .unwrap_or(0);

    let index = prompter.select("Select a template", &labels, default)?;
    templates
        .get(index)
        .map(|t| t.id.clone())
        .ok_or(CliError::Cancelled)
}

fn pick_framework(
    prompter: &Prompter,
    descriptor: &TemplateDescriptor,
) -> CliResult<Option<Framework>> {
    if descriptor.frameworks.len() < 2 || !prompter.is_interactive() {
        return Ok(None);
    }
    let labels: Vec<String> = descriptor
        .frameworks
        .iter()
        .map(|f| f.to_string())
        .collect();
    let index = prompter.select("Select framework", &labels, 0)?;
    Ok(descriptor.frameworks.get(index).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxp_adapters::builtin_templates::TEMPLATES;

    #[test]
    fn default_template_is_registered() {
        assert!(TEMPLATES.iter().any(|t| t.id == DEFAULT_TEMPLATE));
        assert_eq!(
            pick_template(&Prompter::defaults_only()).unwrap(),
            DEFAULT_TEMPLATE
        );
    }

    #[test]
    fn framework_is_left_to_the_template_without_a_terminal() {
        let qb = TEMPLATES
            .iter()
            .find(|t| t.id == "qb-basic")
            .unwrap();
        assert_eq!(pick_framework(&Prompter::defaults_only(), qb).unwrap(), None);
    }
}
