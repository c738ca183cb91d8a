//! Implementation of the `fxp list` command.

use fxp_core::application::TemplateInfo;

use crate::{
    cli::{ListArgs, ListFormat},
    commands::{parse_framework, template_service},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let framework = parse_framework(args.framework.as_deref())?;
    let groups = template_service().grouped(framework)?;

    // The global `--output-format json` wins over the per-command format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Json => {
            let templates: Vec<&TemplateInfo> =
                groups.iter().flat_map(|(_, group)| group).collect();
            output.json(&templates)?;
        }

        // Machine formats go straight to stdout so they survive `--quiet`.
        ListFormat::List => {
            for (_, group) in &groups {
                for t in group {
                    println!("{}", t.id);
                }
            }
        }

        ListFormat::Csv => {
            println!("id,name,platform,frameworks,description");
            for (_, group) in &groups {
                for t in group {
                    println!(
                        "{},{},{},{},{}",
                        t.id,
                        csv_field(&t.name),
                        t.platform.as_str(),
                        csv_field(&t.frameworks.join(";")),
                        csv_field(&t.description)
                    );
                }
            }
        }

        ListFormat::Table => {
            if groups.is_empty() {
                let wanted = args.framework.as_deref().unwrap_or("any");
                output.warning(&format!("No templates found for framework: {wanted}"))?;
                return Ok(());
            }

            output.header("\u{1f4cb} Available Templates")?;
            output.print("")?;

            for (platform, group) in &groups {
                output.header(&format!(
                    "{} Templates:",
                    platform.display_name().to_uppercase()
                ))?;
                output.print(&"\u{2500}".repeat(40))?;
                for t in group {
                    print_template(&output, t)?;
                }
            }

            output.detail("Usage:")?;
            output.detail("  fxp create my-resource --template <template-name>")?;
            output.detail("  fxp create my-resource -t esx-basic -f esx")?;
        }
    }

    Ok(())
}

fn print_template(output: &OutputManager, t: &TemplateInfo) -> CliResult<()> {
    output.print(&format!("  \u{1f4e6} {}", t.id))?;
    output.print(&format!("     {}", t.description))?;
    output.detail(&format!("     Frameworks: {}", t.frameworks.join(", ")))?;
    if !t.features.is_empty() {
        output.detail(&format!("     Features: {}", t.features.join(", ")))?;
    }
    output.print("")?;
    Ok(())
}

/// Quote a CSV field when it contains a delimiter or quote.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
