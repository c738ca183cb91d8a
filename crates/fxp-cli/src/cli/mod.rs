//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use fxp_core::domain::ScriptLanguage;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fxp",
    bin_name = "fxp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} FiveM & RedM resource scaffolding",
    long_about = "fxp creates, initializes and packages FiveM/RedM resources \
                  from built-in templates, and keeps itself up to date.",
    after_help = "EXAMPLES:\n\
        \x20 fxp create my-shop --template esx-shop\n\
        \x20 fxp init --name my-resource -y\n\
        \x20 fxp list --framework qb-core\n\
        \x20 fxp export ./my-shop --out dist/my-shop.zip",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new resource from a template.
    #[command(
        visible_alias = "new",
        about = "Create a new FiveM/RedM resource",
        after_help = "EXAMPLES:\n\
            \x20 fxp create                                 # fully interactive\n\
            \x20 fxp create my-shop --template esx-shop --yes\n\
            \x20 fxp create my-job  --template qb-job --framework qbox --ox-lib"
    )]
    Create(CreateArgs),

    /// Turn an existing folder into a resource.
    #[command(
        about = "Initialize a folder as a resource",
        after_help = "EXAMPLES:\n\
            \x20 fxp init                      # current folder, interactive\n\
            \x20 fxp init ./my-resource -y\n\
            \x20 fxp init --template redm-basic --force"
    )]
    Init(InitArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 fxp list\n\
            \x20 fxp list --framework esx\n\
            \x20 fxp list --format json"
    )]
    List(ListArgs),

    /// Zip a resource folder for distribution.
    #[command(
        about = "Package a resource as a zip archive",
        after_help = "EXAMPLES:\n\
            \x20 fxp export                 # current folder -> ./<folder>.zip\n\
            \x20 fxp export ./my-shop --out dist/my-shop.zip"
    )]
    Export(ExportArgs),

    /// Install fxp into the user's binary directory.
    #[command(about = "Install fxp on this system")]
    Install(InstallArgs),

    /// Remove an installed fxp binary.
    #[command(about = "Uninstall fxp from this system")]
    Uninstall(UninstallArgs),

    /// Update the running binary to the latest release.
    #[command(
        about = "Update fxp to the latest release",
        after_help = "EXAMPLES:\n\
            \x20 fxp update --check\n\
            \x20 fxp update --force"
    )]
    Update(UpdateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fxp completions bash > ~/.local/share/bash-completion/completions/fxp\n\
            \x20 fxp completions zsh  > ~/.zfunc/_fxp\n\
            \x20 fxp completions fish > ~/.config/fish/completions/fxp.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the fxp configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fxp config init\n\
            \x20 fxp config get defaults.author\n\
            \x20 fxp config list"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `fxp create`.
#[derive(Debug, Default, Args)]
pub struct CreateArgs {
    /// Resource name; prompted for when omitted.
    #[arg(value_name = "NAME", help = "Resource name")]
    pub name: Option<String>,

    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template identifier (see `fxp list`)"
    )]
    pub template: Option<String>,

    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        help = "Framework (esx, qb-core, qbox, standalone, redm, rsg)"
    )]
    pub framework: Option<String>,

    #[arg(
        short = 'l',
        long = "language",
        value_enum,
        value_name = "LANG",
        help = "Script language"
    )]
    pub language: Option<ScriptLang>,

    #[arg(short = 'd', long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    #[arg(short = 'a', long = "author", value_name = "NAME")]
    pub author: Option<String>,

    #[arg(long = "resource-version", value_name = "VERSION")]
    pub resource_version: Option<String>,

    #[arg(long = "ox-lib", help = "Import ox_lib")]
    pub ox_lib: bool,

    #[arg(long = "oxmysql", help = "Import oxmysql")]
    pub oxmysql: bool,

    /// Directory the resource folder is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip every prompt and use defaults for anything not given.
    #[arg(short = 'y', long = "yes", help = "Accept defaults, never prompt")]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fxp init`.
#[derive(Debug, Default, Args)]
pub struct InitArgs {
    /// Folder to initialize.
    #[arg(value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Resource name (default: folder name).
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template whose starter files are written"
    )]
    pub template: Option<String>,

    #[arg(short = 'f', long = "framework", value_name = "FRAMEWORK")]
    pub framework: Option<String>,

    #[arg(short = 'l', long = "language", value_enum, value_name = "LANG")]
    pub language: Option<ScriptLang>,

    #[arg(short = 'd', long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    #[arg(short = 'a', long = "author", value_name = "NAME")]
    pub author: Option<String>,

    #[arg(long = "resource-version", value_name = "VERSION")]
    pub resource_version: Option<String>,

    /// Replace an existing fxmanifest.lua.
    #[arg(long = "force", help = "Overwrite an existing manifest")]
    pub force: bool,

    #[arg(short = 'y', long = "yes", help = "Accept defaults, never prompt")]
    pub yes: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `fxp list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        help = "Only templates supporting this framework"
    )]
    pub framework: Option<String>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Grouped by platform, with details.
    Table,
    /// One identifier per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── export ────────────────────────────────────────────────────────────────────

/// Arguments for `fxp export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Resource folder to package.
    #[arg(value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        help = "Archive path (default: ./<folder>.zip)"
    )]
    pub out: Option<PathBuf>,
}

// ── install / uninstall / update ──────────────────────────────────────────────

/// Arguments for `fxp install`.
#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Install this binary instead of downloading the latest release.
    #[arg(long = "from", value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Install the binary that is currently running.
    #[arg(long = "current", conflicts_with = "from")]
    pub current: bool,

    #[arg(long = "dir", value_name = "DIR", help = "Install directory")]
    pub dir: Option<PathBuf>,
}

/// Arguments for `fxp uninstall`.
#[derive(Debug, Args)]
pub struct UninstallArgs {
    #[arg(long = "dir", value_name = "DIR", help = "Install directory")]
    pub dir: Option<PathBuf>,
}

/// Arguments for `fxp update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Reinstall the latest release even when already current.
    #[arg(long = "force")]
    pub force: bool,

    /// Only report whether an update exists.
    #[arg(long = "check", conflicts_with = "force")]
    pub check: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fxp completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fxp config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long = "force")]
        force: bool,
    },
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Script language accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScriptLang {
    Lua,
    /// Also accepted as `javascript`.
    #[value(alias = "javascript")]
    Js,
}

impl From<ScriptLang> for ScriptLanguage {
    fn from(lang: ScriptLang) -> Self {
        match lang {
            ScriptLang::Lua => ScriptLanguage::Lua,
            ScriptLang::Js => ScriptLanguage::JavaScript,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from([
            "fxp",
            "create",
            "my-shop",
            "--template",
            "esx-shop",
            "--ox-lib",
            "-y",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert_eq!(args.name.as_deref(), Some("my-shop"));
        assert_eq!(args.template.as_deref(), Some("esx-shop"));
        assert!(args.ox_lib);
        assert!(!args.oxmysql);
        assert!(args.yes);
    }

    #[test]
    fn new_is_an_alias_for_create() {
        let cli = Cli::parse_from(["fxp", "new", "res"]);
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn ls_is_an_alias_for_list() {
        let cli = Cli::parse_from(["fxp", "ls", "--format", "json"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Json);
    }

    #[test]
    fn javascript_alias() {
        let cli = Cli::parse_from(["fxp", "create", "res", "-l", "javascript"]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert_eq!(args.language, Some(ScriptLang::Js));
        assert_eq!(
            ScriptLanguage::from(ScriptLang::Js),
            ScriptLanguage::JavaScript
        );
    }

    #[test]
    fn export_defaults_to_current_directory() {
        let cli = Cli::parse_from(["fxp", "export"]);
        let Commands::Export(args) = cli.command else {
            panic!("expected Export command");
        };
        assert_eq!(args.directory, PathBuf::from("."));
        assert!(args.out.is_none());
    }

    #[test]
    fn update_check_and_force_conflict() {
        let result = Cli::try_parse_from(["fxp", "update", "--check", "--force"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["fxp", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
