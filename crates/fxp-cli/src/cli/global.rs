//! Flags shared by every `fxp` subcommand.
//!
//! Flattened into [`super::Cli`]. Environment fallbacks use the `FXP_`
//! prefix, except `NO_COLOR`, which follows <https://no-color.org>: any
//! non-empty value turns colour off. clap's bool parser rejects `NO_COLOR=1`,
//! so that variable is folded in by [`GlobalArgs::apply_env`] after parsing.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Log level written to stderr:
    (none)  - warnings and errors
    -v      - info: template source, destination, archive size
    -vv     - debug: template roots tried, every file written
    -vvv    - trace"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and requested data"
    )]
    pub quiet: bool,

    #[arg(
        long = "no-color",
        global = true,
        action = ArgAction::SetTrue,
        help = "Disable colored output (also: NO_COLOR)"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "FXP_CONFIG",
        value_name = "FILE",
        help = "Config file (default: per-user config.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        env = "FXP_OUTPUT_FORMAT",
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Fold `NO_COLOR` from the process environment into `no_color`.
    pub fn apply_env(&mut self) {
        self.no_color |= no_color_requested(std::env::var_os(NO_COLOR_ENV).as_deref());
    }
}

/// `NO_COLOR` counts when present and non-empty, whatever its value.
fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// How results are printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    Human,
    Plain,
    /// Command results as JSON; progress and hints are suppressed.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn any_non_empty_no_color_value_counts() {
        assert!(no_color_requested(Some(OsStr::new("1"))));
        assert!(no_color_requested(Some(OsStr::new("true"))));
        assert!(no_color_requested(Some(OsStr::new("0"))));
        assert!(!no_color_requested(Some(OsStr::new(""))));
        assert!(!no_color_requested(None));
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        let cli = Cli::try_parse_from(["fxp", "--no-color", "list"]).unwrap();
        assert!(cli.global.no_color);
        assert!(Cli::try_parse_from(["fxp", "--no-color=1", "list"]).is_err());
    }

    #[test]
    fn apply_env_never_clears_the_flag() {
        let mut cli = Cli::try_parse_from(["fxp", "--no-color", "list"]).unwrap();
        cli.global.apply_env();
        assert!(cli.global.no_color);
    }
}
