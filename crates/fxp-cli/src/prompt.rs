//! Interactive questions for values the user did not pass as flags.
//!
//! Prompts only run on a terminal and when `--yes` was not given; otherwise
//! every question resolves to its default. Builds without the `interactive`
//! feature can still run fully-specified commands but fail with
//! [`CliError::FeatureNotAvailable`] when a required value is missing.

use std::io::{self, IsTerminal};

use crate::error::{CliError, CliResult};

/// Asks questions, or answers them with defaults.
#[derive(Debug, Clone, Copy)]
pub struct Prompter {
    ask: bool,
}

impl Prompter {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            ask: !assume_yes && io::stdin().is_terminal(),
        }
    }

    /// A prompter that never asks.
    pub fn defaults_only() -> Self {
        Self { ask: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.ask && cfg!(feature = "interactive")
    }

    /// A value with no sensible default, e.g. the resource name.
    pub fn required<V>(&self, prompt: &str, what: &str, validate: V) -> CliResult<String>
    where
        V: Fn(&str) -> Result<(), String>,
    {
        if !self.ask {
            return Err(CliError::InvalidInput {
                message: format!("{what} is required when not running interactively"),
                source: None,
            });
        }
        backend::input(prompt, None, &validate)
    }

    /// Free text with a default.
    pub fn text(&self, prompt: &str, default: &str) -> CliResult<String> {
        if !self.is_interactive() {
            return Ok(default.to_string());
        }
        backend::input(prompt, Some(default), &|_| Ok(()))
    }

    /// Pick one of `items`; returns the chosen index.
    pub fn select(&self, prompt: &str, items: &[String], default: usize) -> CliResult<usize> {
        if !self.is_interactive() || items.len() < 2 {
            return Ok(default);
        }
        backend::select(prompt, items, default)
    }

    pub fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool> {
        if !self.is_interactive() {
            return Ok(default);
        }
        backend::confirm(prompt, default)
    }
}

#[cfg(feature = "interactive")]
mod backend {
    use std::io;

    use dialoguer::{Confirm, FuzzySelect, Input};

    use crate::error::{CliError, CliResult};

    fn interaction_error(e: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "failed to read from the terminal".into(),
            source: io::Error::other(e),
        }
    }

    pub fn input(
        prompt: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> CliResult<String> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|value: &String| validate(value.trim()));
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(interaction_error)
    }

    pub fn select(prompt: &str, items: &[String], default: usize) -> CliResult<usize> {
        FuzzySelect::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(interaction_error)?
            .ok_or(CliError::Cancelled)
    }

    pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(interaction_error)?
            .ok_or(CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
mod backend {
    use crate::error::{CliError, CliResult};

    fn unavailable() -> CliError {
        CliError::FeatureNotAvailable {
            feature: "interactive",
        }
    }

    pub fn input(
        _prompt: &str,
        _default: Option<&str>,
        _validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> CliResult<String> {
        Err(unavailable())
    }

    pub fn select(_prompt: &str, _items: &[String], _default: usize) -> CliResult<usize> {
        Err(unavailable())
    }

    pub fn confirm(_prompt: &str, _default: bool) -> CliResult<bool> {
        Err(unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_only_answers_with_defaults() {
        let prompter = Prompter::defaults_only();
        assert!(!prompter.is_interactive());
        assert_eq!(prompter.text("Author:", "talbergh").unwrap(), "talbergh");
        assert!(prompter.confirm("Use ox_lib?", true).unwrap());
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(prompter.select("Pick", &items, 1).unwrap(), 1);
    }

    #[test]
    fn required_value_without_terminal_is_invalid_input() {
        let err = Prompter::defaults_only()
            .required("Resource name:", "resource name", |_| Ok(()))
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
