//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, TrackArgs};
use crate::config::{load_config, ResolvedConfig, TrackerConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: Option<PathBuf>,
    overrides: TrackerConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher with an optional explicit config file and
    /// command-line overrides.
    pub fn new(config_path: Option<PathBuf>, overrides: TrackerConfig) -> Self {
        Self {
            config_path,
            overrides,
        }
    }

    /// Create a dispatcher from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.config.clone(), cli.config_overrides())
    }

    /// Explicit config file, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load the config file and apply overrides.
    pub fn resolve_config(&self) -> Result<ResolvedConfig> {
        load_config(self.config_path(), self.overrides.clone())
    }

    /// Dispatch and execute a command.
    ///
    /// Configuration is only loaded for commands that need it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Track(args)) => {
                let cmd = super::track::TrackCommand::new(self.resolve_config()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(self.resolve_config()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::track::TrackCommand::new(self.resolve_config()?, TrackArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use crate::GuidanceError;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatcher_keeps_config_path() {
        let dispatcher =
            CommandDispatcher::new(Some(PathBuf::from("/etc/g.yml")), TrackerConfig::default());
        assert_eq!(dispatcher.config_path(), Some(Path::new("/etc/g.yml")));
    }

    #[test]
    fn missing_config_fails_dispatch() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let cli = Cli::parse_from([
            "guidance-log",
            "--config",
            missing.to_str().unwrap(),
            "config",
        ]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::from_cli(&cli).dispatch(&cli, &mut ui);
        assert!(matches!(result, Err(GuidanceError::ConfigNotFound { .. })));
    }

    #[test]
    fn default_command_is_track() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yml");
        std::fs::write(&config, "").unwrap();
        let cli = Cli::parse_from([
            "guidance-log",
            "--config",
            config.to_str().unwrap(),
            "--log-dir",
            temp.path().to_str().unwrap(),
        ]);
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("command", vec!["enter 1", "quit"]);

        let result = CommandDispatcher::from_cli(&cli)
            .dispatch(&cli, &mut ui)
            .unwrap();
        assert!(result.success);
        assert!(ui.has_success("Checked in"));
    }
}
