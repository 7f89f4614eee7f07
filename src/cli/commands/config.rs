//! The `guidance-log config` command.

use crate::cli::args::ConfigArgs;
use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::logfile::LogWriter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Shows where visits will be logged and with which settings.
pub struct ConfigCommand {
    config: ResolvedConfig,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(config: ResolvedConfig, args: ConfigArgs) -> Self {
        Self { config, args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let writer = LogWriter::new(&self.config.log_directory);

        if !self.args.paths {
            let yaml = serde_yaml::to_string(&self.config).map_err(anyhow::Error::from)?;
            ui.message(yaml.trim_end());
        }
        ui.message(&format!("session_log: {}", writer.log_path().display()));
        ui.message(&format!("snapshot: {}", writer.snapshot_path().display()));

        Ok(CommandResult::success())
    }
}
