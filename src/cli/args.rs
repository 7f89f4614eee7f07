//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::TrackerConfig;
use crate::view::ViewKind;

/// Guidance office visit log.
#[derive(Debug, Parser)]
#[command(name = "guidance-log")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.guidance-log/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for sessions_log.txt and current_sessions_log.txt
    #[arg(long, global = true, env = "GUIDANCE_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Counselor name appended to each logged visit
    #[arg(long, global = true, value_name = "NAME")]
    pub counselor: Option<String>,

    /// How sessions are shown and saved
    #[arg(long, global = true, value_enum)]
    pub view: Option<ViewKind>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Read commands line by line even on a terminal
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings given on the command line, to be layered over the config file.
    pub fn config_overrides(&self) -> TrackerConfig {
        TrackerConfig {
            log_directory: self.log_dir.clone(),
            counselor_name: self.counselor.clone(),
            view: self.view,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check students in and out (default if no command specified)
    Track(TrackArgs),

    /// Show resolved configuration and file locations
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `track` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TrackArgs {
    /// Don't redraw the session list after each check-in or check-out
    #[arg(long)]
    pub no_refresh: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Print only the two log file paths
    #[arg(long)]
    pub paths: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
