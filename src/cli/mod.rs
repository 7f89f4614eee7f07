//! Command-line interface for guidance-log.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ConfigArgs, TrackArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
