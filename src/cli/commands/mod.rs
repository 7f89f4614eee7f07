//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod track;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use track::{Action, TrackCommand};
