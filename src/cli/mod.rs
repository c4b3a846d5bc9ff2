//! Command-line interface for leap-eip.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, PingArgs, ShowArgs};
pub use commands::{CheckContext, Command, CommandDispatcher, CommandResult};
