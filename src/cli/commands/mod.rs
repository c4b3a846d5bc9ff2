//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod check;
pub mod dispatcher;
pub mod ping;
pub mod show;

pub use dispatcher::{CheckContext, Command, CommandDispatcher, CommandResult};
