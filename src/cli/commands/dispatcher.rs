//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CheckContext`] for building a checker from global flags
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::time::Duration;

use crate::checks::{ConfigChecker, FetchPolicy};
use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::{ConfigPaths, Defaults};
use crate::error::Result;
use crate::fetch::HttpFetcher;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
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

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Everything needed to build a [`ConfigChecker`] from the global flags.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub paths: ConfigPaths,
    pub defaults: Defaults,
    pub timeout: Duration,
}

impl CheckContext {
    /// Resolve paths and defaults from the parsed CLI.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let paths = match &cli.config_dir {
            Some(dir) => ConfigPaths::with_base(dir),
            None => ConfigPaths::new()?,
        };
        let mut defaults = Defaults::default();
        if let Some(url) = &cli.provider_url {
            defaults = defaults.with_base_url(url.clone());
        }
        Ok(Self {
            paths,
            defaults,
            timeout: Duration::from_secs(cli.timeout),
        })
    }

    /// Build a checker that fetches over HTTP.
    pub fn checker(&self, policy: FetchPolicy) -> Result<ConfigChecker> {
        let fetcher = HttpFetcher::with_timeout(self.timeout)?;
        Ok(
            ConfigChecker::new(self.paths.clone(), self.defaults.clone(), fetcher)
                .with_fetch_policy(policy),
        )
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CheckContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CheckContext) -> Self {
        Self { context }
    }

    /// Get the checker context.
    pub fn context(&self) -> &CheckContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Ping(args)) => {
                let cmd = super::ping::PingCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(&self.context, args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::check::CheckCommand::new(&self.context, CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
