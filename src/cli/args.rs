//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// leap-eip - Verify and repair the EIP client configuration.
#[derive(Debug, Parser)]
#[command(name = "leap-eip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration directory (defaults to the per-user config dir)
    #[arg(long, global = true, env = "LEAP_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Fetch provider documents from this base URL instead of https://<provider>
    #[arg(long, global = true, env = "LEAP_PROVIDER_URL")]
    pub provider_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, env = "LEAP_HTTP_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Show where each document is read from and written to
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify the EIP configuration, fetching what is missing (default)
    Check(CheckArgs),

    /// Probe gateway reachability
    Ping(PingArgs),

    /// Show the effective EIP configuration
    Show(ShowArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Download provider documents even if they are cached
    #[arg(long, conflicts_with = "offline")]
    pub refresh: bool,

    /// Never download; use cached provider documents only
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the `ping` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PingArgs {
    /// Hosts to probe (defaults to every gateway of the default provider)
    pub hosts: Vec<String>,

    /// Probe with a TCP connect to this port instead of ICMP
    #[arg(long, value_name = "PORT")]
    pub tcp_port: Option<u16>,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Print only the path of the EIP config file
    #[arg(long)]
    pub path: bool,
}
