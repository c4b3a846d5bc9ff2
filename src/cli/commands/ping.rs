//! Ping command implementation.
//!
//! The `leap-eip ping` command probes gateway reachability. It never
//! changes any configuration.

use std::time::Duration;

use crate::checks::{ConfigChecker, FetchPolicy};
use crate::cli::args::PingArgs;
use crate::error::Result;
use crate::probe::TcpProbe;
use crate::ui::UserInterface;

use super::dispatcher::{CheckContext, Command, CommandResult};

/// The ping command implementation.
pub struct PingCommand<'a> {
    context: &'a CheckContext,
    args: PingArgs,
}

impl<'a> PingCommand<'a> {
    /// Create a new ping command.
    pub fn new(context: &'a CheckContext, args: PingArgs) -> Self {
        Self { context, args }
    }

    /// Probe the requested hosts with `checker` and report to `ui`.
    pub fn run(
        &self,
        checker: &mut ConfigChecker,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let hosts = if self.args.hosts.is_empty() {
            checker.gateway_hosts()?
        } else {
            self.args.hosts.clone()
        };

        if hosts.is_empty() {
            ui.warning("No gateways known. Run `leap-eip check` first or pass hosts.");
            return Ok(CommandResult::failure(1));
        }

        let mut reachable = 0;
        for host in &hosts {
            if checker.ping_gateway(host) {
                reachable += 1;
                ui.success(&format!("{} is reachable", host));
            } else {
                ui.warning(&format!("{} is unreachable", host));
            }
        }

        if reachable == 0 {
            ui.error("No gateway is reachable");
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}

impl Command for PingCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut checker = self.context.checker(FetchPolicy::Never)?;
        if let Some(port) = self.args.tcp_port {
            checker = checker.with_probe(TcpProbe::new(port, Duration::from_secs(2)));
        }
        self.run(&mut checker, ui)
    }
}
