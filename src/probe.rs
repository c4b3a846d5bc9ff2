//! Gateway reachability probes.
//!
//! Probing is observational only: a probe answers reachable or not and never
//! changes any configuration.

use std::net::{TcpStream, ToSocketAddrs};
use std::process::{Command, Stdio};
use std::time::Duration;

/// Answers whether a gateway host is reachable.
pub trait GatewayProbe {
    /// Probe `host` once.
    fn ping(&self, host: &str) -> bool;
}

/// ICMP echo through the system `ping` binary.
///
/// Raw ICMP sockets need privileges, the system binary already has them.
#[derive(Debug, Clone)]
pub struct SystemPing {
    timeout: Duration,
}

impl SystemPing {
    /// Create a probe that waits `timeout` for a reply.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn command(&self, host: &str) -> Command {
        let mut cmd = Command::new("ping");
        let secs = self.timeout.as_secs().max(1);
        if cfg!(windows) {
            cmd.args(["-n", "1", "-w"])
                .arg((self.timeout.as_millis().max(1)).to_string());
        } else if cfg!(target_os = "macos") {
            cmd.args(["-c", "1", "-t"]).arg(secs.to_string());
        } else {
            cmd.args(["-c", "1", "-W"]).arg(secs.to_string());
        }
        cmd.arg(host);
        cmd
    }
}

impl Default for SystemPing {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl GatewayProbe for SystemPing {
    fn ping(&self, host: &str) -> bool {
        if !is_probeable(host) {
            tracing::debug!("Refusing to probe {:?}", host);
            return false;
        }
        let status = self
            .command(host)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::debug!("Failed to run ping: {}", e);
                false
            }
        }
    }
}

/// TCP connect to a fixed port, for gateways that drop ICMP.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    /// Create a probe connecting to `port`.
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }
}

impl GatewayProbe for TcpProbe {
    fn ping(&self, host: &str) -> bool {
        if !is_probeable(host) {
            return false;
        }
        let Ok(addrs) = (host, self.port).to_socket_addrs() else {
            return false;
        };
        addrs
            .into_iter()
            .any(|addr| TcpStream::connect_timeout(&addr, self.timeout).is_ok())
    }
}

/// Hosts passed to a probe must look like a hostname or address.
fn is_probeable(host: &str) -> bool {
    !host.is_empty()
        && !host.starts_with('-')
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '_'))
}
