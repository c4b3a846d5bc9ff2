//! Check command implementation.
//!
//! The `leap-eip check` command runs every configuration check and reports
//! which precondition failed, if any.

use crate::checks::{CheckState, CheckStep, ConfigChecker, FetchPolicy};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{CheckContext, Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    context: &'a CheckContext,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(context: &'a CheckContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Fetch policy selected by the flags.
    pub fn fetch_policy(&self) -> FetchPolicy {
        if self.args.refresh {
            FetchPolicy::Always
        } else if self.args.offline {
            FetchPolicy::Never
        } else {
            FetchPolicy::IfMissing
        }
    }

    /// Run the checks on `checker` and report to `ui`.
    pub fn run(&self, checker: &mut ConfigChecker, ui: &mut dyn UserInterface) -> CommandResult {
        ui.show_header("EIP configuration check");

        let outcome = checker.run_all();
        let failed_at = match checker.state() {
            CheckState::Failed(step) => Some(step),
            _ => None,
        };
        let domain = checker
            .eipconfig()
            .ok()
            .and_then(|config| config.provider_domain())
            .map(str::to_string);

        for step in CheckStep::ORDER {
            if Some(step) == failed_at {
                break;
            }
            ui.success(step.precondition());
            if let Some(detail) = step_detail(checker, step, domain.as_deref()) {
                ui.detail(&detail);
            }
        }

        match outcome {
            Ok(_) => {
                if let Some(domain) = &domain {
                    let name = checker
                        .definition()
                        .and_then(|def| def.name("en"))
                        .unwrap_or(domain.as_str());
                    if name == domain.as_str() {
                        ui.message(&format!("Provider: {}", domain));
                    } else {
                        ui.message(&format!("Provider: {} ({})", name, domain));
                    }
                }
                if let Some(service) = checker.service_config() {
                    ui.message(&format!("Gateways: {}", service.gateways.len()));
                }
                ui.success("Configuration complete");
                CommandResult::success()
            }
            Err(err) => {
                let step = failed_at.map_or("check", CheckStep::name);
                let precondition = failed_at.map_or("configuration check", CheckStep::precondition);
                ui.error(&format!("Precondition failed: {} ({}): {}", precondition, step, err));
                if err.is_retryable() {
                    ui.warning("This looks temporary. Run the check again later.");
                }
                CommandResult::failure(1)
            }
        }
    }
}

/// Where a passed step read or wrote its document.
fn step_detail(checker: &ConfigChecker, step: CheckStep, domain: Option<&str>) -> Option<String> {
    let paths = checker.paths();
    match (step, domain) {
        (CheckStep::DefaultEipConfig, _) => {
            Some(format!("config: {}", paths.eip_config_file().display()))
        }
        (CheckStep::DefaultProvider, Some(domain)) => Some(format!("provider: {}", domain)),
        (CheckStep::Definition, Some(domain)) => Some(format!(
            "{} <- {}",
            paths.definition_file(domain).display(),
            checker.definition_url(domain)
        )),
        (CheckStep::ServiceConfig, Some(domain)) => Some(format!(
            "{} <- {}",
            paths.service_file(domain).display(),
            checker.service_url(domain)
        )),
        _ => None,
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut checker = self.context.checker(self.fetch_policy())?;
        Ok(self.run(&mut checker, ui))
    }
}
