//! Show command implementation.
//!
//! The `leap-eip show` command prints the effective EIP configuration.

use crate::checks::FetchPolicy;
use crate::cli::args::ShowArgs;
use crate::error::{EipError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{CheckContext, Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand<'a> {
    context: &'a CheckContext,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(context: &'a CheckContext, args: ShowArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.context.paths.eip_config_file();
        if self.args.path {
            ui.message(&path.display().to_string());
            return Ok(CommandResult::success());
        }

        let mut checker = self.context.checker(FetchPolicy::Never)?;
        let config = checker.eipconfig()?;
        let rendered = serde_json::to_string_pretty(&config.to_value()?)
            .map_err(|e| EipError::Other(e.into()))?;

        if !path.exists() {
            ui.warning(&format!(
                "{} does not exist yet; showing built-in defaults",
                path.display()
            ));
        }
        ui.message(&rendered);
        Ok(CommandResult::success())
    }
}
