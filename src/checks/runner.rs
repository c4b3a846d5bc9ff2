//! Ordered execution of the check steps.
//!
//! [`run_all`] drives any [`EipChecks`] implementation through the fixed
//! step order and stops at the first failure. The real implementation is
//! [`ConfigChecker`](super::ConfigChecker); tests drive fakes.

use std::fmt;

use crate::error::Result;

/// The five check steps, as seen by [`run_all`].
pub trait EipChecks {
    /// Make sure a local EIP config exists, writing defaults if it does not.
    fn check_default_eipconfig(&mut self) -> Result<()>;

    /// Make sure the EIP config names a default provider.
    fn check_is_there_default_provider(&mut self) -> Result<bool>;

    /// Make sure the default provider's definition is cached.
    fn fetch_definition(&mut self) -> Result<()>;

    /// Make sure the default provider's service document is cached.
    fn fetch_eip_service_config(&mut self) -> Result<()>;

    /// Final completeness gate.
    fn check_complete_eip_config(&mut self) -> Result<()>;
}

/// One step of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStep {
    DefaultEipConfig,
    DefaultProvider,
    Definition,
    ServiceConfig,
    CompleteConfig,
}

impl CheckStep {
    /// Steps in the order [`run_all`] executes them.
    pub const ORDER: [CheckStep; 5] = [
        CheckStep::DefaultEipConfig,
        CheckStep::DefaultProvider,
        CheckStep::Definition,
        CheckStep::ServiceConfig,
        CheckStep::CompleteConfig,
    ];

    /// Name of the operation behind this step.
    pub fn name(self) -> &'static str {
        match self {
            Self::DefaultEipConfig => "check_default_eipconfig",
            Self::DefaultProvider => "check_is_there_default_provider",
            Self::Definition => "fetch_definition",
            Self::ServiceConfig => "fetch_eip_service_config",
            Self::CompleteConfig => "check_complete_eip_config",
        }
    }

    /// The precondition this step establishes, for user-facing output.
    pub fn precondition(self) -> &'static str {
        match self {
            Self::DefaultEipConfig => "local EIP configuration exists",
            Self::DefaultProvider => "a default provider is selected",
            Self::Definition => "provider definition is available",
            Self::ServiceConfig => "gateway list is available",
            Self::CompleteConfig => "EIP configuration is complete",
        }
    }

    /// State reached once this step succeeds.
    pub fn reached(self) -> CheckState {
        match self {
            Self::DefaultEipConfig => CheckState::HasLocalConfig,
            Self::DefaultProvider => CheckState::HasDefaultProvider,
            Self::Definition => CheckState::HasDefinition,
            Self::ServiceConfig => CheckState::HasServiceConfig,
            Self::CompleteConfig => CheckState::Complete,
        }
    }

    fn run<C: EipChecks + ?Sized>(self, checks: &mut C) -> Result<()> {
        match self {
            Self::DefaultEipConfig => checks.check_default_eipconfig(),
            Self::DefaultProvider => checks.check_is_there_default_provider().map(|_| ()),
            Self::Definition => checks.fetch_definition(),
            Self::ServiceConfig => checks.fetch_eip_service_config(),
            Self::CompleteConfig => checks.check_complete_eip_config(),
        }
    }
}

impl fmt::Display for CheckStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Progress of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unverified,
    HasLocalConfig,
    HasDefaultProvider,
    HasDefinition,
    HasServiceConfig,
    Complete,
    /// The run stopped at this step.
    Failed(CheckStep),
}

impl CheckState {
    /// Whether every step passed.
    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unverified => f.write_str("unverified"),
            Self::HasLocalConfig => f.write_str("has local config"),
            Self::HasDefaultProvider => f.write_str("has default provider"),
            Self::HasDefinition => f.write_str("has provider definition"),
            Self::HasServiceConfig => f.write_str("has service config"),
            Self::Complete => f.write_str("complete"),
            Self::Failed(step) => write!(f, "failed at {}", step),
        }
    }
}

/// Run every step in order, stopping at the first error.
///
/// The error is returned unchanged.
pub fn run_all<C: EipChecks + ?Sized>(checks: &mut C) -> Result<CheckState> {
    run_steps(checks).map_err(|(_, err)| err)
}

/// Like [`run_all`], but also reports which step failed.
pub(crate) fn run_steps<C: EipChecks + ?Sized>(
    checks: &mut C,
) -> std::result::Result<CheckState, (CheckStep, crate::error::EipError)> {
    let mut state = CheckState::Unverified;
    for step in CheckStep::ORDER {
        tracing::debug!("Running {}", step);
        if let Err(err) = step.run(checks) {
            tracing::warn!("{} failed: {}", step, err);
            return Err((step, err));
        }
        state = step.reached();
    }
    Ok(state)
}
