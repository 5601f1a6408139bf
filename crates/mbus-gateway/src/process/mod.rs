//! Process entry point: bootstrap, serve, wait for a signal, stop.

mod shutdown;

use std::sync::Arc;

use thiserror::Error;

use crate::bootstrap::{BootstrapError, SystemConfigLoader, bootstrap_with};
use crate::gateway::GatewayError;
use crate::health::StructuredHealthReporter;
use crate::ping::PingHandler;

pub use self::shutdown::{ShutdownError, ShutdownSignal, SystemShutdownSignal};

pub(crate) const PROCESS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::process");

/// Failures that end the agent process.
#[derive(Debug, Error)]
pub enum RunError {
    /// Bootstrap did not produce a runnable agent.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    /// The gateway failed to start or stop.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// Waiting for shutdown failed.
    #[error(transparent)]
    Shutdown(#[from] ShutdownError),
}

/// Runs the agent with production collaborators until a termination signal.
///
/// # Errors
///
/// Returns [`RunError`] when bootstrap, start-up or shutdown fails.
pub fn run_agent() -> Result<(), RunError> {
    let reporter = Arc::new(StructuredHealthReporter::new());
    let agent = bootstrap_with(&SystemConfigLoader, reporter)?;
    agent.serve(PingHandler, &SystemShutdownSignal)
}
