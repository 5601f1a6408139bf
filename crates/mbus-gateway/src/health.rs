//! Structured health reporting for agent lifecycle events.

use std::sync::Arc;

use mbus_config::Config;

use crate::bootstrap::BootstrapError;
use crate::gateway::GatewayError;

const HEALTH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::health");

/// Observer for lifecycle events, surfaced to telemetry sinks.
pub trait HealthReporter: Send + Sync {
    /// Invoked before configuration loading begins.
    fn bootstrap_starting(&self);

    /// Invoked after bootstrap completes successfully.
    fn bootstrap_succeeded(&self, config: &Config);

    /// Invoked when bootstrap fails.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// Invoked once the gateway accepts requests.
    fn gateway_started(&self, config: &Config);

    /// Invoked when the gateway could not start or stop cleanly.
    fn gateway_failed(&self, error: &GatewayError);

    /// Invoked after the gateway stopped.
    fn gateway_stopped(&self);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter + ?Sized,
{
    fn bootstrap_starting(&self) {
        (**self).bootstrap_starting();
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        (**self).bootstrap_succeeded(config);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn gateway_started(&self, config: &Config) {
        (**self).gateway_started(config);
    }

    fn gateway_failed(&self, error: &GatewayError) {
        (**self).gateway_failed(error);
    }

    fn gateway_stopped(&self) {
        (**self).gateway_stopped();
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn bootstrap_starting(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_starting",
            "starting agent bootstrap"
        );
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_succeeded",
            endpoint = %config.endpoint(),
            tls = config.tls_paths().is_some(),
            log_filter = %config.log_filter(),
            log_format = %config.log_format(),
            "agent bootstrap completed"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "bootstrap_failed",
            error = %error,
            "agent bootstrap failed"
        );
    }

    fn gateway_started(&self, config: &Config) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "gateway_started",
            authority = %config.endpoint().authority(),
            "agent gateway accepting requests"
        );
    }

    fn gateway_failed(&self, error: &GatewayError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "gateway_failed",
            error = %error,
            "agent gateway failed"
        );
    }

    fn gateway_stopped(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "gateway_stopped",
            "agent gateway stopped"
        );
    }
}
