//! Test double for [`HealthReporter`] that records lifecycle events.

use std::sync::{Mutex, PoisonError};

use mbus_config::Config;

use crate::bootstrap::BootstrapError;
use crate::gateway::GatewayError;
use crate::health::HealthReporter;

/// Lifecycle events captured during a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthEvent {
    BootstrapStarting,
    BootstrapSucceeded,
    /// Bootstrap failed with the rendered error.
    BootstrapFailed(String),
    GatewayStarted,
    /// The gateway failed with the rendered error.
    GatewayFailed(String),
    GatewayStopped,
}

/// Records health events for assertions.
#[derive(Debug, Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    /// Captures a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<HealthEvent> {
        self.lock().clone()
    }

    fn record(&self, event: HealthEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<HealthEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn bootstrap_starting(&self) {
        self.record(HealthEvent::BootstrapStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(HealthEvent::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn gateway_started(&self, _config: &Config) {
        self.record(HealthEvent::GatewayStarted);
    }

    fn gateway_failed(&self, error: &GatewayError) {
        self.record(HealthEvent::GatewayFailed(error.to_string()));
    }

    fn gateway_stopped(&self) {
        self.record(HealthEvent::GatewayStopped);
    }
}
