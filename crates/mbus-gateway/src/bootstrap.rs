//! Agent bootstrap orchestration.

use std::net::SocketAddr;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;

use mbus_config::{Config, ConfigValidationError};

use crate::dispatch::CommandHandler;
use crate::gateway::{Gateway, GatewayError};
use crate::health::HealthReporter;
use crate::process::{RunError, ShutdownSignal};
use crate::telemetry::{self, TelemetryError, TelemetryHandle};
use crate::transport::{HttpsDispatcher, TlsMaterial, TransportError};

/// Abstracts configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the gateway configuration.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`Config::load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader returning a configuration resolved elsewhere.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Wraps an already resolved configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Configuration loaded but is inconsistent.
    #[error("invalid configuration: {source}")]
    Validation {
        /// Violated constraint.
        #[source]
        source: ConfigValidationError,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
    /// TLS material could not be read.
    #[error("failed to prepare TLS material: {source}")]
    Tls {
        /// Underlying transport error.
        #[source]
        source: TransportError,
    },
}

/// A bootstrapped agent, ready to serve.
pub struct Agent {
    config: Config,
    gateway: Gateway<HttpsDispatcher>,
    telemetry: TelemetryHandle,
    reporter: Arc<dyn HealthReporter>,
}

impl Agent {
    /// Accessor for the resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Logging settings in force for the process.
    #[must_use]
    pub const fn telemetry(&self) -> &TelemetryHandle {
        &self.telemetry
    }

    /// Borrows the gateway.
    #[must_use]
    pub const fn gateway(&self) -> &Gateway<HttpsDispatcher> {
        &self.gateway
    }

    /// Address the listener is bound to while running.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.gateway.route_dispatcher().local_addr()
    }

    /// Starts serving `handler`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Start`] when the listener cannot start.
    pub fn start<H>(&mut self, handler: H) -> Result<(), GatewayError>
    where
        H: CommandHandler,
    {
        match self.gateway.run(handler) {
            Ok(()) => {
                self.reporter.gateway_started(&self.config);
                Ok(())
            }
            Err(error) => {
                self.reporter.gateway_failed(&error);
                Err(error)
            }
        }
    }

    /// Stops serving. Stopping an agent that never started is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Stop`] when the listener thread panicked.
    pub fn stop(&mut self) -> Result<(), GatewayError> {
        match self.gateway.stop() {
            Ok(()) => {
                self.reporter.gateway_stopped();
                Ok(())
            }
            Err(error) => {
                self.reporter.gateway_failed(&error);
                Err(error)
            }
        }
    }

    /// Serves `handler` until `shutdown` fires, then stops.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] when start-up, waiting or stopping fails. The
    /// gateway is stopped even when waiting fails.
    pub fn serve<H, S>(mut self, handler: H, shutdown: &S) -> Result<(), RunError>
    where
        H: CommandHandler,
        S: ShutdownSignal + ?Sized,
    {
        self.start(handler)?;
        let waited = shutdown.wait();
        self.stop()?;
        waited.map_err(RunError::from)
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Agent")
            .field("config", &self.config)
            .field("gateway", &self.gateway)
            .finish_non_exhaustive()
    }
}

/// Bootstraps the agent using the supplied collaborators.
///
/// # Errors
///
/// Returns [`BootstrapError`] when configuration, telemetry or TLS material
/// cannot be prepared. Every failure is also passed to `reporter`.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
) -> Result<Agent, BootstrapError> {
    reporter.bootstrap_starting();
    match prepare(loader) {
        Ok((config, gateway, telemetry)) => {
            reporter.bootstrap_succeeded(&config);
            Ok(Agent {
                config,
                gateway,
                telemetry,
                reporter,
            })
        }
        Err(error) => {
            reporter.bootstrap_failed(&error);
            Err(error)
        }
    }
}

fn prepare(
    loader: &dyn ConfigLoader,
) -> Result<(Config, Gateway<HttpsDispatcher>, TelemetryHandle), BootstrapError> {
    let config = loader
        .load()
        .map_err(|source| BootstrapError::Configuration { source })?;
    config
        .validate()
        .map_err(|source| BootstrapError::Validation { source })?;
    let telemetry =
        telemetry::initialise(&config).map_err(|source| BootstrapError::Telemetry { source })?;
    let tls = config
        .tls_paths()
        .map(TlsMaterial::load)
        .transpose()
        .map_err(|source| BootstrapError::Tls { source })?;

    let dispatcher = HttpsDispatcher::new(config.endpoint().authority(), tls);
    let gateway = Gateway::from_config(&config, dispatcher);
    Ok((config, gateway, telemetry))
}
