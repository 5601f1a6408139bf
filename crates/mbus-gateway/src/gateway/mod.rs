//! The authenticated request gateway.
//!
//! [`Gateway`] registers a single route, [`AGENT_PATH`], on a
//! [`RouteDispatcher`] and drives its lifecycle. Each request on that route
//! moves through a fixed sequence:
//!
//! 1. any method other than `POST` is answered with `404`;
//! 2. a missing or wrong `Authorization` header is answered with `401` and a
//!    `WWW-Authenticate: Basic realm=""` challenge;
//! 3. a body that cannot be read, or exceeds the configured limit, is answered
//!    with `400`;
//! 4. an undecodable envelope is answered with `200` and a `decode` exception;
//! 5. otherwise the command handler runs and its encoded result is returned
//!    with `200`.
//!
//! Steps 1 to 3 never reach the command handler.

mod agent;
mod errors;

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use mbus_config::{Config, Credentials};

use crate::auth::CredentialVerifier;
use crate::dispatch::CommandHandler;
use crate::notify::{NoopStatusNotifier, NotifyError, StatusNotifier};
use crate::transport::{RouteDispatcher, TransportError};

use self::agent::AgentRoute;
pub use self::errors::GatewayError;

/// Path the controller posts commands to.
pub const AGENT_PATH: &str = "/agent";

const GATEWAY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::gateway");

/// The agent endpoint bound to a route dispatcher.
pub struct Gateway<D> {
    credentials: Credentials,
    max_request_bytes: usize,
    dispatcher: D,
    notifier: Arc<dyn StatusNotifier>,
}

impl<D> Gateway<D>
where
    D: RouteDispatcher,
{
    /// Builds a gateway that accepts `credentials` and bodies up to
    /// `max_request_bytes`.
    #[must_use]
    pub fn new(credentials: Credentials, max_request_bytes: usize, dispatcher: D) -> Self {
        Self {
            credentials,
            max_request_bytes,
            dispatcher,
            notifier: Arc::new(NoopStatusNotifier),
        }
    }

    /// Builds a gateway from the resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config, dispatcher: D) -> Self {
        Self::new(
            config.endpoint().credentials().clone(),
            config.max_request_bytes(),
            dispatcher,
        )
    }

    /// Replaces the status notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn StatusNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Registers the agent route for `handler` and starts the dispatcher.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher's [`TransportError`] unchanged.
    pub fn start<H>(&mut self, handler: H) -> Result<(), TransportError>
    where
        H: CommandHandler,
    {
        let route = AgentRoute::new(
            CredentialVerifier::new(&self.credentials),
            handler,
            self.max_request_bytes,
        );
        self.dispatcher.add_route(AGENT_PATH, Arc::new(route));
        self.dispatcher.start()?;
        info!(
            target: GATEWAY_TARGET,
            path = AGENT_PATH,
            username = self.credentials.username(),
            max_request_bytes = self.max_request_bytes,
            "agent gateway started"
        );
        Ok(())
    }

    /// Starts the gateway, attaching context to any failure.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Start`] when the dispatcher cannot start.
    pub fn run<H>(&mut self, handler: H) -> Result<(), GatewayError>
    where
        H: CommandHandler,
    {
        self.start(handler)
            .map_err(|source| GatewayError::Start { source })
    }

    /// Stops the dispatcher.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Stop`] when the dispatcher fails to stop.
    pub fn stop(&mut self) -> Result<(), GatewayError> {
        self.dispatcher
            .stop()
            .map_err(|source| GatewayError::Stop { source })?;
        info!(target: GATEWAY_TARGET, "agent gateway stopped");
        Ok(())
    }

    /// Forwards a status payload to the configured notifier.
    ///
    /// # Errors
    ///
    /// Returns the notifier's [`NotifyError`].
    pub fn send_to_health_manager(&self, topic: &str, payload: &Value) -> Result<(), NotifyError> {
        self.notifier.send(topic, payload)
    }

    /// Borrows the route dispatcher.
    #[must_use]
    pub const fn route_dispatcher(&self) -> &D {
        &self.dispatcher
    }
}

impl<D> std::fmt::Debug for Gateway<D>
where
    D: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Gateway")
            .field("credentials", &self.credentials)
            .field("max_request_bytes", &self.max_request_bytes)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
