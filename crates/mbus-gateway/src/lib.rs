//! Authenticated command channel for the agent.
//!
//! A controller reaches the agent by posting JSON command envelopes to
//! `/agent` with HTTP Basic credentials taken from the agent's mbus URL. The
//! crate is split along the request path:
//!
//! - [`auth`] checks the `Authorization` header in constant time;
//! - [`envelope`] decodes requests and encodes results;
//! - [`dispatch`] runs the caller's [`CommandHandler`] and contains its
//!   failures, panics included;
//! - [`gateway`] ties these together behind a single route;
//! - [`transport`] provides the `tiny_http` listener the route is mounted on.
//!
//! [`bootstrap_with`] assembles the pieces from configuration and
//! [`run_agent`] serves the bundled [`PingHandler`] until a termination
//! signal arrives.

pub mod auth;
mod bootstrap;
pub mod dispatch;
pub mod envelope;
pub mod gateway;
mod health;
pub mod notify;
mod ping;
mod process;
mod telemetry;
pub mod transport;
mod unwind;

pub use auth::CredentialVerifier;
pub use bootstrap::{
    Agent, BootstrapError, ConfigLoader, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
};
pub use dispatch::{CommandHandler, Dispatcher};
pub use envelope::{CommandFailure, CommandRequest, CommandResult, DecodeError, FailureKind};
pub use gateway::{AGENT_PATH, Gateway, GatewayError};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use notify::{NoopStatusNotifier, NotifyError, StatusNotifier};
pub use ping::PingHandler;
pub use process::{RunError, ShutdownError, ShutdownSignal, SystemShutdownSignal, run_agent};
pub use telemetry::{TelemetryError, TelemetryHandle};

#[cfg(test)]
mod tests;
