//! Shared doubles and helpers for the gateway test suites.

mod client;
mod config_loader;
mod handler;
mod reporter;
mod tls;

pub use client::{HttpReply, send};
pub use config_loader::{FailingConfigLoader, loopback_config, loopback_loader};
pub use handler::ScriptedHandler;
pub use reporter::{HealthEvent, RecordingHealthReporter};
pub use tls::{SelfSigned, send_tls};
