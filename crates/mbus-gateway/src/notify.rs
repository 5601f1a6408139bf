//! Out-of-band status notifications.
//!
//! The agent may push status to a health manager independently of request
//! handling. This transport has no such channel, so the gateway ships with
//! [`NoopStatusNotifier`] and accepts any other [`StatusNotifier`] at
//! construction.

use serde_json::Value;
use thiserror::Error;
use tracing::trace;

const NOTIFY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::notify");

/// Errors reported by a status notifier.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notifier could not deliver the payload.
    #[error("failed to deliver {topic} notification: {message}")]
    Delivery {
        /// Topic the payload was addressed to.
        topic: String,
        /// Transport-specific description.
        message: String,
    },
}

/// Sends status payloads to a health manager.
pub trait StatusNotifier: Send + Sync {
    /// Delivers `payload` under `topic`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] when delivery fails.
    fn send(&self, topic: &str, payload: &Value) -> Result<(), NotifyError>;
}

/// Notifier that accepts and discards every payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStatusNotifier;

impl StatusNotifier for NoopStatusNotifier {
    fn send(&self, topic: &str, _payload: &Value) -> Result<(), NotifyError> {
        trace!(target: NOTIFY_TARGET, topic, "status notification discarded");
        Ok(())
    }
}
