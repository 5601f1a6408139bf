//! Error types for route dispatcher operations.

use std::io;

use thiserror::Error;

/// Errors surfaced while starting or stopping a route dispatcher.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A certificate or key file could not be read.
    #[error("failed to read TLS material from {path}: {source}")]
    TlsMaterial {
        /// File that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The key PEM holds neither a PKCS#8 nor a PKCS#1 RSA private key.
    #[error("no PKCS#8 or RSA private key found in {origin}")]
    UnsupportedPrivateKey {
        /// Key file path, or a description of in-memory material.
        origin: String,
    },
    /// The listener socket could not be bound.
    #[error("failed to bind listener at {authority}: {message}")]
    Bind {
        /// `host:port` the listener tried to bind.
        authority: String,
        /// Error reported by the listener.
        message: String,
    },
    /// `start` was called on a running dispatcher.
    #[error("route dispatcher is already started")]
    AlreadyStarted,
    /// `start` was called before any route was added.
    #[error("no routes registered before start")]
    NoRoutes,
    /// The accept loop thread panicked before it could be joined.
    #[error("listener thread panicked")]
    ThreadPanic,
}
