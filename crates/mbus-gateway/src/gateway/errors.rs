//! Error types for the request gateway.

use std::io;

use thiserror::Error;

use crate::transport::TransportError;

/// Lifecycle failures surfaced by [`super::Gateway`].
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The route dispatcher refused to start.
    #[error("starting https handler: {source}")]
    Start {
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },
    /// The route dispatcher failed while stopping.
    #[error("stopping https handler: {source}")]
    Stop {
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },
}

/// Request bodies that could not be read in full.
#[derive(Debug, Error)]
pub(crate) enum BodyReadError {
    #[error("failed to read request body: {0}")]
    Io(#[from] io::Error),
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },
}
