//! HTTP(S) route dispatching for the agent endpoint.
//!
//! The gateway never owns a socket. It registers a [`RouteHandler`] on a
//! [`RouteDispatcher`] and asks it to start and stop. [`HttpsDispatcher`] is
//! the bundled implementation: it binds with `tiny_http`, optionally wrapped
//! in rustls, polls for requests on a background thread and serves each
//! request on its own thread.

mod errors;
mod https;
mod route;
#[cfg(test)]
mod test_utils;

pub use self::errors::TransportError;
pub use self::https::{HttpsDispatcher, TlsMaterial};
pub use self::route::{IncomingRequest, RouteDispatcher, RouteHandler, RouteResponse};
#[cfg(test)]
pub(crate) use self::test_utils::{RecordingRouteDispatcher, RouteEvent, request};

const TRANSPORT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::transport");
