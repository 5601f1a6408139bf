//! Command dispatch with fault isolation.
//!
//! The [`Dispatcher`] owns the caller-supplied [`CommandHandler`] and is the
//! boundary at which handler misbehaviour stops. Errors the handler reports
//! pass through as structured failures; panics are caught and converted to
//! `panic` failures so a single bad command cannot take the listener down.

mod dispatcher;
mod handler;

pub use self::dispatcher::Dispatcher;
pub use self::handler::CommandHandler;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");
