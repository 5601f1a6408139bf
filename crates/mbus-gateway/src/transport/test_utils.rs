//! Test helpers for the transport module.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use super::{IncomingRequest, RouteDispatcher, RouteHandler, RouteResponse, TransportError};

/// Lifecycle calls observed by [`RecordingRouteDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RouteEvent {
    AddRoute(String),
    Start,
    Stop,
}

#[derive(Default)]
struct Recorded {
    events: Vec<RouteEvent>,
    routes: Vec<(String, Arc<dyn RouteHandler>)>,
}

/// Route dispatcher double that records calls and never opens a socket.
#[derive(Clone, Default)]
pub(crate) struct RecordingRouteDispatcher {
    recorded: Arc<Mutex<Recorded>>,
    fail_start: bool,
}

impl RecordingRouteDispatcher {
    pub(crate) fn failing_start() -> Self {
        Self {
            fail_start: true,
            ..Self::default()
        }
    }

    pub(crate) fn events(&self) -> Vec<RouteEvent> {
        self.lock().events.clone()
    }

    /// Returns the handler registered for `path`.
    pub(crate) fn route(&self, path: &str) -> Option<Arc<dyn RouteHandler>> {
        self.lock()
            .routes
            .iter()
            .find(|(registered, _)| registered == path)
            .map(|(_, handler)| Arc::clone(handler))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RouteDispatcher for RecordingRouteDispatcher {
    fn add_route(&mut self, path: &str, handler: Arc<dyn RouteHandler>) {
        let mut recorded = self.lock();
        recorded.events.push(RouteEvent::AddRoute(path.to_owned()));
        recorded.routes.push((path.to_owned(), handler));
    }

    fn start(&mut self) -> Result<(), TransportError> {
        self.lock().events.push(RouteEvent::Start);
        if self.fail_start {
            return Err(TransportError::Bind {
                authority: "127.0.0.1:6868".to_owned(),
                message: "address in use".to_owned(),
            });
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), TransportError> {
        self.lock().events.push(RouteEvent::Stop);
        Ok(())
    }
}

/// Serves an in-memory request through `handler`.
pub(crate) fn request(
    handler: &dyn RouteHandler,
    method: &str,
    headers: &[(&str, &str)],
    body: &[u8],
) -> RouteResponse {
    let mut body = io::Cursor::new(body.to_vec());
    let headers = headers
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect();
    handler.serve(IncomingRequest::new(method, headers, &mut body))
}
