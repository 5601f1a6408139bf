//! Route registration abstractions shared by the gateway and its transport.

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use super::TransportError;

/// A single inbound HTTP request, borrowed for the duration of one call.
pub struct IncomingRequest<'a> {
    method: String,
    headers: Vec<(String, String)>,
    body: &'a mut dyn Read,
}

impl<'a> IncomingRequest<'a> {
    /// Wraps request parts captured by the transport.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        headers: Vec<(String, String)>,
        body: &'a mut dyn Read,
    ) -> Self {
        Self {
            method: method.into(),
            headers,
            body,
        }
    }

    /// HTTP method as sent by the client.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// First value of the named header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Request body stream.
    pub fn body(&mut self) -> &mut dyn Read {
        &mut *self.body
    }
}

impl fmt::Debug for IncomingRequest<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self.headers.iter().map(|(name, _)| name.as_str()).collect();
        formatter
            .debug_struct("IncomingRequest")
            .field("method", &self.method)
            .field("headers", &header_names)
            .finish_non_exhaustive()
    }
}

/// Status, headers and body written back by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl RouteResponse {
    /// Response with no body.
    #[must_use]
    pub const fn empty(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// `200 OK` carrying a JSON body.
    #[must_use]
    pub fn json(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// First value of the named header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Response body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Splits the response into its parts.
    #[must_use]
    pub fn into_parts(self) -> (u16, Vec<(String, String)>, Vec<u8>) {
        (self.status, self.headers, self.body)
    }
}

/// Serves requests arriving on a registered path.
///
/// Called concurrently from request threads. Implementations should avoid
/// panicking.
pub trait RouteHandler: Send + Sync + 'static {
    /// Produces the response for one request.
    fn serve(&self, request: IncomingRequest<'_>) -> RouteResponse;
}

/// The route table the gateway registers itself on.
pub trait RouteDispatcher: Send {
    /// Registers `handler` for requests whose path equals `path`.
    fn add_route(&mut self, path: &str, handler: Arc<dyn RouteHandler>);

    /// Starts accepting requests.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the listener cannot be bound or the
    /// dispatcher is already running.
    fn start(&mut self) -> Result<(), TransportError>;

    /// Stops accepting requests. Calling `stop` on a stopped dispatcher is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ThreadPanic`] when the listener thread
    /// panicked.
    fn stop(&mut self) -> Result<(), TransportError>;
}
