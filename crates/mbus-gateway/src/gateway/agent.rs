//! The `/agent` route: authentication, body intake and command dispatch.

use std::io::Read;

use tracing::{debug, warn};

use crate::auth::CredentialVerifier;
use crate::dispatch::{CommandHandler, Dispatcher};
use crate::envelope::{CommandResult, FailureKind, decode, encode};
use crate::transport::{IncomingRequest, RouteHandler, RouteResponse};

use super::GATEWAY_TARGET;
use super::errors::BodyReadError;

pub(crate) const AUTHENTICATE_CHALLENGE: &str = r#"Basic realm="""#;

/// Route handler registered on the dispatcher for the agent path.
#[derive(Debug)]
pub(crate) struct AgentRoute<H> {
    verifier: CredentialVerifier,
    dispatcher: Dispatcher<H>,
    max_request_bytes: usize,
}

impl<H> AgentRoute<H>
where
    H: CommandHandler,
{
    pub(crate) const fn new(verifier: CredentialVerifier, handler: H, max_request_bytes: usize) -> Self {
        Self {
            verifier,
            dispatcher: Dispatcher::new(handler),
            max_request_bytes,
        }
    }
}

impl<H> RouteHandler for AgentRoute<H>
where
    H: CommandHandler,
{
    fn serve(&self, mut request: IncomingRequest<'_>) -> RouteResponse {
        if request.method() != "POST" {
            debug!(
                target: GATEWAY_TARGET,
                method = request.method(),
                "rejecting non-POST request"
            );
            return RouteResponse::empty(404);
        }

        if !self.verifier.is_authorized(request.header("Authorization")) {
            debug!(target: GATEWAY_TARGET, "rejecting unauthenticated request");
            return RouteResponse::empty(401).with_header("WWW-Authenticate", AUTHENTICATE_CHALLENGE);
        }

        let body = match read_body(request.body(), self.max_request_bytes) {
            Ok(body) => body,
            Err(error) => {
                debug!(target: GATEWAY_TARGET, error = %error, "rejecting unreadable body");
                return RouteResponse::empty(400);
            }
        };

        let encoded = match decode(&body) {
            Ok(command) => encode(&self.dispatcher.invoke(&command)),
            Err(error) => {
                warn!(
                    target: GATEWAY_TARGET,
                    error = %error,
                    bytes = body.len(),
                    "request envelope rejected"
                );
                encode(&CommandResult::<()>::failure(
                    FailureKind::Decode,
                    error.to_string(),
                ))
            }
        };
        RouteResponse::json(encoded)
    }
}

/// Reads at most `limit` bytes, failing when the body is longer.
fn read_body(body: &mut dyn Read, limit: usize) -> Result<Vec<u8>, BodyReadError> {
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut buffer = Vec::new();
    Read::take(body, cap).read_to_end(&mut buffer)?;
    if buffer.len() > limit {
        return Err(BodyReadError::TooLarge { limit });
    }
    Ok(buffer)
}
