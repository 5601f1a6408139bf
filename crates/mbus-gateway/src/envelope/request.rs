//! Request envelope decoding.

use serde::Deserialize;
use serde_json::Value;

use super::errors::DecodeError;

/// A decoded command addressed to the agent.
///
/// Only constructed by [`decode`], so holding one means the body was valid.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest {
    method: String,
    arguments: Vec<Value>,
    reply_to: Option<String>,
    payload: Vec<u8>,
}

impl CommandRequest {
    /// Command name, trimmed.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Positional arguments, forwarded verbatim.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Reply subject supplied by the controller, if any.
    #[must_use]
    pub fn reply_to(&self) -> Option<&str> {
        self.reply_to.as_deref()
    }

    /// The raw body the request was decoded from.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

#[derive(Deserialize)]
struct WireRequest {
    method: String,
    arguments: Vec<Value>,
    #[serde(default)]
    reply_to: Option<String>,
}

/// JSON insignificant whitespace. Unlike [`u8::is_ascii_whitespace`] this
/// excludes form feed.
const fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Decodes a request body.
///
/// # Errors
///
/// Returns [`DecodeError`] when the body is empty, is not JSON, lacks a string
/// `method` or an array `arguments`, or names a blank method.
pub fn decode(bytes: &[u8]) -> Result<CommandRequest, DecodeError> {
    if bytes.iter().all(|byte| is_json_whitespace(*byte)) {
        return Err(DecodeError::Empty);
    }

    let wire: WireRequest = serde_json::from_slice(bytes).map_err(DecodeError::from_json_error)?;
    let method = wire.method.trim();
    if method.is_empty() {
        return Err(DecodeError::invalid_structure("method field is empty"));
    }

    Ok(CommandRequest {
        method: method.to_owned(),
        arguments: wire.arguments,
        reply_to: wire.reply_to,
        payload: bytes.to_vec(),
    })
}
