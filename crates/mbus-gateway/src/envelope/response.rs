//! Response envelope types and encoding.

use std::fmt;

use serde::Serialize;
use strum::Display;
use tracing::warn;

use crate::unwind;

use super::ENVELOPE_TARGET;

/// Served when even the fallback failure cannot be serialised.
const ENCODE_FALLBACK: &[u8] =
    br#"{"exception":{"kind":"encode","message":"failed to serialize command result"}}"#;

/// Category of an application-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// Request body could not be decoded.
    Decode,
    /// Handler does not recognise the requested method.
    UnknownMethod,
    /// Handler reported an error.
    Handler,
    /// Handler terminated abnormally.
    Panic,
    /// Handler value could not be serialised.
    Encode,
}

/// Structured description of a failed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandFailure {
    kind: FailureKind,
    message: String,
}

impl CommandFailure {
    /// Creates a failure descriptor.
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Human-readable detail.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.kind, self.message)
    }
}

/// Outcome of a command: a value or a failure, never both.
///
/// Serialises as `{"value": ...}` or `{"exception": {"kind", "message"}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandResult<T> {
    /// Successful result value.
    Value(T),
    /// Failure descriptor.
    #[serde(rename = "exception")]
    Failure(CommandFailure),
}

impl<T> CommandResult<T> {
    /// Wraps a successful value.
    #[must_use]
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Builds a failure of the given kind.
    #[must_use]
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure(CommandFailure::new(kind, message))
    }

    /// Builds the failure handlers return for methods they do not implement.
    #[must_use]
    pub fn unknown_method(method: &str) -> Self {
        Self::failure(FailureKind::UnknownMethod, format!("unknown method: {method}"))
    }

    /// Returns `true` for [`CommandResult::Value`].
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns the failure descriptor, if any.
    #[must_use]
    pub const fn failure_ref(&self) -> Option<&CommandFailure> {
        match self {
            Self::Value(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

impl<T, E> From<Result<T, E>> for CommandResult<T>
where
    E: fmt::Display,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::failure(FailureKind::Handler, error.to_string()),
        }
    }
}

/// Encodes a command result into a response body.
///
/// Never returns an empty body: when the value cannot be serialised, or its
/// `Serialize` implementation panics, an `encode` failure is returned in its
/// place.
#[must_use]
pub fn encode<T: Serialize>(result: &CommandResult<T>) -> Vec<u8> {
    let message = match unwind::contain(|| serde_json::to_vec(result)) {
        Ok(Ok(bytes)) => return bytes,
        Ok(Err(error)) => format!("failed to serialize command result: {error}"),
        Err(detail) => format!("command result serializer panicked: {detail}"),
    };
    warn!(target: ENVELOPE_TARGET, message = %message, "command result not encodable");
    encode_failure(&CommandFailure::new(FailureKind::Encode, message))
}

fn encode_failure(failure: &CommandFailure) -> Vec<u8> {
    serde_json::to_vec(&CommandResult::<()>::Failure(failure.clone()))
        .unwrap_or_else(|_| ENCODE_FALLBACK.to_vec())
}
