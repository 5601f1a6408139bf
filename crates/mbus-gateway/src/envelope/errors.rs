//! Error types for request envelope decoding.

use serde_json::error::Category;
use thiserror::Error;

/// Reasons a request body could not be decoded into a
/// [`CommandRequest`](super::CommandRequest).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body was empty or whitespace only.
    #[error("empty request body")]
    Empty,

    /// Body is not well-formed JSON.
    #[error("malformed JSON: {message}")]
    Malformed {
        /// Parser description of the fault.
        message: String,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// Body is JSON but does not have the request shape.
    #[error("invalid request structure: {message}")]
    InvalidStructure {
        /// Which part of the shape is wrong.
        message: String,
        /// Parser error, absent for checks made after parsing.
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl DecodeError {
    /// Classifies a serde error as a syntax or a shape problem.
    #[must_use]
    pub fn from_json_error(source: serde_json::Error) -> Self {
        let message = source.to_string();
        match source.classify() {
            Category::Data => Self::InvalidStructure {
                message,
                source: Some(source),
            },
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed { message, source },
        }
    }

    /// Creates a shape error with a custom message.
    #[must_use]
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
            source: None,
        }
    }
}
