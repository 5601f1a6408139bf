//! Log output settings for the agent.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How the agent renders log events on stderr.
///
/// The agent runs under a process supervisor that ships stderr to the
/// director, so JSON is the default and `compact` (alias `text`) is meant for
/// operators reading the stream directly.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event, fields flattened.
    #[default]
    Json,
    /// Single-line text.
    #[serde(alias = "text")]
    #[strum(to_string = "compact", serialize = "text")]
    Compact,
}

impl LogFormat {
    /// Whether events are emitted as machine-readable records.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Error raised when a [`LogFormat`] name is not recognised.
pub type LogFormatParseError = strum::ParseError;

/// Dependencies whose chatter is capped at `warn` by the default filter.
pub const QUIETED_DEPENDENCIES: &[&str] = &["tiny_http", "rustls"];

/// Builds a filter expression that logs at `level` while capping
/// [`QUIETED_DEPENDENCIES`] at `warn`.
#[must_use]
pub fn quiet_dependencies(level: &str) -> String {
    QUIETED_DEPENDENCIES
        .iter()
        .fold(level.to_owned(), |filter, target| format!("{filter},{target}=warn"))
}
