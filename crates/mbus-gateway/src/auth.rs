//! Basic authentication for the agent endpoint.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use mbus_config::Credentials;

/// Checks `Authorization` header values against the configured credentials.
///
/// The expected header is computed once at construction. Comparison runs in
/// time independent of where the first differing byte sits.
#[derive(Clone)]
pub struct CredentialVerifier {
    expected: String,
}

impl CredentialVerifier {
    /// Builds a verifier expecting `Basic base64(username:secret)`.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        let pair = format!("{}:{}", credentials.username(), credentials.secret());
        Self {
            expected: format!("Basic {}", STANDARD.encode(pair)),
        }
    }

    /// Returns `true` only when `presented` matches the expected header exactly.
    #[must_use]
    pub fn is_authorized(&self, presented: Option<&str>) -> bool {
        presented.is_some_and(|value| bytes_equal(value.as_bytes(), self.expected.as_bytes()))
    }
}

impl fmt::Debug for CredentialVerifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CredentialVerifier")
            .field("expected", &"<redacted>")
            .finish()
    }
}

/// Compares two byte strings without short-circuiting on the first mismatch.
fn bytes_equal(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let difference = left
        .iter()
        .zip(right)
        .fold(0_u8, |acc, (lhs, rhs)| acc | (lhs ^ rhs));
    difference == 0
}
