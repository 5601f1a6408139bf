//! Shared configuration for the agent's mbus gateway.
//!
//! Values are layered by [`ortho_config`]: built-in defaults, then a TOML file
//! (`--config-path` or `MBUS_CONFIG_PATH`), then `MBUS_*` environment
//! variables, then command-line flags.

mod defaults;
mod endpoint;
mod logging;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_REQUEST_BYTES, default_log_filter, default_log_filter_string,
    default_log_format, default_max_request_bytes,
};
pub use endpoint::{Credentials, MbusScheme, MbusUrl, MbusUrlError};
pub use logging::{LogFormat, LogFormatParseError, QUIETED_DEPENDENCIES, quiet_dependencies};

/// Resolved gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "MBUS")]
pub struct Config {
    /// Endpoint URL carrying scheme, bind authority and credentials.
    pub endpoint: MbusUrl,
    /// PEM certificate chain served for `https` endpoints.
    #[serde(default)]
    pub tls_certificate_path: Option<Utf8PathBuf>,
    /// PEM private key matching [`Config::tls_certificate_path`].
    #[serde(default)]
    pub tls_private_key_path: Option<Utf8PathBuf>,
    /// Largest accepted request body in bytes.
    #[serde(default = "default_max_request_bytes")]
    #[ortho_config(default = DEFAULT_MAX_REQUEST_BYTES)]
    pub max_request_bytes: usize,
    /// `tracing` filter expression.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Log output format.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Config {
    /// Builds a configuration for `endpoint` with every other field defaulted.
    #[must_use]
    pub fn new(endpoint: MbusUrl) -> Self {
        Self {
            endpoint,
            tls_certificate_path: None,
            tls_private_key_path: None,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }

    /// Endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &MbusUrl {
        &self.endpoint
    }

    /// Largest accepted request body in bytes.
    #[must_use]
    pub const fn max_request_bytes(&self) -> usize {
        self.max_request_bytes
    }

    /// Log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the certificate and key paths when TLS is configured.
    #[must_use]
    pub fn tls_paths(&self) -> Option<TlsPaths<'_>> {
        match (&self.tls_certificate_path, &self.tls_private_key_path) {
            (Some(certificate), Some(private_key)) => Some(TlsPaths {
                certificate,
                private_key,
            }),
            _ => None,
        }
    }

    /// Checks cross-field constraints the loader cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] when only half of the TLS material is
    /// configured, when an `https` endpoint lacks TLS material, or when the
    /// request limit is zero.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.tls_certificate_path.is_some() != self.tls_private_key_path.is_some() {
            return Err(ConfigValidationError::IncompleteTls);
        }
        if self.endpoint.scheme() == MbusScheme::Https && self.tls_paths().is_none() {
            return Err(ConfigValidationError::TlsRequired {
                endpoint: self.endpoint.to_string(),
            });
        }
        if self.max_request_bytes == 0 {
            return Err(ConfigValidationError::ZeroRequestLimit);
        }
        Ok(())
    }
}

/// Borrowed TLS material locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlsPaths<'a> {
    /// PEM certificate chain.
    pub certificate: &'a Utf8Path,
    /// PEM private key.
    pub private_key: &'a Utf8Path,
}

/// Cross-field configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Only one of certificate and key was supplied.
    #[error("tls_certificate_path and tls_private_key_path must be set together")]
    IncompleteTls,
    /// An `https` endpoint was configured without TLS material.
    #[error("endpoint {endpoint} uses https but no TLS certificate is configured")]
    TlsRequired {
        /// Redacted endpoint URL.
        endpoint: String,
    },
    /// The request limit would reject every body.
    #[error("max_request_bytes must be greater than zero")]
    ZeroRequestLimit,
}
