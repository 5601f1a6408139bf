//! Process-wide `tracing` subscriber for the agent.
//!
//! The subscriber is installed once. Later bootstraps in the same process get
//! back the settings that are actually in force, which may differ from the
//! configuration they passed.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use mbus_config::{Config, LogFormat};

static INSTALLED: OnceCell<TelemetryHandle> = OnceCell::new();

/// Settings of the installed subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryHandle {
    filter: String,
    format: LogFormat,
}

impl TelemetryHandle {
    /// Filter expression in force.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Output format in force.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter expression did not parse.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Another global subscriber was already installed.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Installs the global subscriber on first use and reports what is in force.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the first call's filter does not parse or
/// another subscriber already owns the process.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    INSTALLED
        .get_or_try_init(|| {
            install_subscriber(config.log_filter(), config.log_format())?;
            Ok(TelemetryHandle {
                filter: config.log_filter().to_owned(),
                format: config.log_format(),
            })
        })
        .cloned()
}

fn build_filter(expression: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(expression).map_err(|error| TelemetryError::Filter(error.to_string()))
}

fn install_subscriber(expression: &str, format: LogFormat) -> Result<(), TelemetryError> {
    let filter = build_filter(expression)?;

    // Request handlers run on per-connection threads; the thread name ties a
    // request's events together.
    let builder = |env_filter: EnvFilter| {
        fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_names(true)
            .with_writer(io::stderr)
            .with_ansi(!format.is_structured() && io::stderr().is_terminal())
            .with_timer(fmt::time::UtcTime::rfc_3339())
    };

    let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
        LogFormat::Json => Box::new(builder(filter).json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder(filter).compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}
