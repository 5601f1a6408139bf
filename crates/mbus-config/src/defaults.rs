/// Default upper bound on a single request body, in bytes.
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Default log filter: `info` for the agent, `warn` for the listener stack.
pub const DEFAULT_LOG_FILTER: &str = "info,tiny_http=warn,rustls=warn";

/// Default log filter expression used by the agent.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the agent.
#[must_use]
pub const fn default_log_format() -> crate::logging::LogFormat {
    crate::logging::LogFormat::Json
}

/// Default request body limit.
#[must_use]
pub const fn default_max_request_bytes() -> usize {
    DEFAULT_MAX_REQUEST_BYTES
}
