//! Test suites for the agent gateway.

mod support;
