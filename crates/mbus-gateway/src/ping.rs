//! The liveness handler shipped with the binary.

use crate::dispatch::CommandHandler;
use crate::envelope::{CommandRequest, CommandResult};

/// Answers `ping` with `"pong"` and reports every other method as unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct PingHandler;

impl CommandHandler for PingHandler {
    type Output = &'static str;

    fn handle(&self, request: &CommandRequest) -> CommandResult<Self::Output> {
        match request.method() {
            "ping" => CommandResult::value("pong"),
            other => CommandResult::unknown_method(other),
        }
    }
}
