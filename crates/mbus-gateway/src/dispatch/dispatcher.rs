use tracing::{debug, warn};

use crate::envelope::{CommandRequest, CommandResult, FailureKind};
use crate::unwind;

use super::DISPATCH_TARGET;
use super::handler::CommandHandler;

/// Invokes a [`CommandHandler`] exactly once per request.
#[derive(Debug)]
pub struct Dispatcher<H> {
    handler: H,
}

impl<H> Dispatcher<H>
where
    H: CommandHandler,
{
    /// Creates a dispatcher owning `handler`.
    #[must_use]
    pub const fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Runs the handler for `request`, converting a panic into a failure.
    pub fn invoke(&self, request: &CommandRequest) -> CommandResult<H::Output> {
        debug!(
            target: DISPATCH_TARGET,
            method = request.method(),
            arguments = request.arguments().len(),
            "dispatching command"
        );

        let result = match unwind::contain(|| self.handler.handle(request)) {
            Ok(result) => result,
            Err(detail) => {
                warn!(
                    target: DISPATCH_TARGET,
                    method = request.method(),
                    panic = %detail,
                    "command handler panicked"
                );
                CommandResult::failure(
                    FailureKind::Panic,
                    format!("command handler panicked: {detail}"),
                )
            }
        };

        if let Some(failure) = result.failure_ref() {
            warn!(
                target: DISPATCH_TARGET,
                method = request.method(),
                kind = %failure.kind(),
                message = failure.message(),
                "command failed"
            );
        }
        result
    }

    /// Borrows the wrapped handler.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }
}
