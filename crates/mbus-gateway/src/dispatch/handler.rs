use std::sync::Arc;

use serde::Serialize;

use crate::envelope::{CommandRequest, CommandResult};

/// Implements the agent's command vocabulary.
///
/// The gateway may call `handle` from several request threads at once, so
/// implementations carry their own synchronisation if they hold state.
/// Methods the handler does not recognise should be answered with
/// [`CommandResult::unknown_method`].
pub trait CommandHandler: Send + Sync + 'static {
    /// Success payload type.
    type Output: Serialize;

    /// Executes one command.
    fn handle(&self, request: &CommandRequest) -> CommandResult<Self::Output>;
}

impl<H> CommandHandler for Arc<H>
where
    H: CommandHandler,
{
    type Output = H::Output;

    fn handle(&self, request: &CommandRequest) -> CommandResult<Self::Output> {
        (**self).handle(request)
    }
}
