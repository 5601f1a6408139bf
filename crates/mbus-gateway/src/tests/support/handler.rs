//! Command handler with a fixed test vocabulary.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::dispatch::CommandHandler;
use crate::envelope::{CommandRequest, CommandResult};

/// Success payloads produced by [`ScriptedHandler`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Text(&'static str),
    Echo(Vec<Value>),
    /// Maps with byte-string keys have no JSON representation.
    Unserializable(HashMap<Vec<u8>, u8>),
}

/// Handler answering `ping`, `echo`, `explode`, `fail` and `opaque`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedHandler;

impl CommandHandler for ScriptedHandler {
    type Output = Reply;

    fn handle(&self, request: &CommandRequest) -> CommandResult<Reply> {
        match request.method() {
            "ping" => CommandResult::value(Reply::Text("pong")),
            "echo" => CommandResult::value(Reply::Echo(request.arguments().to_vec())),
            "explode" => panic!("scripted explosion"),
            "fail" => Err::<Reply, _>("disk full").into(),
            "opaque" => CommandResult::value(Reply::Unserializable(HashMap::from([(
                vec![0_u8, 1],
                1,
            )]))),
            other => CommandResult::unknown_method(other),
        }
    }
}
