//! JSON envelopes exchanged with the controller.
//!
//! ## Request
//!
//! ```json
//! {"method":"ping","arguments":[],"reply_to":"director.1"}
//! ```
//!
//! `method` must be a non-blank string and `arguments` an array. `reply_to` is
//! optional and unknown fields are ignored.
//!
//! ## Response
//!
//! Exactly one of two keys is present:
//!
//! ```json
//! {"value":"pong"}
//! {"exception":{"kind":"unknown_method","message":"unknown method: reboot"}}
//! ```

mod errors;
mod request;
mod response;

const ENVELOPE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::envelope");

pub use self::errors::DecodeError;
pub use self::request::{CommandRequest, decode};
pub use self::response::{CommandFailure, CommandResult, FailureKind, encode};
