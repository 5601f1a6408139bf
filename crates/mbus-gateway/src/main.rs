//! `mbus-gateway` binary: serves the agent endpoint until signalled.

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match mbus_gateway::run_agent() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Exit status carries the failure when stderr is unwritable.
            drop(writeln!(io::stderr().lock(), "mbus-gateway: {error}"));
            ExitCode::FAILURE
        }
    }
}
