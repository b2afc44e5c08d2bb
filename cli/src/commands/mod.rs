//! Subcommand handlers.
//!
//! Each handler makes one call through an injected `JsonClient`, writes the
//! result to `out`, and on failure writes exactly one error report to `err`
//! and returns `Outcome::Failure`.

pub mod delete;
pub mod list;

use std::io::{self, Write};

use tracing::warn;
use vehicle_core::{join_segment, ClientError};

use crate::outcome::{Outcome, EXIT_FAILURE};

pub const VEHICLES_PATH: &str = "/vehicles";

/// Path of one vehicle. The id is percent-encoded, never interpreted.
pub fn vehicle_path(id: &str) -> Result<String, ClientError> {
    join_segment(VEHICLES_PATH, id)
}

/// Success output that could not be written still fails the command.
fn finish(written: io::Result<()>, out: &mut impl Write) -> Outcome {
    match written.and_then(|()| out.flush()) {
        Ok(()) => Outcome::Success,
        Err(e) => {
            warn!(error = %e, "failed to write command output");
            Outcome::Failure(EXIT_FAILURE)
        }
    }
}
