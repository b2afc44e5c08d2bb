use std::io::Write;

use tracing::info;
use vehicle_core::{write_error, JsonClient};

use super::{finish, vehicle_path};
use crate::outcome::{Outcome, EXIT_FAILURE};

/// `delete-vehicle --id <id>`. The id is only percent-encoded; the server
/// decides whether it is valid.
pub fn run<C: JsonClient + ?Sized>(client: &C, id: &str, out: &mut impl Write, err: &mut impl Write) -> Outcome {
    if let Err(e) = vehicle_path(id).and_then(|path| client.delete(&path)) {
        write_error(err, &e);
        return Outcome::Failure(EXIT_FAILURE);
    }
    info!(id, "deleted vehicle");
    finish(writeln!(out, "Vehicle {id} deleted successfully"), out)
}
