use std::io::{self, Write};

use tracing::info;
use vehicle_core::{write_error, JsonClient, VehicleList};

use super::{finish, VEHICLES_PATH};
use crate::outcome::{Outcome, EXIT_FAILURE};

/// `list-vehicle`: one line per vehicle in server order.
pub fn run<C: JsonClient + ?Sized>(client: &C, out: &mut impl Write, err: &mut impl Write) -> Outcome {
    let list = match client.get(VEHICLES_PATH).and_then(VehicleList::from_body) {
        Ok(list) => list,
        Err(e) => {
            write_error(err, &e);
            return Outcome::Failure(EXIT_FAILURE);
        }
    };
    info!(count = list.vehicles.len(), "listed vehicles");
    finish(print(&list, out), out)
}

fn print(list: &VehicleList, out: &mut impl Write) -> io::Result<()> {
    if list.vehicles.is_empty() {
        return writeln!(out, "No vehicles found.");
    }
    for vehicle in &list.vehicles {
        writeln!(out, "{vehicle}")?;
    }
    Ok(())
}
