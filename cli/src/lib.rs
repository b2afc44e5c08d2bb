//! Command-line client for the vehicle management API.
//!
//! `run` holds everything between argument parsing and process exit so it
//! can be driven with in-memory writers; `main` only parses, sets up
//! logging, and exits with the returned `Outcome`. Help is printed by `main`
//! only when the binary is started with no arguments at all.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod outcome;

use std::io::Write;

use clap::CommandFactory;
use tracing::debug;
use vehicle_core::{validate_url, HttpClient};

pub use cli::{Cli, Command};
pub use outcome::{Outcome, EXIT_FAILURE};

/// Write the top-level help text.
pub fn write_help(out: &mut impl Write) -> Outcome {
    let help = Cli::command().render_help();
    let _ = write!(out, "{help}");
    Outcome::Success
}

/// Validate the address, build the client once, and dispatch.
///
/// Options without a subcommand do nothing: no output, no validation.
pub fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> Outcome {
    let Some(command) = cli.command else {
        debug!("no subcommand given");
        return Outcome::Success;
    };

    if !validate_url(&cli.address) {
        let _ = writeln!(err, "Invalid URL: {}", cli.address);
        return Outcome::Failure(EXIT_FAILURE);
    }

    let client = HttpClient::new(&cli.address);
    debug!(base_url = client.base_url(), ?command, "dispatching");

    match command {
        Command::ListVehicle => commands::list::run(&client, out, err),
        Command::DeleteVehicle { id } => commands::delete::run(&client, &id, out, err),
    }
}
