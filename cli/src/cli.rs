use clap::{ArgAction, Parser, Subcommand};
use vehicle_core::DEFAULT_ADDRESS;

#[derive(Parser, Debug)]
#[command(name = "vehicle-cli", version, about = "CLI tool to manage vehicles via HTTP API")]
pub struct Cli {
    /// Server address
    #[arg(short, long, value_name = "url", default_value = DEFAULT_ADDRESS, global = true)]
    pub address: String,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List vehicles
    ListVehicle,
    /// Delete a vehicle by ID
    DeleteVehicle {
        /// Vehicle ID
        #[arg(short, long, value_name = "id")]
        id: String,
    },
}
