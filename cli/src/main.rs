use std::io;
use std::process::ExitCode;

use clap::Parser;
use vehicle_cli::{logging, run, write_help, Cli};

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        return write_help(&mut io::stdout().lock()).into();
    }

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let outcome = run(cli, &mut io::stdout().lock(), &mut io::stderr().lock());
    outcome.into()
}
