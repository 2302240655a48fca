//! paimon-sink CLI: resolves sink configuration files and prints the result.

use std::process::ExitCode;

use clap::Parser;

use paimon_sink::{CliArgs, init_tracing};

fn main() -> ExitCode {
    init_tracing();

    let args = CliArgs::parse();

    match paimon_sink::cli::run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
