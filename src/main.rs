//! jsonbatch CLI entrypoint.
//!
//! A thin wrapper over the `cli` module: parse args, run the batch, and exit
//! with the status the run earned. For programmatic use, prefer the library
//! API (`jsonbatch::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
