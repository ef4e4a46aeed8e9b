// file: src/main.rs
// version: 1.0.0
// guid: 8f1d6b4e-3a09-4c72-9e58-0b2c7a5d8f14

//! sshuttle wizard - main entry point

use clap::Parser;
use sshuttle_wizard::{
    cli::{args::Cli, commands::wizard_command},
    logging::logger,
};
use std::process::ExitCode;
use tracing::error;

// Stdin is read with blocking calls, so no Ctrl+C handler is installed:
// SIGINT keeps its default action and ends the wizard and any child at once.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
    }

    match wizard_command(cli.into()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
