// file: src/wizard/execute.rs
// version: 1.0.0
// guid: a0d5b7e3-8f42-4c19-b6a7-4e9c2d1f8b35

//! Launching the prepared command

use crate::error::WizardError;
use crate::Result;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Run a command string with the wizard's stdout and stderr.
///
/// The string is split on whitespace, so quoted arguments are not kept
/// together. Stdin is not connected.
pub async fn execute_command(command: &str) -> Result<()> {
    let mut args = command.split_whitespace();
    let program = args
        .next()
        .ok_or_else(|| WizardError::execution("no command to execute"))?;
    let args: Vec<&str> = args.collect();

    debug!("Spawning {} with args {:?}", program, args);

    let status = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| WizardError::execution(e.to_string()))?;

    if !status.success() {
        return Err(WizardError::execution(status.to_string()));
    }

    info!("{} exited successfully", program);
    Ok(())
}
