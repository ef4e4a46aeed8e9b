// file: src/cli/commands.rs
// version: 1.0.0
// guid: 7c0f3e9b-5a62-4d84-a1b7-2e8d6c4f0a93

//! Command implementations for the CLI

use crate::{
    config::WizardConfig,
    wizard::{Prompter, Wizard},
    Result,
};
use tracing::info;

/// Run the interactive wizard on the terminal
pub async fn wizard_command(config: WizardConfig) -> Result<()> {
    info!("Starting sshuttle wizard");

    let wizard = Wizard::new(config)?;
    let mut prompter = Prompter::stdio();
    wizard.run(&mut prompter).await?;

    info!("Wizard finished");
    Ok(())
}
