// file: src/wizard/mod.rs
// version: 1.0.0
// guid: d3a8f6c1-9b25-4e70-a4d9-7c1e5b3f0a82

//! The interactive sshuttle wizard
//!
//! A run checks that sshuttle is installed, asks for the remote host, reads
//! its routing table over ssh, lets the user pick private subnets and then
//! prints (and optionally runs) the resulting sshuttle command.

pub mod command;
pub mod execute;
pub mod prompt;
pub mod selection;

pub use command::{build_command, SshuttleCommand};
pub use execute::execute_command;
pub use prompt::Prompter;
pub use selection::{choose_subnets, parse_selection, Selection};

use crate::config::WizardConfig;
use crate::logging::logger::with_operation_span;
use crate::network::{PrivateNetworks, SshClient};
use crate::utils::SystemUtils;
use crate::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const HOST_PROMPT: &str = "Enter remote host (e.g. user@example.com)";
pub const OPTIONS_PROMPT: &str = "Enter additional options (e.g. -v for verbose)";
pub const CONFIRM_PROMPT: &str = "Do you want to execute this command? (y/n)";

const BANNER: [&str; 3] = [
    "sshuttle-wizard",
    "---------------",
    "Welcome to the sshuttle command builder and executor wizard!",
];

/// One configured wizard run
pub struct Wizard {
    config: WizardConfig,
    private: PrivateNetworks,
    ssh: SshClient,
}

impl Wizard {
    /// Create a wizard from validated settings
    pub fn new(config: WizardConfig) -> Result<Self> {
        config.validate()?;
        let private = PrivateNetworks::rfc1918()?;
        let ssh = SshClient::with_program(config.ssh_program.clone());
        debug!(
            "Routing via {} to private networks {:?}",
            ssh.program(),
            private.networks()
        );

        Ok(Self {
            config,
            private,
            ssh,
        })
    }

    /// Drive the whole dialogue.
    ///
    /// Missing sshuttle and failed route discovery are reported to the user
    /// and returned as errors. A failed sshuttle run is only reported.
    pub async fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<()> {
        for line in BANNER {
            prompter.say(line)?;
        }

        let sshuttle = &self.config.sshuttle_program;
        if let Err(e) = with_operation_span("preflight", || SystemUtils::require_command(sshuttle)) {
            prompter.say(format!("Error: {} is not installed or not in your PATH.", sshuttle))?;
            prompter.say(format!("Please install {} and try again.", sshuttle))?;
            return Err(e);
        }

        let remote_host = match &self.config.remote_host {
            Some(host) => host.clone(),
            None => prompter.get_input(HOST_PROMPT)?,
        };

        let subnets = match self.ssh.discover_private_subnets(&remote_host, &self.private).await {
            Ok(subnets) => subnets,
            Err(e) => {
                prompter.say(format!("Error getting remote subnets: {}", e))?;
                return Err(e);
            }
        };

        selection::print_candidates(prompter, &subnets)?;
        let chosen = choose_subnets(prompter, &subnets)?;

        let options = match &self.config.options {
            Some(options) => options.trim().to_string(),
            None => prompter.get_input(OPTIONS_PROMPT)?,
        };

        let command = build_command(&remote_host, &chosen, &options);
        prompter.say("\nPrepared sshuttle command:")?;
        prompter.say(&command)?;

        if self.config.dry_run {
            info!("Dry run, not executing");
        } else if prompter.get_input(CONFIRM_PROMPT)? == "y" {
            prompter.say("Executing sshuttle command...")?;
            if let Err(e) = execute_command(&command).await {
                warn!("sshuttle did not complete: {}", e);
                prompter.say(format!("Error executing sshuttle: {}", e))?;
            }
            return Ok(());
        }

        prompter.say("Command not executed. You can run it manually if needed.")?;
        Ok(())
    }
}
