// file: src/config/mod.rs
// version: 1.0.0
// guid: 4c9e2b7f-1a58-4d03-8f6b-9d2a5e0c7b41

//! Runtime settings for a wizard run
//!
//! Settings come from command line flags only. Anything left unset is asked
//! for interactively.

use crate::error::WizardError;
use crate::wizard::command::SSHUTTLE;
use crate::Result;

/// Settings for one run of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Remote host given up front instead of prompting
    pub remote_host: Option<String>,
    /// sshuttle options given up front instead of prompting
    pub options: Option<String>,
    /// Print the command without offering to run it
    pub dry_run: bool,
    /// ssh program used for route discovery
    pub ssh_program: String,
    /// Program that must be on PATH before the wizard starts
    pub sshuttle_program: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            remote_host: None,
            options: None,
            dry_run: false,
            ssh_program: "ssh".to_string(),
            sshuttle_program: SSHUTTLE.to_string(),
        }
    }
}

impl WizardConfig {
    /// Reject settings that cannot produce a usable run
    pub fn validate(&self) -> Result<()> {
        if self.ssh_program.trim().is_empty() {
            return Err(WizardError::config("ssh program must not be empty"));
        }

        if let Some(host) = &self.remote_host {
            if host.trim().is_empty() {
                return Err(WizardError::config("remote host must not be blank"));
            }
            if host.split_whitespace().count() > 1 {
                return Err(WizardError::config(format!(
                    "remote host must not contain whitespace: {:?}",
                    host
                )));
            }
        }

        Ok(())
    }
}
