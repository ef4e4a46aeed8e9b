// file: src/network/ssh.rs
// version: 1.0.0
// guid: c4d7e2a9-5b18-4f36-a0c1-9e6b3d8f2a57

//! SSH client used to inspect the remote host's routing table

use crate::error::WizardError;
use crate::network::subnets::{parse_private_subnets, PrivateNetworks};
use crate::Result;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, info};

/// Remote command whose output lists the host's routes
pub const ROUTE_COMMAND: &str = "ip route";

/// SSH client that shells out to the system `ssh` binary
#[derive(Debug, Clone)]
pub struct SshClient {
    program: String,
}

impl SshClient {
    /// Create a new SSH client using `ssh` from PATH
    pub fn new() -> Self {
        Self::with_program("ssh")
    }

    /// Create a client that runs a specific ssh program
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The ssh program this client invokes
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run a command on the remote host and return stdout and stderr merged.
    ///
    /// The merge is stdout followed by stderr, not interleaved by arrival.
    pub async fn execute_with_output(&self, host: &str, command: &str) -> Result<String> {
        debug!("Executing on {} via {}: {}", host, self.program, command);

        let output = Command::new(&self.program)
            .arg(host)
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| WizardError::discovery(format!("{}: {}", self.program, e)))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            error!("Remote command failed with {}", output.status);
            if !combined.trim().is_empty() {
                error!("OUTPUT: {}", combined.trim());
            }
            return Err(WizardError::discovery(output.status.to_string()));
        }

        debug!("Remote command returned {} bytes", combined.len());
        Ok(combined)
    }

    /// Query the remote routing table and keep only the private subnets
    pub async fn discover_private_subnets(
        &self,
        host: &str,
        private: &PrivateNetworks,
    ) -> Result<Vec<String>> {
        info!("Discovering routes on {}", host);

        let output = self.execute_with_output(host, ROUTE_COMMAND).await?;
        let subnets = parse_private_subnets(&output, private);

        info!("Detected {} private subnet(s) on {}", subnets.len(), host);
        Ok(subnets)
    }
}

impl Default for SshClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_system_ssh() {
        assert_eq!(SshClient::new().program(), "ssh");
        assert_eq!(SshClient::default().program(), "ssh");
    }

    #[tokio::test]
    async fn test_execute_with_output_missing_program() {
        // Arrange
        let client = SshClient::with_program("/nonexistent/definitely-not-ssh");

        // Act
        let result = client.execute_with_output("user@host", ROUTE_COMMAND).await;

        // Assert
        match result {
            Err(WizardError::Discovery(msg)) => assert!(msg.contains("definitely-not-ssh")),
            other => panic!("expected discovery error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_with_output_non_zero_exit() {
        // Arrange
        let client = SshClient::with_program("false");

        // Act
        let result = client.execute_with_output("user@host", ROUTE_COMMAND).await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, WizardError::Discovery(_)));
        assert!(err.to_string().starts_with("unable to run command: exit status: 1"));
    }

    #[tokio::test]
    async fn test_execute_with_output_passes_host_and_command() {
        // Arrange
        // echo stands in for ssh and reflects its argv back
        let client = SshClient::with_program("echo");

        // Act
        let output = client.execute_with_output("user@host", ROUTE_COMMAND).await.unwrap();

        // Assert
        assert_eq!(output, "user@host ip route\n");
    }

    #[tokio::test]
    async fn test_discover_private_subnets_propagates_failure() {
        // Arrange
        let client = SshClient::with_program("false");
        let private = PrivateNetworks::rfc1918().unwrap();

        // Act
        let result = client.discover_private_subnets("user@host", &private).await;

        // Assert
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_discover_private_subnets_filters_output() {
        // Arrange
        // echo prints the host argument first, which is a private CIDR here
        let client = SshClient::with_program("echo");
        let private = PrivateNetworks::rfc1918().unwrap();

        // Act
        let subnets = client
            .discover_private_subnets("192.168.7.0/24", &private)
            .await
            .unwrap();

        // Assert
        assert_eq!(subnets, vec!["192.168.7.0/24"]);
    }
}
