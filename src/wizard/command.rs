// file: src/wizard/command.rs
// version: 1.0.0
// guid: 6f8a0c3d-4e27-4b91-9d65-1a3c7e5b9f08

//! sshuttle command line assembly

use std::fmt;

/// Program the wizard builds commands for
pub const SSHUTTLE: &str = "sshuttle";

/// An sshuttle invocation: `sshuttle [<options>] [<subnet> ...] -r <remote host>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshuttleCommand {
    pub remote_host: String,
    pub subnets: Vec<String>,
    /// Free-form flags inserted verbatim after the program name
    pub options: String,
}

impl SshuttleCommand {
    pub fn new(remote_host: impl Into<String>, subnets: Vec<String>, options: impl Into<String>) -> Self {
        Self {
            remote_host: remote_host.into(),
            subnets,
            options: options.into(),
        }
    }
}

impl fmt::Display for SshuttleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SSHUTTLE)?;
        if !self.options.is_empty() {
            write!(f, " {}", self.options)?;
        }
        for subnet in &self.subnets {
            write!(f, " {}", subnet)?;
        }
        write!(f, " -r {}", self.remote_host)
    }
}

/// Build the command string. No quoting or escaping is applied.
pub fn build_command(remote_host: &str, subnets: &[String], options: &str) -> String {
    SshuttleCommand::new(remote_host, subnets.to_vec(), options).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_with_options() {
        // Arrange
        let subnets = vec!["10.0.0.0/8".to_string(), "192.168.1.0/24".to_string()];

        // Act
        let command = build_command("user@host", &subnets, "-v");

        // Assert
        assert_eq!(command, "sshuttle -v 10.0.0.0/8 192.168.1.0/24 -r user@host");
    }

    #[test]
    fn test_build_command_without_options() {
        let command = build_command("user@host", &["10.0.0.0/8".to_string()], "");

        assert_eq!(command, "sshuttle 10.0.0.0/8 -r user@host");
    }

    #[test]
    fn test_build_command_no_subnets() {
        let command = build_command("user@host", &[], "");

        assert_eq!(command, "sshuttle -r user@host");
    }

    #[test]
    fn test_build_command_multiple_option_flags_verbatim() {
        let command = build_command("me@bastion", &["172.16.0.0/12".to_string()], "-v --dns  -x 1.2.3.4");

        assert_eq!(command, "sshuttle -v --dns  -x 1.2.3.4 172.16.0.0/12 -r me@bastion");
    }

    #[test]
    fn test_sshuttle_command_display_matches_build() {
        // Arrange
        let command = SshuttleCommand::new("h", vec!["10.0.0.0/8".to_string()], "-v");

        // Act & Assert
        assert_eq!(command.to_string(), build_command("h", &command.subnets, "-v"));
    }
}
