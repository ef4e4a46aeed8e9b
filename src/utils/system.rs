// file: src/utils/system.rs
// version: 1.0.0
// guid: 5d0b8e2f-9a46-4c73-b1d5-6f3e8a2c0d94

//! System utility functions

use crate::error::WizardError;
use crate::Result;
use std::path::PathBuf;
use tracing::{debug, warn};

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Resolve a required command on PATH
    pub fn require_command(command: &str) -> Result<PathBuf> {
        match which::which(command) {
            Ok(path) => {
                debug!("Found {} at {}", command, path.display());
                Ok(path)
            }
            Err(e) => {
                warn!("{} not found: {}", command, e);
                Err(WizardError::missing_dependency(command))
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_require_command_missing() {
        // Act
        let result = SystemUtils::require_command("definitely-not-a-real-command-4f2a");

        // Assert
        match result {
            Err(WizardError::MissingDependency(name)) => {
                assert_eq!(name, "definitely-not-a-real-command-4f2a")
            }
            other => panic!("expected missing dependency, got {:?}", other),
        }
    }

    #[test]
    fn test_require_command_found() {
        let path = SystemUtils::require_command("sh").unwrap();
        assert!(path.ends_with("sh"));
    }
}
