// file: src/error.rs
// version: 1.0.0
// guid: 3f1c9a52-6d0e-4b7a-9c21-8e5d4a0b7f13

use thiserror::Error;

/// Result type alias for the wizard
pub type Result<T> = std::result::Result<T, WizardError>;

/// Error types for the sshuttle wizard
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} is not installed or not in your PATH")]
    MissingDependency(String),

    #[error("unable to run command: {0}")]
    Discovery(String),

    #[error("{0}")]
    Execution(String),
}

impl WizardError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new missing dependency error
    pub fn missing_dependency(program: impl Into<String>) -> Self {
        Self::MissingDependency(program.into())
    }

    /// Create a new discovery error
    pub fn discovery(msg: impl Into<String>) -> Self {
        Self::Discovery(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }
}
