// file: src/lib.rs
// version: 1.0.0
// guid: 5b3e8c0a-2f71-4d96-b8e4-1c7a9d5f3b27

//! # sshuttle-wizard
//!
//! Interactive builder for `sshuttle` commands. The wizard reads a remote
//! host's routing table over ssh, offers its private (RFC1918) subnets for
//! selection and assembles the matching `sshuttle ... -r <host>` command,
//! which it can also run.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod utils;
pub mod wizard;

pub use error::{Result, WizardError};
