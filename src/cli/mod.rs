// file: src/cli/mod.rs
// version: 1.0.0
// guid: 2d6a9f1c-8b35-4e07-9c42-5f0b7d3e1a86

//! Command line interface for the sshuttle wizard

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
