// file: src/network/mod.rs
// version: 1.0.0
// guid: 1e6a9d3b-7c24-4f58-8b0e-5a2c7f9d1b36

//! Network operations module

pub mod ssh;
pub mod subnets;

pub use ssh::SshClient;
pub use subnets::{parse_private_subnets, PrivateNetworks};
