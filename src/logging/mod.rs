// file: src/logging/mod.rs
// version: 1.0.0
// guid: 0f4c7a2e-6d91-4b38-8e05-3a9d1c6b7e52

//! Logging system for the sshuttle wizard

pub mod logger;

pub use logger::init_logger;
