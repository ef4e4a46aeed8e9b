// file: src/utils/mod.rs
// version: 1.0.0
// guid: 7a3f1c8e-2d59-4b06-9e47-0c8b5d2a6f19

//! Utility functions

pub mod system;

pub use system::SystemUtils;
