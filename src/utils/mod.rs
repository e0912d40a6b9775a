// file: src/utils/mod.rs
// version: 1.0.0
// guid: 2c8f5d19-7e04-4a63-b1d2-96f0a3c74e88

//! Utility functions

pub mod system;

pub use system::SystemUtils;
