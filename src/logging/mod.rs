// file: src/logging/mod.rs
// version: 1.0.0
// guid: 6b3d90e5-2a78-4f14-8c69-d51e07b4a2f3

//! Logging module

pub mod logger;
