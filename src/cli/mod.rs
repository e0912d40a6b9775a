// file: src/cli/mod.rs
// version: 1.0.0
// guid: 1f7a84d2-6e39-4b05-a8c1-72d5f0e93b46

//! Command line interface module

pub mod args;
pub mod commands;
