// file: src/lib.rs
// version: 1.0.0
// guid: 3f8c2a1e-9b4d-4e72-8a05-6c1d92f4b7e3

//! # Spark ETL Runner
//!
//! Command-line workflow runner for Docker Compose based Apache Spark
//! ETL projects. It starts the cluster stack, submits jobs to the
//! master container via `spark-submit`, and runs the in-container
//! Python test suite, delegating all real work to Docker Compose and
//! Spark themselves.

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod logging;
pub mod spark;
pub mod utils;

pub use error::{EtlRunnerError, Result};

/// Version information for the runner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
