// file: src/spark/mod.rs
// version: 1.0.0
// guid: 4d7e09c3-b8f1-4a56-92d0-7e3c51a8f0b4

//! Spark operations: job submission and in-container test runs

pub mod submit;
pub mod testrun;

pub use submit::SparkSubmitter;
pub use testrun::TestRunner;
