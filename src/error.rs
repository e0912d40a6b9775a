// file: src/error.rs
// version: 1.0.0
// guid: a7d14c92-5e3b-4f80-b621-0c9e8d5a3f17

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, EtlRunnerError>;

/// Error types for the Spark ETL runner
#[derive(Error, Debug)]
pub enum EtlRunnerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Docker Compose error: {0}")]
    ComposeError(String),

    #[error("Spark submit error: {0}")]
    SubmitError(String),

    #[error("Test run error: {0}")]
    TestError(String),

    #[error("System error: {0}")]
    SystemError(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl EtlRunnerError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a new Docker Compose error
    pub fn compose(msg: impl Into<String>) -> Self {
        Self::ComposeError(msg.into())
    }

    /// Create a new Spark submit error
    pub fn submit(msg: impl Into<String>) -> Self {
        Self::SubmitError(msg.into())
    }

    /// Create a new test run error
    pub fn test(msg: impl Into<String>) -> Self {
        Self::TestError(msg.into())
    }

    /// Create a new system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::SystemError(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }
}
