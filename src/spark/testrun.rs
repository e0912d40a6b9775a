// file: src/spark/testrun.rs
// version: 1.0.0
// guid: 5a91e3c7-0d48-4b26-af73-8c2e64d90b51

//! In-container Python test suite execution
//!
//! Runs the configured setup command, then unittest discovery over
//! every file matching the test pattern, inside the master container.

use crate::compose::ComposeClient;
use crate::config::ClusterConfig;
use crate::error::EtlRunnerError;
use crate::Result;
use std::time::Instant;
use tracing::info;

/// Build the unittest discovery argument vector
pub fn discover_args(config: &ClusterConfig, pattern_override: Option<&str>) -> Vec<String> {
    let pattern = pattern_override.unwrap_or(&config.test.pattern);
    vec![
        "python".to_string(),
        "-m".to_string(),
        "unittest".to_string(),
        "discover".to_string(),
        "-s".to_string(),
        config.test.start_dir.clone(),
        "-p".to_string(),
        pattern.to_string(),
    ]
}

/// Runs the project test suite inside the master container
pub struct TestRunner {
    client: ComposeClient,
}

impl TestRunner {
    /// Create a runner over an existing Compose client
    pub fn new(client: ComposeClient) -> Self {
        Self { client }
    }

    /// Run setup, then the full discovered suite
    pub async fn run(&self, pattern_override: Option<&str>, skip_setup: bool) -> Result<()> {
        if let Some(pattern) = pattern_override {
            if pattern.trim().is_empty() {
                return Err(EtlRunnerError::validation("Test pattern cannot be empty"));
            }
        }

        let started = Instant::now();

        if skip_setup {
            info!("Skipping test setup command");
        } else {
            let setup_command = self.client.config().test.setup_command.clone();
            if setup_command.is_empty() {
                info!("No test setup command configured");
            } else {
                info!("Running test setup");
                self.client
                    .exec_in_master(&setup_command)
                    .await
                    .map_err(wrap_test_error)?;
            }
        }

        let argv = discover_args(self.client.config(), pattern_override);
        info!(
            "Running test discovery in {} with pattern {}",
            self.client.config().test.start_dir,
            pattern_override.unwrap_or(&self.client.config().test.pattern)
        );

        self.client
            .exec_in_master(&argv)
            .await
            .map_err(wrap_test_error)?;

        info!(
            "Test suite passed in {:.1}s",
            started.elapsed().as_secs_f64()
        );
        Ok(())
    }
}

fn wrap_test_error(err: EtlRunnerError) -> EtlRunnerError {
    match err {
        EtlRunnerError::Timeout(_) => err,
        other => EtlRunnerError::test(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{ComposeBinary, ComposeClient};
    use crate::config::ClusterConfig;

    #[test]
    fn test_discover_args_default_pattern() {
        let config = ClusterConfig::default();
        let argv = discover_args(&config, None);

        assert_eq!(
            argv,
            vec!["python", "-m", "unittest", "discover", "-s", "tests", "-p", "*_test.py"]
        );
    }

    #[test]
    fn test_discover_args_pattern_override() {
        let config = ClusterConfig::default();
        let argv = discover_args(&config, Some("test_*.py"));
        assert_eq!(argv.last().unwrap(), "test_*.py");
    }

    #[test]
    fn test_wrap_test_error_keeps_timeout() {
        let err = wrap_test_error(EtlRunnerError::timeout("exceeded 60s limit"));
        assert!(matches!(err, EtlRunnerError::Timeout(_)));
    }

    #[test]
    fn test_wrap_test_error_classifies_other_failures() {
        let err = wrap_test_error(EtlRunnerError::compose("exited with code 1"));
        assert!(matches!(err, EtlRunnerError::TestError(_)));
    }

    #[tokio::test]
    async fn test_run_rejects_empty_pattern_override() {
        let client =
            ComposeClient::with_binary(ClusterConfig::default(), ComposeBinary::Standalone, true);
        let runner = TestRunner::new(client);

        let err = runner.run(Some(""), true).await.unwrap_err();
        assert!(matches!(err, EtlRunnerError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_run_dry_run_succeeds_without_cluster() {
        let client =
            ComposeClient::with_binary(ClusterConfig::default(), ComposeBinary::Standalone, true);
        let runner = TestRunner::new(client);

        assert!(runner.run(None, false).await.is_ok());
    }
}
