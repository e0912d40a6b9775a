// file: src/config/mod.rs
// version: 1.0.0
// guid: c5b91f04-7a2e-4d63-9c48-e20a17d6b859

//! Configuration module for the Spark ETL runner
//!
//! Handles loading and validation of cluster configurations: the
//! Compose stack layout, the Spark master endpoint, and the job
//! submission and test-run defaults.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Spark deploy mode passed to `spark-submit --deploy-mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeployMode {
    #[serde(rename = "client")]
    #[default]
    Client,
    #[serde(rename = "cluster")]
    Cluster,
}

impl DeployMode {
    /// Get the deploy mode as the string spark-submit expects
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployMode::Client => "client",
            DeployMode::Cluster => "cluster",
        }
    }
}

impl std::str::FromStr for DeployMode {
    type Err = crate::error::EtlRunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(DeployMode::Client),
            "cluster" => Ok(DeployMode::Cluster),
            _ => Err(crate::error::EtlRunnerError::ValidationError(format!(
                "Unknown deploy mode: {}",
                s
            ))),
        }
    }
}

/// Test-run settings for the in-container Python suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    /// Command run inside the master container before test discovery
    #[serde(default = "default_setup_command")]
    pub setup_command: Vec<String>,

    /// Filename pattern handed to unittest discovery
    #[serde(default = "default_test_pattern")]
    pub pattern: String,

    /// Directory unittest discovery starts from
    #[serde(default = "default_test_start_dir")]
    pub start_dir: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            setup_command: default_setup_command(),
            pattern: default_test_pattern(),
            start_dir: default_test_start_dir(),
        }
    }
}

/// Cluster configuration for a Dockerised Spark ETL project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Compose file describing the Spark stack
    #[serde(default = "default_compose_file")]
    pub compose_file: String,

    /// Optional Compose project name (`-p`)
    #[serde(default)]
    pub project_name: Option<String>,

    /// Service name of the Spark master container
    #[serde(default = "default_master_service")]
    pub master_service: String,

    /// Master URL handed to `spark-submit --master`
    #[serde(default = "default_master_url")]
    pub master_url: String,

    /// Deploy mode handed to `spark-submit --deploy-mode`
    #[serde(default)]
    pub deploy_mode: DeployMode,

    /// Dependency bundle handed to `spark-submit --py-files`
    #[serde(default = "default_packages_archive")]
    pub packages_archive: String,

    /// Command run inside the master container to build the bundle
    #[serde(default = "default_build_command")]
    pub build_command: Vec<String>,

    /// Extra payloads handed to `spark-submit --files`
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Free-form `--conf key=value` pairs, sorted for stable argv
    #[serde(default)]
    pub spark_conf: BTreeMap<String, String>,

    /// Working directory for exec'd commands inside the container
    #[serde(default)]
    pub workdir: Option<String>,

    /// Optional wall-clock limit for submit and test runs
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Test-run settings
    #[serde(default)]
    pub test: TestConfig,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            compose_file: default_compose_file(),
            project_name: None,
            master_service: default_master_service(),
            master_url: default_master_url(),
            deploy_mode: DeployMode::Client,
            packages_archive: default_packages_archive(),
            build_command: default_build_command(),
            files: default_files(),
            spark_conf: BTreeMap::new(),
            workdir: None,
            timeout_seconds: None,
            test: TestConfig::default(),
        }
    }
}

impl ClusterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.compose_file.trim().is_empty() {
            return Err(crate::error::EtlRunnerError::ValidationError(
                "compose_file cannot be empty".to_string(),
            ));
        }

        if self.master_service.trim().is_empty() {
            return Err(crate::error::EtlRunnerError::ValidationError(
                "master_service cannot be empty".to_string(),
            ));
        }

        if self.master_url.trim().is_empty() {
            return Err(crate::error::EtlRunnerError::ValidationError(
                "master_url cannot be empty".to_string(),
            ));
        }

        // spark-submit expects a scheme, e.g. spark://host:port or local[*]
        if !self.master_url.contains("://") && !self.master_url.starts_with("local") {
            return Err(crate::error::EtlRunnerError::ValidationError(format!(
                "master_url has no scheme: {}",
                self.master_url
            )));
        }

        if self.packages_archive.trim().is_empty() {
            return Err(crate::error::EtlRunnerError::ValidationError(
                "packages_archive cannot be empty".to_string(),
            ));
        }

        if self.test.pattern.trim().is_empty() {
            return Err(crate::error::EtlRunnerError::ValidationError(
                "test.pattern cannot be empty".to_string(),
            ));
        }

        if self.test.start_dir.trim().is_empty() {
            return Err(crate::error::EtlRunnerError::ValidationError(
                "test.start_dir cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_compose_file() -> String {
    "docker-compose.yml".to_string()
}

fn default_master_service() -> String {
    "spark-master".to_string()
}

fn default_master_url() -> String {
    "spark://spark-master:7077".to_string()
}

fn default_packages_archive() -> String {
    "packages.zip".to_string()
}

fn default_build_command() -> Vec<String> {
    vec!["/bin/bash".to_string(), "bin/build_dependencies.sh".to_string()]
}

fn default_files() -> Vec<String> {
    vec!["configs/etl_config.json".to_string()]
}

fn default_setup_command() -> Vec<String> {
    vec!["/bin/bash".to_string(), "bin/test_setup.sh".to_string()]
}

fn default_test_pattern() -> String {
    "*_test.py".to_string()
}

fn default_test_start_dir() -> String {
    "tests".to_string()
}
