// file: src/config/loader.rs
// version: 1.0.0
// guid: e8a3d657-1c9f-4b20-a74d-5f02c86e91ab

//! Configuration file loading and environment variable substitution

use super::ClusterConfig;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load cluster configuration from a YAML file
    pub fn load_cluster_config<P: AsRef<Path>>(&self, path: P) -> Result<ClusterConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::EtlRunnerError::ConfigError(format!(
                "Failed to read cluster config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let config: ClusterConfig = serde_yaml::from_str(&expanded)?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve the configuration, falling back to built-in defaults
    ///
    /// An explicit `--config` path must exist; the well-known locations
    /// are optional and silently skipped when absent.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<ClusterConfig> {
        if let Some(path) = explicit {
            let expanded = shellexpand::tilde(path).into_owned();
            return self.load_cluster_config(expanded);
        }

        for candidate in Self::default_config_paths() {
            if candidate.exists() {
                return self.load_cluster_config(candidate);
            }
        }

        Ok(ClusterConfig::default())
    }

    /// Well-known config locations, most specific first
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("configs/cluster.yaml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("spark-etl-runner").join("cluster.yaml"));
        }
        paths
    }

    /// Expand `${VAR}` environment variables in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            crate::error::EtlRunnerError::ConfigError(format!("Invalid regex pattern: {}", e))
        })?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(crate::error::EtlRunnerError::ConfigError(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeployMode;
    use tempfile::TempDir;

    #[test]
    fn test_load_cluster_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cluster.yaml");
        fs::write(
            &config_path,
            r#"
compose_file: docker/docker-compose.yml
master_service: spark-master
master_url: spark://spark-master:7077
deploy_mode: cluster
files:
  - configs/etl_config.json
  - configs/extra.json
"#,
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let config = loader.load_cluster_config(&config_path).unwrap();

        assert_eq!(config.compose_file, "docker/docker-compose.yml");
        assert_eq!(config.deploy_mode, DeployMode::Cluster);
        assert_eq!(config.files.len(), 2);
        // untouched fields keep their defaults
        assert_eq!(config.packages_archive, "packages.zip");
    }

    #[test]
    fn test_env_var_expansion() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cluster.yaml");
        fs::write(&config_path, "master_url: spark://${SPARK_HOST}:7077\n").unwrap();

        let mut loader = ConfigLoader::new();
        loader.set_env_var("SPARK_HOST".to_string(), "master.internal".to_string());

        let config = loader.load_cluster_config(&config_path).unwrap();
        assert_eq!(config.master_url, "spark://master.internal:7077");
    }

    #[test]
    fn test_missing_env_var_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cluster.yaml");
        fs::write(
            &config_path,
            "master_url: spark://${DEFINITELY_NOT_SET_ETL_RUNNER}:7077\n",
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let err = loader.load_cluster_config(&config_path).unwrap_err();
        assert!(err.to_string().contains("DEFINITELY_NOT_SET_ETL_RUNNER"));
    }

    #[test]
    fn test_invalid_config_fails_validation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cluster.yaml");
        fs::write(&config_path, "master_service: \"\"\n").unwrap();

        let loader = ConfigLoader::new();
        assert!(loader.load_cluster_config(&config_path).is_err());
    }

    #[test]
    fn test_resolve_explicit_path_must_exist() {
        let loader = ConfigLoader::new();
        assert!(loader.resolve(Some("/nonexistent/cluster.yaml")).is_err());
    }
}
