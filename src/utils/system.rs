// file: src/utils/system.rs
// version: 1.0.0
// guid: 8e06b3a4-f52d-4c17-90ab-3d7e18c5f926

//! System utility functions

use crate::Result;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Check if the Docker daemon is reachable
    pub async fn docker_daemon_reachable() -> bool {
        Command::new("docker")
            .arg("info")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Check if running as root
    pub fn is_root() -> bool {
        #[cfg(unix)]
        {
            unsafe { libc::getuid() == 0 }
        }
        #[cfg(windows)]
        {
            false
        }
    }

    /// Check whether the current user belongs to the docker group
    pub async fn user_in_docker_group() -> bool {
        let output = match Command::new("id").arg("-nG").output().await {
            Ok(output) => output,
            Err(_) => return false,
        };

        String::from_utf8_lossy(&output.stdout)
            .split_whitespace()
            .any(|group| group == "docker")
    }

    /// Check host prerequisites for driving the Spark stack
    ///
    /// Returns the list of missing commands. Either the standalone
    /// `docker-compose` binary or the `docker compose` plugin satisfies
    /// the Compose requirement.
    pub async fn check_prerequisites() -> Result<Vec<String>> {
        let mut missing = Vec::new();

        if !Self::command_exists("docker") {
            missing.push("docker".to_string());
        }

        if !Self::command_exists("docker-compose") && !Self::compose_plugin_available().await {
            missing.push("docker-compose".to_string());
        }

        debug!("Prerequisite check complete, {} missing", missing.len());
        Ok(missing)
    }

    /// Check whether `docker compose` works as a CLI plugin
    pub async fn compose_plugin_available() -> bool {
        if !Self::command_exists("docker") {
            return false;
        }

        Command::new("docker")
            .args(["compose", "version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}
