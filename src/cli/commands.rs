// file: src/cli/commands.rs
// version: 1.0.0
// guid: b4e07c26-8f91-4d35-a2b7-1e69d8f3c052

//! Command implementations for the CLI

use crate::{
    compose::ComposeClient,
    config::{ClusterConfig, ConfigLoader},
    spark::{SparkSubmitter, TestRunner},
    utils::system::SystemUtils,
    Result,
};
use colored::Colorize;
use tracing::info;

fn load_config(config_path: Option<&str>) -> Result<ClusterConfig> {
    let loader = ConfigLoader::new();
    loader.resolve(config_path)
}

/// Start the Spark cluster stack detached
pub async fn up_command(config_path: Option<&str>, build: bool, dry_run: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let client = ComposeClient::new(config, dry_run)?;

    client.up(build).await?;

    info!("Spark cluster stack is up");
    Ok(())
}

/// Stop the Spark cluster stack
pub async fn down_command(config_path: Option<&str>, volumes: bool, dry_run: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let client = ComposeClient::new(config, dry_run)?;

    client.down(volumes).await?;

    info!("Spark cluster stack is down");
    Ok(())
}

/// Show the state of the cluster stack services
pub async fn status_command(config_path: Option<&str>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let client = ComposeClient::new(config, false)?;

    let output = client.ps(json).await?;

    if json {
        let services = parse_ps_json(&output)?;
        println!("{}", serde_json::to_string_pretty(&services)?);
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Normalize Compose `ps --format json` output
///
/// The standalone binary emits one JSON array, the CLI plugin emits one
/// JSON object per line.
fn parse_ps_json(output: &str) -> Result<Vec<serde_json::Value>> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if let Ok(serde_json::Value::Array(services)) = serde_json::from_str(trimmed) {
        return Ok(services);
    }

    trimmed
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(Into::into))
        .collect()
}

/// Submit a job script to the Spark master
pub async fn submit_command(
    config_path: Option<&str>,
    script: &str,
    job_args: &[String],
    no_build: bool,
    dry_run: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    info!(
        "Submitting to {} in deploy mode {}",
        config.master_url,
        config.deploy_mode.as_str()
    );

    let client = ComposeClient::new(config, dry_run)?;
    let submitter = SparkSubmitter::new(client);

    submitter.submit(script, job_args, no_build).await
}

/// Run the Python test suite inside the master container
pub async fn test_command(
    config_path: Option<&str>,
    pattern: Option<&str>,
    no_setup: bool,
    dry_run: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let client = ComposeClient::new(config, dry_run)?;
    let runner = TestRunner::new(client);

    runner.run(pattern, no_setup).await
}

/// Check host prerequisites for driving the Spark stack
pub async fn check_prerequisites_command() -> Result<()> {
    info!("Checking host prerequisites");

    let missing = SystemUtils::check_prerequisites().await?;

    if missing.is_empty() {
        println!("{} required commands are available", "✓".green());
    } else {
        println!(
            "{} missing required commands: {}",
            "✗".red(),
            missing.join(", ")
        );
        for cmd in &missing {
            match cmd.as_str() {
                "docker" => println!("  install Docker Engine: https://docs.docker.com/engine/install/"),
                "docker-compose" => {
                    println!("  install the Compose plugin or standalone docker-compose")
                }
                _ => {}
            }
        }
    }

    if SystemUtils::docker_daemon_reachable().await {
        println!("{} Docker daemon is reachable", "✓".green());
    } else {
        println!("{} Docker daemon is not reachable", "✗".red());
    }

    if SystemUtils::is_root() || SystemUtils::user_in_docker_group().await {
        println!("{} current user can talk to Docker", "✓".green());
    } else {
        println!(
            "{} current user is not root and not in the docker group",
            "⚠".yellow()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_up_command_missing_config_file() {
        let result = up_command(Some("/nonexistent/cluster.yaml"), false, true).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_submit_command_missing_config_file() {
        let result = submit_command(
            Some("/nonexistent/cluster.yaml"),
            "jobs/etl_job.py",
            &[],
            true,
            true,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_check_prerequisites_command_runs() {
        let result = check_prerequisites_command().await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_ps_json_array_form() {
        let services = parse_ps_json(r#"[{"Name": "spark-master", "State": "running"}]"#).unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0]["Name"], "spark-master");
    }

    #[test]
    fn test_parse_ps_json_line_form() {
        let output = "{\"Name\": \"spark-master\"}\n{\"Name\": \"spark-worker-1\"}\n";
        let services = parse_ps_json(output).unwrap();
        assert_eq!(services.len(), 2);
    }

    #[test]
    fn test_parse_ps_json_empty_output() {
        assert!(parse_ps_json("  \n").unwrap().is_empty());
    }
}
