// file: tests/integration_test.rs
// version: 1.0.0
// guid: c1f92e05-7d38-4a64-b0e9-85a2d47c6f13

//! Integration tests for the Spark ETL runner

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;
use spark_etl_runner::{
    compose::{ComposeBinary, ComposeClient},
    config::{ClusterConfig, ConfigLoader, DeployMode},
    spark::submit,
    spark::testrun,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_config_loading_integration() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let config_content = r#"
compose_file: docker/docker-compose.yml
project_name: etl-stack
master_service: spark-master
master_url: spark://spark-master:7077
deploy_mode: client
packages_archive: packages.zip
files:
  - configs/etl_config.json
spark_conf:
  spark.executor.memory: 2g
test:
  pattern: "*_test.py"
  start_dir: tests
"#;

    let config_path = temp_dir.path().join("cluster.yaml");
    tokio::fs::write(&config_path, config_content).await?;

    let loader = ConfigLoader::new();
    let config = loader.load_cluster_config(&config_path)?;

    assert_eq!(config.project_name.as_deref(), Some("etl-stack"));
    assert_eq!(config.master_url, "spark://spark-master:7077");
    assert_eq!(config.deploy_mode, DeployMode::Client);
    assert_eq!(config.spark_conf["spark.executor.memory"], "2g");

    Ok(())
}

#[tokio::test]
async fn test_loaded_config_drives_full_command_sequences() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("cluster.yaml");
    tokio::fs::write(
        &config_path,
        "project_name: etl\nworkdir: /opt/etl\n",
    )
    .await?;

    let loader = ConfigLoader::new();
    let config = loader.load_cluster_config(&config_path)?;
    let client = ComposeClient::with_binary(config.clone(), ComposeBinary::Standalone, true);

    // the start-spark sequence
    let (program, args) = client.up_args(false);
    assert_eq!(program, "docker-compose");
    assert_eq!(
        args,
        vec!["-f", "docker-compose.yml", "-p", "etl", "up", "-d"]
    );

    // the run sequence: exec into the master and spark-submit there
    let submit_argv = submit::submit_args(&config, "jobs/etl_job.py", &["--job_name_arg".to_string(), "etl".to_string()]);
    let (_, exec_args) = client.exec_args(&submit_argv);
    let rendered = exec_args.join(" ");
    assert!(rendered.starts_with("-f docker-compose.yml -p etl exec -T -w /opt/etl spark-master spark-submit"));
    assert!(rendered.contains("--master spark://spark-master:7077"));
    assert!(rendered.contains("--deploy-mode client"));
    assert!(rendered.contains("--py-files packages.zip"));
    assert!(rendered.ends_with("jobs/etl_job.py --job_name_arg etl"));

    // the test-all sequence
    let test_argv = testrun::discover_args(&config, None);
    assert_eq!(
        test_argv,
        vec!["python", "-m", "unittest", "discover", "-s", "tests", "-p", "*_test.py"]
    );

    Ok(())
}

#[tokio::test]
async fn test_env_substitution_end_to_end() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("cluster.yaml");
    tokio::fs::write(
        &config_path,
        "master_url: spark://${ETL_RUNNER_TEST_MASTER}:7077\n",
    )
    .await?;

    let mut loader = ConfigLoader::new();
    loader.set_env_var("ETL_RUNNER_TEST_MASTER".to_string(), "spark-master".to_string());

    let config = loader.load_cluster_config(&config_path)?;
    let argv = submit::submit_args(&config, "job.py", &[]);
    assert!(argv.contains(&"spark://spark-master:7077".to_string()));

    Ok(())
}

#[test]
fn test_default_config_is_valid() {
    let config = ClusterConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_help_lists_workflow_commands() {
    let mut cmd = AssertCommand::cargo_bin("spark-etl-runner").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("up"))
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("test"))
        .stdout(predicate::str::contains("check-prereqs"));
}

#[test]
fn test_cli_submit_requires_script() {
    let mut cmd = AssertCommand::cargo_bin("spark-etl-runner").unwrap();
    cmd.arg("submit").assert().failure();
}

#[test]
fn test_cli_missing_config_file_fails() {
    let mut cmd = AssertCommand::cargo_bin("spark-etl-runner").unwrap();
    cmd.args(["-c", "/nonexistent/cluster.yaml", "up", "--dry-run"])
        .assert()
        .failure();
}
