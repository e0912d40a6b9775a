// file: src/spark/submit.rs
// version: 1.0.0
// guid: 7b2e48d0-3f6a-4c91-b5e8-09d4a67c2e15

//! spark-submit invocation in the master container
//!
//! Builds the exact `spark-submit` argument vector from the cluster
//! configuration and runs it through Compose exec, preceded by the
//! dependency bundle build unless the caller skips it.

use crate::compose::ComposeClient;
use crate::config::ClusterConfig;
use crate::error::EtlRunnerError;
use crate::Result;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Build the `spark-submit` argument vector for a job script
///
/// Order matches what the master expects: master URL, deploy mode,
/// dependency bundle, config payloads, extra conf pairs, then the
/// script and its own arguments verbatim.
pub fn submit_args(config: &ClusterConfig, script: &str, job_args: &[String]) -> Vec<String> {
    let mut argv = vec![
        "spark-submit".to_string(),
        "--master".to_string(),
        config.master_url.clone(),
        "--deploy-mode".to_string(),
        config.deploy_mode.as_str().to_string(),
        "--py-files".to_string(),
        config.packages_archive.clone(),
    ];

    if !config.files.is_empty() {
        argv.push("--files".to_string());
        argv.push(config.files.join(","));
    }

    for (key, value) in &config.spark_conf {
        argv.push("--conf".to_string());
        argv.push(format!("{}={}", key, value));
    }

    argv.push(script.to_string());
    argv.extend(job_args.iter().cloned());

    argv
}

/// Submits ETL jobs to the Spark master container
pub struct SparkSubmitter {
    client: ComposeClient,
}

impl SparkSubmitter {
    /// Create a submitter over an existing Compose client
    pub fn new(client: ComposeClient) -> Self {
        Self { client }
    }

    /// Build the dependency bundle, then submit the job
    pub async fn submit(&self, script: &str, job_args: &[String], skip_build: bool) -> Result<()> {
        if script.trim().is_empty() {
            return Err(EtlRunnerError::validation(
                "Job script path cannot be empty",
            ));
        }

        let run_id = Uuid::new_v4();
        let started = Instant::now();
        info!(
            "Submitting job {} (run {}, started {})",
            script,
            run_id,
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );

        if skip_build {
            info!("Skipping dependency bundle build");
        } else {
            let build_command = self.client.config().build_command.clone();
            info!(
                "Building dependency bundle {}",
                self.client.config().packages_archive
            );
            self.client
                .exec_in_master(&build_command)
                .await
                .map_err(wrap_submit_error)?;
        }

        let argv = submit_args(self.client.config(), script, job_args);
        self.client
            .exec_in_master(&argv)
            .await
            .map_err(wrap_submit_error)?;

        info!(
            "Job {} (run {}) finished in {:.1}s",
            script,
            run_id,
            started.elapsed().as_secs_f64()
        );
        Ok(())
    }
}

/// Keep timeouts distinguishable, classify everything else as a submit failure
fn wrap_submit_error(err: EtlRunnerError) -> EtlRunnerError {
    match err {
        EtlRunnerError::Timeout(_) => err,
        other => EtlRunnerError::submit(other.to_string()),
    }
}
