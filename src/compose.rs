// file: src/compose.rs
// version: 1.0.0
// guid: 91c4f2b8-6d0a-4e35-8b7c-d3a95e014f62

//! Docker Compose command wrapper
//!
//! Thin, typed layer over the `docker-compose` CLI (or the `docker
//! compose` plugin). Every operation maps to exactly one external
//! process; failures propagate as the invoked tool's exit status with
//! no retry or recovery.

use crate::config::ClusterConfig;
use crate::error::EtlRunnerError;
use crate::Result;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};

/// How Compose is installed on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeBinary {
    /// Standalone `docker-compose` binary
    Standalone,
    /// `docker compose` CLI plugin
    Plugin,
}

/// Docker Compose client bound to one cluster configuration
pub struct ComposeClient {
    config: ClusterConfig,
    binary: ComposeBinary,
    dry_run: bool,
}

impl ComposeClient {
    /// Create a client, resolving the Compose binary on the host
    pub fn new(config: ClusterConfig, dry_run: bool) -> Result<Self> {
        let binary = Self::resolve_binary()?;
        debug!("Resolved Compose binary: {:?}", binary);
        Ok(Self {
            config,
            binary,
            dry_run,
        })
    }

    /// Create a client with an explicit binary flavour (used in tests)
    pub fn with_binary(config: ClusterConfig, binary: ComposeBinary, dry_run: bool) -> Self {
        Self {
            config,
            binary,
            dry_run,
        }
    }

    fn resolve_binary() -> Result<ComposeBinary> {
        if which::which("docker-compose").is_ok() {
            return Ok(ComposeBinary::Standalone);
        }
        if which::which("docker").is_ok() {
            return Ok(ComposeBinary::Plugin);
        }
        Err(EtlRunnerError::system(
            "Neither docker-compose nor docker found in PATH",
        ))
    }

    /// Program name plus the leading arguments shared by every operation
    fn base_command(&self) -> (String, Vec<String>) {
        let (program, mut args) = match self.binary {
            ComposeBinary::Standalone => ("docker-compose".to_string(), Vec::new()),
            ComposeBinary::Plugin => ("docker".to_string(), vec!["compose".to_string()]),
        };

        args.push("-f".to_string());
        args.push(self.config.compose_file.clone());

        if let Some(ref project) = self.config.project_name {
            args.push("-p".to_string());
            args.push(project.clone());
        }

        (program, args)
    }

    /// Argument vector for `up -d`
    pub fn up_args(&self, build: bool) -> (String, Vec<String>) {
        let (program, mut args) = self.base_command();
        args.push("up".to_string());
        args.push("-d".to_string());
        if build {
            args.push("--build".to_string());
        }
        (program, args)
    }

    /// Argument vector for `down`
    pub fn down_args(&self, volumes: bool) -> (String, Vec<String>) {
        let (program, mut args) = self.base_command();
        args.push("down".to_string());
        if volumes {
            args.push("-v".to_string());
        }
        (program, args)
    }

    /// Argument vector for `ps`
    pub fn ps_args(&self, json: bool) -> (String, Vec<String>) {
        let (program, mut args) = self.base_command();
        args.push("ps".to_string());
        if json {
            args.push("--format".to_string());
            args.push("json".to_string());
        }
        (program, args)
    }

    /// Argument vector for an exec in the master container
    ///
    /// `-T` disables TTY allocation so the command works from scripts
    /// and CI the same way it does interactively.
    pub fn exec_args(&self, argv: &[String]) -> (String, Vec<String>) {
        let (program, mut args) = self.base_command();
        args.push("exec".to_string());
        args.push("-T".to_string());
        if let Some(ref workdir) = self.config.workdir {
            args.push("-w".to_string());
            args.push(workdir.clone());
        }
        args.push(self.config.master_service.clone());
        args.extend(argv.iter().cloned());
        (program, args)
    }

    /// Start the stack detached
    pub async fn up(&self, build: bool) -> Result<()> {
        let (program, args) = self.up_args(build);
        info!("Starting Compose stack from {}", self.config.compose_file);
        self.run_streaming(&program, &args, None)
            .await
            .map_err(|e| EtlRunnerError::compose(e.to_string()))
    }

    /// Stop the stack
    pub async fn down(&self, volumes: bool) -> Result<()> {
        let (program, args) = self.down_args(volumes);
        info!("Stopping Compose stack from {}", self.config.compose_file);
        self.run_streaming(&program, &args, None)
            .await
            .map_err(|e| EtlRunnerError::compose(e.to_string()))
    }

    /// Capture `ps` output for display
    pub async fn ps(&self, json: bool) -> Result<String> {
        let (program, args) = self.ps_args(json);

        if self.dry_run {
            println!("DRY RUN: Would execute: {}", render_command(&program, &args));
            return Ok(String::new());
        }

        debug!("Executing: {}", render_command(&program, &args));
        let output = Command::new(&program)
            .args(&args)
            .output()
            .await
            .map_err(|e| EtlRunnerError::compose(format!("Failed to run {}: {}", program, e)))?;

        if !output.status.success() {
            return Err(EtlRunnerError::compose(format!(
                "{} ps failed: {}",
                program,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a command inside the master container, streaming its output
    ///
    /// Honors the configured `timeout_seconds`; an exceeded deadline is
    /// a timeout error, every other failure carries Compose's exit code.
    pub async fn exec_in_master(&self, argv: &[String]) -> Result<()> {
        let (program, args) = self.exec_args(argv);
        let timeout = self.config.timeout_seconds.map(Duration::from_secs);
        self.run_streaming(&program, &args, timeout).await
    }

    async fn run_streaming(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<()> {
        let rendered = render_command(program, args);

        if self.dry_run {
            println!("DRY RUN: Would execute: {}", rendered);
            return Ok(());
        }

        debug!("Executing: {}", rendered);

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            // reap the child when the timeout drops the status future
            .kill_on_drop(true);

        let status = match timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.status())
                .await
                .map_err(|_| {
                    EtlRunnerError::timeout(format!(
                        "Command exceeded {}s limit: {}",
                        limit.as_secs(),
                        rendered
                    ))
                })?,
            None => cmd.status().await,
        }
        .map_err(|e| EtlRunnerError::compose(format!("Failed to execute {}: {}", program, e)))?;

        if !status.success() {
            return Err(match status.code() {
                Some(code) => {
                    EtlRunnerError::compose(format!("Command exited with code {}: {}", code, rendered))
                }
                None => EtlRunnerError::compose(format!("Command killed by signal: {}", rendered)),
            });
        }

        Ok(())
    }

    /// Access the bound configuration
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }
}

/// Render a command line for logging and dry-run preview
pub fn render_command(program: &str, args: &[String]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| {
        if a.contains(' ') {
            format!("'{}'", a)
        } else {
            a.clone()
        }
    }));
    parts.join(" ")
}
