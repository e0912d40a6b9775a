// file: src/cli/args.rs
// version: 1.0.0
// guid: 9a5c31e8-4d07-4f62-b9e3-58a0d2c7f614

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spark-etl-runner")]
#[command(about = "Drive a Docker Compose based Apache Spark ETL project")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Cluster config file (YAML)")]
    pub config: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the Spark cluster stack detached
    Up {
        #[arg(long, help = "Rebuild service images before starting")]
        build: bool,

        #[arg(long)]
        dry_run: bool,
    },

    /// Stop the Spark cluster stack
    Down {
        #[arg(long, help = "Also remove named volumes")]
        volumes: bool,

        #[arg(long)]
        dry_run: bool,
    },

    /// Show the state of the cluster stack services
    Status {
        #[arg(short, long, help = "Emit service state as JSON")]
        json: bool,
    },

    /// Submit a job script to the Spark master via spark-submit
    Submit {
        #[arg(help = "Job script path inside the master container")]
        script: String,

        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "Arguments forwarded to the job script"
        )]
        args: Vec<String>,

        #[arg(long, help = "Skip the dependency bundle build step")]
        no_build: bool,

        #[arg(long)]
        dry_run: bool,
    },

    /// Run the Python test suite inside the master container
    Test {
        #[arg(short, long, help = "Override the test file pattern")]
        pattern: Option<String>,

        #[arg(long, help = "Skip the test setup command")]
        no_setup: bool,

        #[arg(long)]
        dry_run: bool,
    },

    /// Check host prerequisites (docker, Compose, daemon reachability)
    CheckPrereqs,
}
