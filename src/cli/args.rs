use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::services::CONFIG_FILE_NAME;

#[derive(Parser)]
#[command(name = "param_sync")]
#[command(about = "Sync local .env files into AWS SSM Parameter Store")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a default param-sync.json in the current directory
    Init {
        /// Path of the configuration file to create
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Upload the env file of an environment to Parameter Store
    Push {
        /// Environment name as defined in envFile (e.g. dev, prod)
        environment: String,

        /// Configuration file path
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,

        /// Number of concurrent uploads (overrides the config file)
        #[arg(short = 'j', long, allow_negative_numbers = true)]
        concurrency: Option<i64>,

        /// Resolve and list parameters without uploading
        #[arg(long)]
        dry_run: bool,

        /// Exit with a non-zero status when any upload fails
        #[arg(long)]
        strict: bool,

        /// AWS CLI executable to invoke
        #[arg(long, default_value = "aws")]
        aws_cli: PathBuf,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },
}
