use crate::core::{ParameterPath, ParameterUploader, SyncSummary};
use crate::engine::SyncEngine;
use crate::env_file::EnvFileReader;
use crate::services::{
    AwsCliUploader, ConsoleSyncReporter, DefaultDispatchConfig, DryRunUploader, SyncConfig,
};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration struct for push command to reduce argument count
pub struct PushConfig {
    pub environment: String,
    pub config: PathBuf,
    pub concurrency: Option<i64>,
    pub dry_run: bool,
    pub aws_cli: PathBuf,
    pub quiet: bool,
}

/// Upload one environment's env file to Parameter Store
pub async fn execute_push(push: PushConfig) -> Result<SyncSummary> {
    let config_path = SyncConfig::locate(&push.config);
    let config = SyncConfig::load(&config_path)?;
    let env_path = config.resolve_env_file(&config_path, &push.environment)?;
    let items = EnvFileReader::read_items(&env_path)?;

    let dispatch = DefaultDispatchConfig::from_requested(push.concurrency.or(config.concurrency));
    let path = ParameterPath::new(&config.base_path, &push.environment);

    let uploader: Box<dyn ParameterUploader> = if push.dry_run {
        Box::new(DryRunUploader::new())
    } else {
        Box::new(
            AwsCliUploader::new(&config.region)
                .with_profile(config.profile())
                .with_program(&push.aws_cli),
        )
    };
    let reporter = if push.quiet {
        ConsoleSyncReporter::quiet()
    } else {
        ConsoleSyncReporter::new()
    };

    if !push.quiet && push.dry_run {
        println!("🧪 dry-run: nothing will be written to Parameter Store");
    }

    let engine = SyncEngine::new(uploader, dispatch, reporter);
    let source = config.env_file_name(&push.environment)?;
    let summary = engine.sync(&path, source, items).await?;

    Ok(summary)
}
