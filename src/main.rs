use anyhow::Result;
use clap::Parser;

use param_sync::cli::{execute_init, execute_push, Cli, Commands, PushConfig};
use param_sync::SyncError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("❌ エラー: {error:#}");
            if let Some(hint) = error
                .downcast_ref::<SyncError>()
                .and_then(SyncError::suggestion)
            {
                eprintln!("💡 {hint}");
            }
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Init { config, force } => {
            execute_init(&config, force)?;
            Ok(0)
        }
        Commands::Push {
            environment,
            config,
            concurrency,
            dry_run,
            strict,
            aws_cli,
            quiet,
        } => {
            let summary = execute_push(PushConfig {
                environment,
                config,
                concurrency,
                dry_run,
                aws_cli,
                quiet,
            })
            .await?;

            // 個別の失敗は既定では終了コードに反映しない
            if strict && summary.has_failures() {
                return Ok(1);
            }
            Ok(0)
        }
    }
}
