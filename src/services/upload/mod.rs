// アップロード機能
// パラメータストアへの書き込みを行う外部コラボレーター

pub mod aws_cli;
pub mod dry_run;

pub use aws_cli::AwsCliUploader;
pub use dry_run::DryRunUploader;
