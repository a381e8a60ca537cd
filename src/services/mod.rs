// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod upload;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{
    DefaultDispatchConfig, SyncConfig, CONFIG_FILE_NAME, LEGACY_CONFIG_FILE_NAME,
};
pub use monitoring::{ConsoleSyncReporter, NoOpSyncReporter};
pub use upload::{AwsCliUploader, DryRunUploader};
