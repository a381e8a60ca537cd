// 進捗監視の具象実装

use crate::core::{SyncError, SyncReporter, SyncSummary};
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleSyncReporter {
    quiet: bool,
}

impl ConsoleSyncReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl SyncReporter for ConsoleSyncReporter {
    async fn report_started(&self, source: &str, total: usize) {
        if !self.quiet {
            println!("📤 Uploading {source} to Parameter Store... ({total} items)");
        }
    }

    async fn report_uploaded(&self, name: &str) {
        if !self.quiet {
            println!("✓ {name}");
        }
    }

    async fn report_failed(&self, name: &str, reason: &str) {
        if !self.quiet {
            eprintln!("❌ {}", SyncError::upload(name, reason));
        }
    }

    async fn report_completed(&self, prefix: &str, source: &str, summary: &SyncSummary) {
        if self.quiet {
            return;
        }
        println!(
            "✅ Upload to Parameter Store completed: {prefix} ({} items) from {source}",
            summary.total
        );
        if summary.has_failures() {
            eprintln!(
                "⚠️  {} of {} items failed ({}ms)",
                summary.failed, summary.total, summary.elapsed_ms
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpSyncReporter;

impl NoOpSyncReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SyncReporter for NoOpSyncReporter {
    async fn report_started(&self, _source: &str, _total: usize) {}

    async fn report_uploaded(&self, _name: &str) {}

    async fn report_failed(&self, _name: &str, _reason: &str) {}

    async fn report_completed(&self, _prefix: &str, _source: &str, _summary: &SyncSummary) {}
}
