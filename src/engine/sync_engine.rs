// SyncEngine - 依存性注入によるバウンデッド並列アップロードエンジン
// アップローダー・設定・レポーターは全てコンストラクタで注入する

use super::queue::WorkQueue;
use super::worker::{spawn_workers, worker_count, UploadCounters, WorkerContext};
use crate::core::{
    DispatchConfig, ParameterPath, ParameterUploader, SyncError, SyncReporter, SyncResult,
    SyncSummary, UploadItem,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// バウンデッド並列アップロードエンジン
///
/// 並列処理で共有される依存関係はArcで管理する。
pub struct SyncEngine<U, C, R> {
    uploader: Arc<U>,
    config: Arc<C>,
    reporter: Arc<R>,
}

impl<U, C, R> SyncEngine<U, C, R>
where
    U: ParameterUploader + 'static,
    C: DispatchConfig,
    R: SyncReporter + 'static,
{
    pub fn new(uploader: U, config: C, reporter: R) -> Self {
        Self {
            uploader: Arc::new(uploader),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// アイテム列を `path` 以下へアップロードする
    ///
    /// 個々のアップロード失敗はレポーターへ報告して集計するだけで、
    /// エラーとしては返さない。全ワーカー終了後に完了報告を1度だけ行う。
    pub async fn sync(
        &self,
        path: &ParameterPath,
        source: &str,
        items: Vec<UploadItem>,
    ) -> SyncResult<SyncSummary> {
        let started_at = Utc::now();
        let start_time = Instant::now();
        let total = items.len();

        self.reporter.report_started(source, total).await;

        let ctx = WorkerContext {
            queue: Arc::new(WorkQueue::new(items)),
            uploader: Arc::clone(&self.uploader),
            reporter: Arc::clone(&self.reporter),
            path: Arc::new(path.clone()),
            counters: Arc::new(UploadCounters::new()),
        };
        let counters = Arc::clone(&ctx.counters);

        let handles = spawn_workers(ctx, worker_count(self.config.concurrency(), total));

        // 1つが異常終了しても残りのワーカーは最後まで待つ
        let mut task_error: Option<SyncError> = None;
        for handle in handles {
            if let Err(e) = handle.await {
                task_error.get_or_insert(SyncError::task(e));
            }
        }
        if let Some(error) = task_error {
            return Err(error);
        }

        let summary = SyncSummary {
            total,
            succeeded: counters.succeeded(),
            failed: counters.failed(),
            started_at,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };

        self.reporter
            .report_completed(path.prefix(), source, &summary)
            .await;

        Ok(summary)
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn uploader(&self) -> &U {
        &self.uploader
    }
}
