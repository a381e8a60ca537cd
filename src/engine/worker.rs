// Worker - キューからアイテムを取り出してアップロードする並列ワーカー

use super::queue::WorkQueue;
use crate::core::{ParameterPath, ParameterUploader, SyncReporter, UploadItem, UploadOutcome};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// 成功・失敗件数の集計
#[derive(Debug, Default)]
pub struct UploadCounters {
    succeeded: AtomicUsize,
    failed: AtomicUsize,
}

impl UploadCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: &UploadOutcome) {
        let counter = if outcome.is_success() {
            &self.succeeded
        } else {
            &self.failed
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }
}

/// 単一アイテムのアップロード。失敗はここで結果に変換され、外には伝播しない
pub async fn upload_single_item<U>(
    uploader: &U,
    path: &ParameterPath,
    item: &UploadItem,
) -> UploadOutcome
where
    U: ParameterUploader + ?Sized,
{
    let name = path.name_for(&item.key);
    match uploader.upload(&name, &item.value).await {
        Ok(()) => UploadOutcome::Success { name },
        Err(error) => UploadOutcome::Failure {
            name,
            reason: format!("{error:#}"),
        },
    }
}

/// 共有リソース一式（ワーカーごとにArcをクローンして渡す）
pub struct WorkerContext<U, R> {
    pub queue: Arc<WorkQueue>,
    pub uploader: Arc<U>,
    pub reporter: Arc<R>,
    pub path: Arc<ParameterPath>,
    pub counters: Arc<UploadCounters>,
}

impl<U, R> Clone for WorkerContext<U, R> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
            uploader: Arc::clone(&self.uploader),
            reporter: Arc::clone(&self.reporter),
            path: Arc::clone(&self.path),
            counters: Arc::clone(&self.counters),
        }
    }
}

/// 単一ワーカー
///
/// claim してから await する。キューが空になった時点で終了する。
pub fn spawn_single_worker<U, R>(ctx: WorkerContext<U, R>) -> JoinHandle<()>
where
    U: ParameterUploader + 'static,
    R: SyncReporter + 'static,
{
    tokio::spawn(async move {
        while let Some(item) = ctx.queue.claim() {
            let outcome = upload_single_item(ctx.uploader.as_ref(), &ctx.path, &item).await;

            match &outcome {
                UploadOutcome::Success { name } => ctx.reporter.report_uploaded(name).await,
                UploadOutcome::Failure { name, reason } => {
                    ctx.reporter.report_failed(name, reason).await
                }
            }
            ctx.counters.record(&outcome);
        }
    })
}

/// 起動するワーカー数。アイテム数を超えた分は何も取り出さずに終わるだけなので起動しない
pub fn worker_count(concurrency: usize, item_count: usize) -> usize {
    concurrency.max(1).min(item_count.max(1))
}

/// ワーカープール: ちょうど `worker_count` 個のワーカーを起動する
pub fn spawn_workers<U, R>(ctx: WorkerContext<U, R>, worker_count: usize) -> Vec<JoinHandle<()>>
where
    U: ParameterUploader + 'static,
    R: SyncReporter + 'static,
{
    (0..worker_count)
        .map(|_| spawn_single_worker(ctx.clone()))
        .collect()
}
