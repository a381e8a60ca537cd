// 同期処理システムのトレイト定義
// 外部コラボレーターとの境界を抽象化する

use super::types::SyncSummary;
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// ディスパッチ設定を抽象化するトレイト
#[automock]
pub trait DispatchConfig: Send + Sync {
    /// 同時に動かすワーカー数（常に1以上）
    fn concurrency(&self) -> usize;
}

impl DispatchConfig for Box<dyn DispatchConfig> {
    fn concurrency(&self) -> usize {
        self.as_ref().concurrency()
    }
}

/// パラメータストアへの書き込みを抽象化するトレイト
#[automock]
#[async_trait]
pub trait ParameterUploader: Send + Sync {
    /// 1件のパラメータを書き込む。失敗理由はエラーメッセージとして返す
    async fn upload(&self, name: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl ParameterUploader for Box<dyn ParameterUploader> {
    async fn upload(&self, name: &str, value: &str) -> Result<()> {
        self.as_ref().upload(name, value).await
    }
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait SyncReporter: Send + Sync {
    /// 同期開始時の報告
    async fn report_started(&self, source: &str, total: usize);

    /// 1件のアップロード成功
    async fn report_uploaded(&self, name: &str);

    /// 1件のアップロード失敗
    async fn report_failed(&self, name: &str, reason: &str);

    /// 全ワーカー終了後に1度だけ呼ばれる
    async fn report_completed(&self, prefix: &str, source: &str, summary: &SyncSummary);
}

#[async_trait]
impl SyncReporter for Box<dyn SyncReporter> {
    async fn report_started(&self, source: &str, total: usize) {
        self.as_ref().report_started(source, total).await
    }

    async fn report_uploaded(&self, name: &str) {
        self.as_ref().report_uploaded(name).await
    }

    async fn report_failed(&self, name: &str, reason: &str) {
        self.as_ref().report_failed(name, reason).await
    }

    async fn report_completed(&self, prefix: &str, source: &str, summary: &SyncSummary) {
        self.as_ref().report_completed(prefix, source, summary).await
    }
}
