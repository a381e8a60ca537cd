// 同期処理に関連するデータ型定義

use chrono::{DateTime, Utc};

/// アップロード対象の1アイテム（envファイルの1行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadItem {
    pub key: String,
    pub value: String,
}

impl UploadItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// パラメータストア上の名前空間 `/{basePath}/{environment}`
///
/// basePath の先頭スラッシュは常に1つに正規化し、末尾スラッシュは取り除く。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterPath {
    prefix: String,
}

impl ParameterPath {
    pub fn new(base_path: &str, environment: &str) -> Self {
        let base = base_path.trim_matches('/');
        let prefix = if base.is_empty() {
            format!("/{environment}")
        } else {
            format!("/{base}/{environment}")
        };
        Self { prefix }
    }

    /// 名前空間のプレフィックス
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// キーに対応するパラメータ名
    pub fn name_for(&self, key: &str) -> String {
        format!("{}/{}", self.prefix, key)
    }
}

impl std::fmt::Display for ParameterPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prefix)
    }
}

/// 個別アップロードの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success { name: String },
    Failure { name: String, reason: String },
}

impl UploadOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Success { name } | Self::Failure { name, .. } => name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// 1回の実行全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct SyncSummary {
    /// 試行したアイテム数（成功数ではない）
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

impl SyncSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
