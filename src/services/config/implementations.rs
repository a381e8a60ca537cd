// ディスパッチ設定の具象実装

use crate::core::DispatchConfig;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultDispatchConfig {
    concurrency: usize,
}

impl DefaultDispatchConfig {
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    /// 設定ファイル・CLIの値から生成（未指定・0・負数は1）
    pub fn from_requested(requested: Option<i64>) -> Self {
        let concurrency = match requested {
            Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => 1,
        };
        Self { concurrency }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

impl Default for DefaultDispatchConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

impl DispatchConfig for DefaultDispatchConfig {
    fn concurrency(&self) -> usize {
        self.concurrency
    }
}
