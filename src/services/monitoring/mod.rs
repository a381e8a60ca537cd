// 進捗監視機能
// 開始通知、アイテム単位の成功・失敗、完了通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleSyncReporter, NoOpSyncReporter};
