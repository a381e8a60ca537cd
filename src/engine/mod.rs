// エンジン層 - バウンデッド並列アップロード
// 共有キュー + 固定数ワーカーでアイテムを消化する

pub mod queue;
pub mod sync_engine;
pub mod worker;

pub use queue::WorkQueue;
pub use sync_engine::SyncEngine;
pub use worker::{spawn_workers, upload_single_item, UploadCounters, WorkerContext};
