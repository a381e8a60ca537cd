// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

pub use error::{SyncError, SyncResult};
pub use traits::{DispatchConfig, ParameterUploader, SyncReporter};
pub use types::{ParameterPath, SyncSummary, UploadItem, UploadOutcome};
