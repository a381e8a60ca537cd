// 設定管理機能
// 設定ファイルの読み込みとディスパッチ設定

pub mod file;
pub mod implementations;

pub use file::{SyncConfig, CONFIG_FILE_NAME, LEGACY_CONFIG_FILE_NAME};
pub use implementations::DefaultDispatchConfig;
