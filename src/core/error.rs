// 同期処理のカスタムエラー型定義

use std::path::{Path, PathBuf};
use thiserror::Error;

/// パラメータ同期処理のエラー型
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("設定ファイルが見つかりません: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("設定ファイルは既に存在します: {path}")]
    ConfigAlreadyExists { path: PathBuf },

    #[error("設定ファイルの解析エラー: {path} - {source}")]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("環境 '{environment}' は設定ファイルに定義されていません")]
    UnknownEnvironment { environment: String },

    #[error("envファイルが見つかりません: {path}")]
    EnvFileNotFound { path: PathBuf },

    #[error("envファイルの解析エラー: {path} - {reason}")]
    EnvFileParseError { path: PathBuf, reason: String },

    #[error("I/Oエラー: {path} - {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} sync failed: {reason}")]
    UploadError { name: String, reason: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl SyncError {
    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn config_already_exists(path: impl AsRef<Path>) -> Self {
        Self::ConfigAlreadyExists {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn config_parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::ConfigParseError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_environment(environment: impl Into<String>) -> Self {
        Self::UnknownEnvironment {
            environment: environment.into(),
        }
    }

    pub fn env_file_not_found(path: impl AsRef<Path>) -> Self {
        Self::EnvFileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn env_file_parse(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::EnvFileParseError {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 単一アイテムのアップロード失敗
    pub fn upload(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UploadError {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// アップロード失敗はアイテム単位で握りつぶされ、実行全体は継続する。
    /// それ以外は実行開始前の入力エラーか、ワーカーの異常終了。
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::UploadError { .. } => true,
            Self::ConfigNotFound { .. }
            | Self::ConfigAlreadyExists { .. }
            | Self::ConfigParseError { .. }
            | Self::ValidationError { .. }
            | Self::UnknownEnvironment { .. }
            | Self::EnvFileNotFound { .. }
            | Self::EnvFileParseError { .. }
            | Self::IoError { .. } => false,
            Self::TaskError { .. } | Self::InternalError { .. } => false,
        }
    }

    /// ユーザー向けの対処方法
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => Some("`param_sync init` で設定ファイルを作成してください"),
            Self::ConfigAlreadyExists { .. } => Some("上書きする場合は --force を指定してください"),
            Self::UnknownEnvironment { .. } => Some("envFile に環境名とファイルを追加してください"),
            Self::EnvFileNotFound { .. } => {
                Some("envFile のパスは設定ファイルのディレクトリからの相対パスです")
            }
            _ => None,
        }
    }
}

/// 同期処理の結果型
pub type SyncResult<T> = std::result::Result<T, SyncError>;

impl From<anyhow::Error> for SyncError {
    fn from(error: anyhow::Error) -> Self {
        SyncError::InternalError { source: error }
    }
}

impl From<tokio::task::JoinError> for SyncError {
    fn from(error: tokio::task::JoinError) -> Self {
        SyncError::TaskError { source: error }
    }
}
