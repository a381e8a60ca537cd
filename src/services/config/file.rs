// 設定ファイル (param-sync.json) の読み込み・生成

use crate::core::{SyncError, SyncResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// デフォルトの設定ファイル名
pub const CONFIG_FILE_NAME: &str = "param-sync.json";

/// 旧名の設定ファイル。スキーマは同じ
pub const LEGACY_CONFIG_FILE_NAME: &str = "seu-cli.json";

/// 設定ファイルのスキーマ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    #[serde(default)]
    pub base_path: String,

    #[serde(default)]
    pub region: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli_profile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_file: Option<BTreeMap<String, String>>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        let env_file = BTreeMap::from([
            ("dev".to_string(), ".env.development".to_string()),
            ("prod".to_string(), ".env.production".to_string()),
        ]);

        Self {
            base_path: "your-base-path".to_string(),
            region: "ap-northeast-2".to_string(),
            cli_profile: Some("default".to_string()),
            concurrency: Some(1),
            env_file: Some(env_file),
        }
    }
}

impl SyncConfig {
    /// 読み込む設定ファイルを決める
    ///
    /// 既定名のファイルが無く、同じディレクトリに旧名のファイルがあればそちらを使う。
    pub fn locate(path: &Path) -> PathBuf {
        let is_default_name = path.file_name().is_some_and(|name| name == CONFIG_FILE_NAME);
        if is_default_name && !path.exists() {
            let legacy = path.with_file_name(LEGACY_CONFIG_FILE_NAME);
            if legacy.is_file() {
                return legacy;
            }
        }
        path.to_path_buf()
    }

    /// 設定ファイルを読み込み、検証する
    pub fn load(path: &Path) -> SyncResult<Self> {
        if !path.exists() {
            return Err(SyncError::config_not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| SyncError::config_parse(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// デフォルト設定ファイルを書き出す
    pub fn init(path: &Path, force: bool) -> SyncResult<Self> {
        if path.exists() && !force {
            return Err(SyncError::config_already_exists(path));
        }

        let config = Self::default();
        let content = serde_json::to_string_pretty(&config)
            .map_err(|e| SyncError::internal(e.into()))?;
        fs::write(path, content).map_err(|e| SyncError::io(path, e))?;
        Ok(config)
    }

    /// 必須項目の検証
    pub fn validate(&self) -> SyncResult<()> {
        if self.base_path.trim().is_empty() {
            return Err(SyncError::validation("basePath", "basePath is required"));
        }
        if self.region.trim().is_empty() {
            return Err(SyncError::validation("region", "region is required"));
        }
        if self.env_file.is_none() {
            return Err(SyncError::validation("envFile", "envFile is required"));
        }
        Ok(())
    }

    /// 空文字のプロファイルは未指定として扱う
    pub fn profile(&self) -> Option<&str> {
        self.cli_profile
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// 環境名に対応するenvファイルのパスを解決する
    ///
    /// 相対パスは設定ファイルのあるディレクトリを基準にする。
    pub fn resolve_env_file(&self, config_path: &Path, environment: &str) -> SyncResult<PathBuf> {
        let file_name = self.env_file_name(environment)?;

        let base_dir = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let env_path = base_dir.join(file_name);

        if !env_path.is_file() {
            return Err(SyncError::env_file_not_found(&env_path));
        }
        Ok(env_path)
    }

    /// 環境名に対応する、設定ファイルに書かれたとおりのenvファイル名
    pub fn env_file_name(&self, environment: &str) -> SyncResult<&str> {
        self.env_file
            .as_ref()
            .and_then(|files| files.get(environment))
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| SyncError::unknown_environment(environment))
    }

    /// 定義済みの環境名一覧
    pub fn environments(&self) -> Vec<&str> {
        self.env_file
            .as_ref()
            .map(|files| files.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
