// AWS CLI (`aws ssm put-parameter`) によるアップロード実装

use crate::core::ParameterUploader;
use anyhow::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use tokio::process::Command;

/// AWS CLIを子プロセスとして呼び出すアップローダー
///
/// 引数はシェルを経由せずに渡すため、値に引用符や `$` を含んでもそのまま送られる。
#[derive(Debug, Clone)]
pub struct AwsCliUploader {
    program: OsString,
    region: String,
    profile: Option<String>,
}

impl AwsCliUploader {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            program: OsString::from("aws"),
            region: region.into(),
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: Option<&str>) -> Self {
        self.profile = profile.map(str::to_string);
        self
    }

    /// `aws` 以外の実行ファイルを使う
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// put-parameter に渡す引数列
    pub fn build_args(&self, name: &str, value: &str) -> Vec<String> {
        let mut args = vec![
            "ssm".to_string(),
            "put-parameter".to_string(),
            "--name".to_string(),
            name.to_string(),
            // `-----BEGIN ...` のような値がオプションと誤認されないよう `=` で連結
            format!("--value={value}"),
            "--type".to_string(),
            "SecureString".to_string(),
            "--overwrite".to_string(),
            "--region".to_string(),
            self.region.clone(),
        ];
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        args
    }
}

#[async_trait]
impl ParameterUploader for AwsCliUploader {
    async fn upload(&self, name: &str, value: &str) -> Result<()> {
        let output = Command::new(&self.program)
            .args(self.build_args(name, value))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                anyhow::anyhow!("failed to run {}: {e}", self.program.to_string_lossy())
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            anyhow::bail!("{} exited with {}", self.program.to_string_lossy(), output.status);
        }
        anyhow::bail!("{stderr}")
    }
}
