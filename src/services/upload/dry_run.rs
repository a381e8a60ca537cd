// 何も書き込まないアップローダー（--dry-run用）

use crate::core::ParameterUploader;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Default, Clone)]
pub struct DryRunUploader;

impl DryRunUploader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ParameterUploader for DryRunUploader {
    async fn upload(&self, _name: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}
