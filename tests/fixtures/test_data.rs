// テストデータ生成ヘルパー

use param_sync::services::CONFIG_FILE_NAME;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 設定ファイルと `.env.development` を持つ一時プロジェクトを作る
pub fn create_project(base_path: &str, concurrency: i64, env_content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

    let config = serde_json::json!({
        "basePath": base_path,
        "region": "ap-northeast-2",
        "cliProfile": "ci",
        "concurrency": concurrency,
        "envFile": {
            "dev": ".env.development",
            "prod": ".env.production"
        }
    });
    fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap())
        .expect("Failed to write config");
    fs::write(temp_dir.path().join(".env.development"), env_content)
        .expect("Failed to write env file");

    (temp_dir, config_path)
}

/// 呼び出しを `log` に追記する偽の aws コマンドを作る
///
/// パラメータ名が `/FAIL_ME` で終わる場合は AccessDenied で失敗する。
#[cfg(unix)]
pub fn create_fake_aws_cli(dir: &Path) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("aws-calls.log");
    let script = dir.join("fake-aws");
    let body = format!(
        r#"#!/bin/sh
case "$4" in
  */FAIL_ME)
    echo "An error occurred (AccessDeniedException) when calling the PutParameter operation" >&2
    exit 254
    ;;
esac
echo "$@" >> "{}"
exit 0
"#,
        log.display()
    );
    fs::write(&script, body).expect("Failed to write fake aws");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod fake aws");

    (script, log)
}

/// 偽 aws のログから `--name` の値を取り出す
pub fn logged_names(log: &Path) -> Vec<String> {
    let content = fs::read_to_string(log).unwrap_or_default();
    content
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            parts.find(|part| *part == "--name")?;
            parts.next().map(str::to_string)
        })
        .collect()
}
