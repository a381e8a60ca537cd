use crate::core::{SyncError, SyncResult, UploadItem};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

// KEY=VALUE / KEY: VALUE 形式の1行。引用符付きの値は複数行にまたがってよい
const LINE_PATTERN: &str = r#"(?m)^\s*(?:export\s+)?([A-Za-z0-9_.-]+)(?:\s*=\s*?|:\s+?)(\s*'(?:\\'|[^'])*'|\s*"(?:\\"|[^"])*"|\s*`(?:\\`|[^`])*`|[^#\r\n]+)?\s*(?:#.*)?$"#;

fn line_pattern() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| Regex::new(LINE_PATTERN).expect("Invalid dotenv line pattern"))
}

/// dotenv形式のファイルをアップロード対象に変換する
///
/// 値は書かれたとおりに扱い、`$VAR` の展開は行わない。
/// 形式に合わない行は読み飛ばす。
pub struct EnvFileReader;

impl EnvFileReader {
    /// ファイルを読み込み、値が空でないアイテムを出現順に返す
    pub fn read_items(path: &Path) -> SyncResult<Vec<UploadItem>> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SyncError::env_file_not_found(path),
            _ => SyncError::io(path, e),
        })?;
        let content = String::from_utf8(bytes)
            .map_err(|_| SyncError::env_file_parse(path, "UTF-8として読み込めません"))?;
        Ok(Self::parse_str(&content))
    }

    /// 文字列から直接解析する
    pub fn parse_str(content: &str) -> Vec<UploadItem> {
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        let pairs = line_pattern()
            .captures_iter(&normalized)
            .filter_map(|caps| {
                let key = caps.get(1)?.as_str().to_string();
                let raw = caps.get(2).map(|m| m.as_str()).unwrap_or("");
                Some((key, unquote(raw)))
            })
            .collect();
        Self::into_items(pairs)
    }

    // 重複キーは後勝ち、位置は最初の出現位置のまま
    fn into_items(pairs: Vec<(String, String)>) -> Vec<UploadItem> {
        let mut items: Vec<UploadItem> = Vec::with_capacity(pairs.len());
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (key, value) in pairs {
            match positions.get(&key) {
                Some(&index) => items[index].value = value,
                None => {
                    positions.insert(key.clone(), items.len());
                    items.push(UploadItem::new(key, value));
                }
            }
        }

        items.retain(|item| !item.value.is_empty());
        items
    }
}

// 両端の同じ引用符を外す。ダブルクォートのみ \n と \r を改行に変換し、他のエスケープはそのまま残す
fn unquote(raw: &str) -> String {
    let value = raw.trim();
    let quote = match value.chars().next() {
        Some(q @ ('\'' | '"' | '`')) => q,
        _ => return value.to_string(),
    };

    let inner = if value.len() >= 2 && value.ends_with(quote) {
        &value[1..value.len() - 1]
    } else {
        value
    };

    if quote == '"' {
        inner.replace("\\n", "\n").replace("\\r", "\r")
    } else {
        inner.to_string()
    }
}
