//! 入力ファイルの収集と読み込み
//!
//! 1ファイルに含められる形:
//! - レコード1件（オブジェクト）
//! - レコードの配列
//! - APIレスポンス全体 `{"result": {"actress": [...]}}` / `{"result": {"items": [...]}}`

use crate::error::{DmmEnhancedError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 入力をJSONファイルの一覧にする
///
/// ファイルならそれ自体、フォルダなら直下の `*.json` をファイル名順に返す。
pub fn collect_input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(DmmEnhancedError::InputNotFound(input.display().to_string()));
    }

    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .max_depth(1) // 直下のみ
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && is_json_file(path))
        .collect();

    if files.is_empty() {
        return Err(DmmEnhancedError::NoInputFiles(input.display().to_string()));
    }

    files.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));
    Ok(files)
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// 1ファイル分のレコードを読み込む
///
/// `list_key` はAPIレスポンス全体が渡された場合に `result` 配下で探すキー。
/// 各レコードはJSON値のまま返す。型への変換はレコード単位で行い、
/// 1件の形が崩れていても他のレコードを巻き込まないようにする。
pub fn load_records(path: &Path, list_key: &str) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    parse_records(value, list_key).map_err(|reason| DmmEnhancedError::InvalidInput {
        path: path.display().to_string(),
        reason,
    })
}

/// JSON値からレコード列を取り出す
pub fn parse_records(value: Value, list_key: &str) -> std::result::Result<Vec<Value>, String> {
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("result") {
            Some(Value::Object(mut result)) => match result.remove(list_key) {
                Some(Value::Array(records)) => Ok(records),
                Some(Value::Null) | None => Ok(Vec::new()),
                Some(other) => Err(format!("result.{} が配列ではありません: {}", list_key, other)),
            },
            Some(other) => Err(format!("result がオブジェクトではありません: {}", other)),
            None => Ok(vec![Value::Object(map)]),
        },
        other => Err(format!("オブジェクトまたは配列が必要です: {}", other)),
    }
}
