//! 複数レコードの一括変換
//!
//! 変換自体は純粋関数なので、1ファイル分を rayon で並列に変換し、
//! 入力順に並べ直してから方針（即時中断 / スキップ）を適用する。

use crate::error::{DmmEnhancedError, Result};
use dmm_enhanced_common::{convert_actress, convert_item, Actress, Item, RawActress, RawItem};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// 一括変換の対象になるAPI生データ
pub trait Record: DeserializeOwned + Send + Sync {
    type Output: Serialize + Send;

    /// APIレスポンス全体が渡された場合のレコード配列のキー
    const LIST_KEY: &'static str;

    /// ログに出す識別子のキー
    const LABEL_KEY: &'static str;

    fn convert(&self) -> dmm_enhanced_common::Result<Self::Output>;
}

impl Record for RawActress {
    type Output = Actress;
    const LIST_KEY: &'static str = "actress";
    const LABEL_KEY: &'static str = "id";

    fn convert(&self) -> dmm_enhanced_common::Result<Actress> {
        convert_actress(self)
    }
}

impl Record for RawItem {
    type Output = Item;
    const LIST_KEY: &'static str = "items";
    const LABEL_KEY: &'static str = "content_id";

    fn convert(&self) -> dmm_enhanced_common::Result<Item> {
        convert_item(self)
    }
}

/// JSON値1件を型付きに読み込んでから変換する
///
/// 形の崩れたレコードは `Error::Json` になり、変換失敗と同じ扱いを受ける。
pub fn convert_value<R: Record>(value: &Value) -> dmm_enhanced_common::Result<R::Output> {
    let record = R::deserialize(value)?;
    record.convert()
}

/// レコードの識別子（取れなければ空文字列）
pub fn label_of<R: Record>(value: &Value) -> String {
    match value.get(R::LABEL_KEY) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// 変換できないレコードの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// 最初の失敗で全体を中断
    #[default]
    FailFast,
    /// 失敗したレコードを除外して続行
    SkipInvalid,
}

/// スキップされたレコード（入力のJSON値をそのまま保持）
#[derive(Debug, Clone, Serialize)]
pub struct Rejected {
    pub source: String,
    pub index: usize,
    pub label: String,
    pub error: String,
    pub record: Value,
}

/// 一括変換の結果
#[derive(Debug)]
pub struct BatchOutcome<R: Record> {
    pub converted: Vec<R::Output>,
    pub rejected: Vec<Rejected>,
}

impl<R: Record> Default for BatchOutcome<R> {
    fn default() -> Self {
        Self {
            converted: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<R: Record> BatchOutcome<R> {
    pub fn total(&self) -> usize {
        self.converted.len() + self.rejected.len()
    }

    pub fn extend(&mut self, other: BatchOutcome<R>) {
        self.converted.extend(other.converted);
        self.rejected.extend(other.rejected);
    }
}

/// 1ファイル分のレコードを変換する
///
/// `FailFast` では最も若いインデックスの失敗を返す。
pub fn normalize_batch<R: Record>(
    source: &Path,
    records: Vec<Value>,
    policy: BatchPolicy,
) -> Result<BatchOutcome<R>> {
    let results: Vec<dmm_enhanced_common::Result<R::Output>> =
        records.par_iter().map(convert_value::<R>).collect();

    let mut outcome = BatchOutcome::default();
    for (index, (record, result)) in records.into_iter().zip(results).enumerate() {
        match result {
            Ok(output) => outcome.converted.push(output),
            Err(error) => match policy {
                BatchPolicy::FailFast => {
                    return Err(DmmEnhancedError::Conversion {
                        path: source.display().to_string(),
                        index,
                        label: label_of::<R>(&record),
                        source: error,
                    });
                }
                BatchPolicy::SkipInvalid => {
                    let label = label_of::<R>(&record);
                    tracing::warn!(
                        source = %source.display(),
                        index,
                        label = %label,
                        error = %error,
                        "skipping record"
                    );
                    outcome.rejected.push(Rejected {
                        source: source.display().to_string(),
                        index,
                        label,
                        error: error.to_string(),
                        record,
                    });
                }
            },
        }
    }

    tracing::debug!(
        source = %source.display(),
        converted = outcome.converted.len(),
        rejected = outcome.rejected.len(),
        "batch converted"
    );
    Ok(outcome)
}
