//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 変換系のエラーはすべて致命的で、最初に見つかったものだけが返る。
#[derive(Error, Debug)]
pub enum Error {
    /// 数値文字列フィールドが空でも数値でもない
    #[error("{field} is not numeric: {raw:?}")]
    MalformedNumericField { field: String, raw: String },

    /// `_` で3つ以上に分割されるコンポーネントID
    #[error("item component id has unexpected format: {id:?}")]
    MalformedComponentId { id: String },

    /// `ruby` / `classify` 以外の接尾辞
    #[error("item component has unexpected suffix {suffix:?}: id={id:?}, name={name:?}")]
    UnexpectedComponentSuffix {
        id: String,
        suffix: String,
        name: String,
    },

    /// 配信種別ラベルが空
    #[error("deliveries.delivery[{index}] has empty type (price={price:?})")]
    MissingDeliveryType { index: usize, price: String },

    #[error("iteminfo[{category}]: {source}")]
    ItemInfo {
        category: String,
        #[source]
        source: Box<Error>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed_numeric(field: impl Into<String>, raw: &str) -> Self {
        Error::MalformedNumericField {
            field: field.into(),
            raw: raw.to_string(),
        }
    }

    /// ラッパー（`ItemInfo`）を剥がした元のエラー
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::ItemInfo { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
