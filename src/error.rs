use thiserror::Error;

#[derive(Error, Debug)]
pub enum DmmEnhancedError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力が見つかりません: {0}")]
    InputNotFound(String),

    #[error("JSONファイルが見つかりません: {0}")]
    NoInputFiles(String),

    #[error("入力形式が不正: {path}: {reason}")]
    InvalidInput { path: String, reason: String },

    #[error("変換エラー: {path} [{index}] ({label}): {source}")]
    Conversion {
        path: String,
        index: usize,
        label: String,
        #[source]
        source: dmm_enhanced_common::Error,
    },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] dmm_enhanced_common::Error),
}

pub type Result<T> = std::result::Result<T, DmmEnhancedError>;
