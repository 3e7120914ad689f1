//! DMM Enhanced
//!
//! DMM APIのレスポンスを型付きのJSONに正規化するCLIのライブラリ部分。
//! 変換ロジック本体は `dmm-enhanced-common` にある。

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod pipeline;

pub use batch::{normalize_batch, BatchOutcome, BatchPolicy, Record, Rejected};
pub use error::{DmmEnhancedError, Result};
pub use pipeline::{run, BatchReport, NormalizeOptions};
