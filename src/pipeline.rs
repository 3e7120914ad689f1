//! 入力読み込み → 一括変換 → 書き出し

use crate::batch::{normalize_batch, BatchOutcome, BatchPolicy, Record};
use crate::cli::NormalizeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{collect_input_files, load_records};
use crate::output::write_json;
use serde::Serialize;
use std::path::PathBuf;

/// 正規化の実行オプション
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub policy: BatchPolicy,
    pub quarantine: Option<PathBuf>,
    pub pretty: bool,
}

impl NormalizeOptions {
    /// CLI引数と設定を合成する（CLIのフラグが優先）
    pub fn from_args(args: &NormalizeArgs, config: &Config) -> Self {
        let policy = if args.skip_invalid || config.skip_invalid {
            BatchPolicy::SkipInvalid
        } else {
            BatchPolicy::FailFast
        };

        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            policy,
            quarantine: args.quarantine.clone(),
            pretty: config.pretty && !args.compact,
        }
    }
}

/// 実行結果の集計
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub files: usize,
    pub total: usize,
    pub converted: usize,
    pub rejected: usize,
    pub generated_at: String,
}

/// 入力を読み込んで正規化し、結果を書き出す
pub fn run<R: Record>(options: &NormalizeOptions) -> Result<BatchReport> {
    let files = collect_input_files(&options.input)?;

    let mut outcome = BatchOutcome::<R>::default();
    for path in &files {
        let records = load_records(path, R::LIST_KEY)?;
        tracing::info!(file = %path.display(), records = records.len(), "loaded");
        outcome.extend(normalize_batch(path, records, options.policy)?);
    }

    write_json(&outcome.converted, options.output.as_deref(), options.pretty)?;

    if let Some(quarantine) = &options.quarantine {
        if options.policy == BatchPolicy::SkipInvalid {
            write_json(&outcome.rejected, Some(quarantine), options.pretty)?;
            tracing::info!(
                path = %quarantine.display(),
                rejected = outcome.rejected.len(),
                "quarantine written"
            );
        } else {
            tracing::warn!("--quarantine は --skip-invalid 指定時のみ有効です");
        }
    }

    let report = BatchReport {
        files: files.len(),
        total: outcome.total(),
        converted: outcome.converted.len(),
        rejected: outcome.rejected.len(),
        generated_at: chrono::Local::now().to_rfc3339(),
    };
    tracing::info!(
        files = report.files,
        total = report.total,
        converted = report.converted,
        rejected = report.rejected,
        "normalization finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(skip_invalid: bool, compact: bool) -> NormalizeArgs {
        NormalizeArgs {
            input: PathBuf::from("in.json"),
            output: None,
            skip_invalid,
            quarantine: None,
            compact,
        }
    }

    #[test]
    fn test_options_default_config() {
        let options = NormalizeOptions::from_args(&args(false, false), &Config::default());
        assert_eq!(options.policy, BatchPolicy::FailFast);
        assert!(options.pretty);
    }

    #[test]
    fn test_options_flags_override() {
        let options = NormalizeOptions::from_args(&args(true, true), &Config::default());
        assert_eq!(options.policy, BatchPolicy::SkipInvalid);
        assert!(!options.pretty);
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            skip_invalid: true,
            pretty: false,
        };
        let options = NormalizeOptions::from_args(&args(false, false), &config);
        assert_eq!(options.policy, BatchPolicy::SkipInvalid);
        assert!(!options.pretty);
    }
}
