use clap::Parser;
use dmm_enhanced::{cli, config, error, logging, pipeline};
use dmm_enhanced_common::{RawActress, RawItem};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use pipeline::NormalizeOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Actress(args) => {
            eprintln!("👤 dmm-enhanced - 女優情報の正規化");
            let options = NormalizeOptions::from_args(&args, &config);
            let report = pipeline::run::<RawActress>(&options)?;
            print_summary(&report);
        }

        Commands::Item(args) => {
            eprintln!("📦 dmm-enhanced - 商品情報の正規化");
            let options = NormalizeOptions::from_args(&args, &config);
            let report = pipeline::run::<RawItem>(&options)?;
            print_summary(&report);
        }

        Commands::Config { set_skip_invalid, set_pretty, show } => {
            let mut config = config;
            let changed = set_skip_invalid.is_some() || set_pretty.is_some();

            if let Some(skip_invalid) = set_skip_invalid {
                config.skip_invalid = skip_invalid;
            }
            if let Some(pretty) = set_pretty {
                config.pretty = pretty;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  不正レコードをスキップ: {}", config.skip_invalid);
                println!("  整形出力: {}", config.pretty);
            }
        }
    }

    Ok(())
}

fn print_summary(report: &pipeline::BatchReport) {
    eprintln!(
        "✔ {}ファイル / {}件中 {}件を変換（スキップ {}件）",
        report.files, report.total, report.converted, report.rejected
    );
}
