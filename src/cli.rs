use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dmm-enhanced")]
#[command(about = "DMM APIレスポンスを型付きJSONに正規化する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 女優情報を正規化
    Actress(NormalizeArgs),

    /// 商品情報を正規化
    Item(NormalizeArgs),

    /// 設定を表示/編集
    Config {
        /// 不正レコードのスキップを既定にする (true/false)
        #[arg(long)]
        set_skip_invalid: Option<bool>,

        /// 出力JSONの整形を既定にする (true/false)
        #[arg(long)]
        set_pretty: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// 入力JSONファイル、またはJSONファイルを含むフォルダ
    #[arg(required = true)]
    pub input: PathBuf,

    /// 出力JSONファイル（省略時は標準出力）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 変換できないレコードをスキップして続行
    #[arg(long)]
    pub skip_invalid: bool,

    /// スキップしたレコードの書き出し先（--skip-invalid 時のみ）
    #[arg(short, long)]
    pub quarantine: Option<PathBuf>,

    /// 整形せずに1行で出力
    #[arg(long)]
    pub compact: bool,
}
