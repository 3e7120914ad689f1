use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ログ出力を初期化する
///
/// `RUST_LOG` があればそれを優先する。出力先は標準エラー
/// （標準出力は変換結果のJSONに使う）。
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "dmm_enhanced=debug,dmm_enhanced_common=debug"
    } else {
        "dmm_enhanced=info,dmm_enhanced_common=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
