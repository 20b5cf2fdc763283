use tracing_subscriber::EnvFilter;

/// ログ出力を初期化（stderr）
///
/// `RUST_LOG` があればそれを使い、なければ `--verbose` で debug、通常は warn。
/// 進捗表示は標準出力に出すため、ログは標準エラーへ分ける。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{default_level},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn"
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
