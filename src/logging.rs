//! tracing の初期化
//!
//! `RUST_LOG` があればそれを使い、なければ `-v` で debug、通常は warn。
//! 進捗表示(stdout)と混ざらないよう stderr に出す。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "review_scraper=debug,review_scraper_common=debug"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // 二重初期化（テスト等）は無視
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
