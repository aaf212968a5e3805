//! ログ初期化
//!
//! `STOREFRONT_LOG` があればそれをフィルタとして使い、なければ `-v` の回数から決める。

use crate::env;
use tracing_subscriber::EnvFilter;

/// `-v` の回数に対応するフィルタ
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "off,storefront=warn",
        1 => "off,storefront=info",
        2 => "off,storefront=debug,reqwest=info",
        3 => "debug",
        _ => "trace",
    }
}

/// stderr 向けのロガーを初期化（2回目以降の呼び出しは無視）
pub fn init_logger(verbosity: u8) {
    let filter = EnvFilter::try_from_env(env::LOG_FILTER)
        .or_else(|_| EnvFilter::try_new(default_filter(verbosity)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init();
}
