//! Logging initialization
//!
//! tracing-subscriberを初期化する。ログレベルは環境変数
//! `KEEPWARM_LOG_LEVEL`（デフォルト: info）で制御する。

use tracing_subscriber::EnvFilter;

use crate::config::get_env_or;

/// Initialize the global tracing subscriber.
///
/// Returns an error if a global subscriber has already been installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = get_env_or("KEEPWARM_LOG_LEVEL", "info");
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}
