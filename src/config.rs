//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and the
//! probe configuration resolved once at startup.

use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// 監視対象のヘルスチェックパス（固定）
pub const HEALTH_PATH: &str = "/health";

/// Documented placeholder target. Must be overridden in real deployments.
pub const DEFAULT_TARGET_URL: &str = "https://your-app.up.railway.app";

/// デフォルトのプローブ間隔（秒）
const DEFAULT_INTERVAL_SECS: u64 = 600;

/// デフォルトのプローブタイムアウト（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Get an environment variable
///
/// # Returns
/// * `Some(value)` - The environment variable value
/// * `None` - The variable is not set
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get an environment variable with a default value
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The default value to return if the variable is not set
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default when the variable is unset or fails to parse.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    get_env(name).and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Keep-alive probe configuration
///
/// 起動時に一度だけ環境変数から解決され、以後は不変。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Base URL of the monitored backend.
    pub base_url: String,
    /// Interval between probe attempts.
    pub interval: Duration,
    /// Per-request timeout. Must be shorter than `interval`.
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Load probe configuration from environment variables.
    pub fn from_env() -> Self {
        let base_url = get_env_or("KEEPWARM_TARGET_URL", DEFAULT_TARGET_URL);
        let interval_secs =
            get_env_parse("KEEPWARM_INTERVAL_SECS", DEFAULT_INTERVAL_SECS);
        let timeout_secs = get_env_parse("KEEPWARM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            interval: Duration::from_secs(interval_secs),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Validate the configuration before the first probe.
    ///
    /// タイムアウトが間隔より短いことを保証する。これによりプローブが
    /// 次のtickを超えて残ることはない（同時実行は起こらない）。
    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyTargetUrl);
        }
        if self.timeout >= self.interval {
            return Err(ConfigError::TimeoutNotBelowInterval {
                timeout_secs: self.timeout.as_secs(),
                interval_secs: self.interval.as_secs(),
            });
        }
        Ok(())
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), HEALTH_PATH)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TARGET_URL.to_string(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
