//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! プローブの結果（成功/ステータス異常/到達不能）はエラーではなく
//! [`crate::types::ProbeOutcome`]として分類される。ここで定義するのは
//! 起動時に致命的となる設定エラーのみ。

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Target base URL is empty
    #[error("Target base URL must not be empty")]
    EmptyTargetUrl,

    /// Probe timeout is not shorter than the probe interval
    #[error(
        "Probe timeout ({timeout_secs}s) must be shorter than the probe interval ({interval_secs}s)"
    )]
    TimeoutNotBelowInterval {
        /// Configured per-probe timeout in seconds
        timeout_secs: u64,
        /// Configured probe interval in seconds
        interval_secs: u64,
    },
}

/// Result type alias (configuration)
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display_empty_url() {
        let error = ConfigError::EmptyTargetUrl;
        assert_eq!(error.to_string(), "Target base URL must not be empty");
    }

    #[test]
    fn test_config_error_display_timeout() {
        let error = ConfigError::TimeoutNotBelowInterval {
            timeout_secs: 600,
            interval_secs: 600,
        };
        assert!(error.to_string().contains("600s"));
        assert!(error.to_string().contains("shorter than"));
    }
}
