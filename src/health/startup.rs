//! 起動時ウォームアップ
//!
//! プロセス起動直後に1回即時プローブを実行し、バックエンドの
//! コールドスタートを早期に解消する。間隔スケジュールとは独立。

use tracing::info;

use super::prober::{log_attempt, Prober};

/// 起動時の即時ウォームアッププローブ
///
/// 間隔ループの初回tickとは別に1回プローブする。バックエンドが
/// スリープ中でも、重いモデルのロードをこの時点で開始させられる。
pub async fn run_warmup_probe(prober: &Prober) {
    info!("Running startup warmup probe...");

    let attempt = prober.probe_once().await;
    log_attempt(&attempt);

    info!("Startup warmup probe completed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProbeConfig;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_warmup_probe_hits_health_endpoint_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = ProbeConfig {
            base_url: server.uri(),
            interval: Duration::from_secs(600),
            timeout: Duration::from_secs(1),
        };

        run_warmup_probe(&Prober::new(config)).await;
    }

    #[tokio::test]
    async fn test_warmup_probe_swallows_failure() {
        // 到達不能でもパニック・エラー伝播しない
        let config = ProbeConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            interval: Duration::from_secs(600),
            timeout: Duration::from_secs(1),
        };

        run_warmup_probe(&Prober::new(config)).await;
    }
}
