//! キープアライブプローバー
//!
//! 固定間隔のプローブループ本体。1プローブ=1リクエスト=1ログ行。
//! どの結果もループを止めず、次のtickは常に通常の間隔で発火する。

use std::time::Instant;

use chrono::Utc;
use reqwest::Client;
use tokio::time::interval;
use tracing::{error, info, warn};

use crate::config::ProbeConfig;
use crate::types::{HealthReport, ProbeAttempt, ProbeOutcome};

/// プローブリクエストのUser-Agent
const USER_AGENT: &str = concat!("keepwarm/", env!("CARGO_PKG_VERSION"));

/// キープアライブプローバー
///
/// 設定された間隔でヘルスエンドポイントにGETリクエストを送信し、
/// 結果を分類してログに記録する。
#[derive(Clone)]
pub struct Prober {
    /// プローブ設定（起動後は不変）
    config: ProbeConfig,
    /// HTTPクライアント
    client: Client,
}

impl Prober {
    /// 新しいプローバーを作成
    ///
    /// クライアントには設定されたタイムアウトと識別用User-Agentを適用する。
    pub fn new(config: ProbeConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// プローブループを実行（プロセス終了まで戻らない）
    ///
    /// `interval()` は初回tickが即時に発火する。各プローブはインラインで
    /// awaitされ、タイムアウト < 間隔の検証と合わせて同時実行は起こらない。
    pub async fn run(&self) {
        let mut timer = interval(self.config.interval);

        info!(
            url = %self.config.health_url(),
            interval_secs = self.config.interval.as_secs(),
            timeout_secs = self.config.timeout.as_secs(),
            "Keep-alive prober started"
        );

        loop {
            timer.tick().await;

            let attempt = self.probe_once().await;
            log_attempt(&attempt);
        }
    }

    /// 単一のプローブ試行
    ///
    /// 結果は必ず分類値として返る。ネットワーク/HTTPレベルの失敗が
    /// 呼び出し側にエラーとして伝播することはない。
    pub async fn probe_once(&self) -> ProbeAttempt {
        let target = self.config.health_url();
        let checked_at = Utc::now();
        let start = Instant::now();

        let outcome = match self.client.get(&target).send().await {
            Ok(response) if response.status().is_success() => {
                let latency_ms = start.elapsed().as_millis() as u32;
                // ボディのデコードはベストエフォート。契約外のボディでも
                // 2xxである限りHealthyのまま。
                let report = response.json::<HealthReport>().await.ok();
                ProbeOutcome::Healthy { latency_ms, report }
            }
            Ok(response) => ProbeOutcome::Degraded {
                status: response.status().as_u16(),
            },
            Err(e) => ProbeOutcome::Unreachable {
                message: e.to_string(),
            },
        };

        ProbeAttempt {
            target,
            checked_at,
            outcome,
        }
    }
}

/// プローブ結果のログ出力（1試行につき1行）
pub fn log_attempt(attempt: &ProbeAttempt) {
    match &attempt.outcome {
        ProbeOutcome::Healthy { latency_ms, report } => match report {
            Some(report) => info!(
                url = %attempt.target,
                latency_ms = latency_ms,
                status = %report.status,
                model_ready = report.model_ready(),
                "Keep-alive probe succeeded"
            ),
            None => info!(
                url = %attempt.target,
                latency_ms = latency_ms,
                "Keep-alive probe succeeded"
            ),
        },
        ProbeOutcome::Degraded { status } => warn!(
            url = %attempt.target,
            status = status,
            "Keep-alive probe returned unexpected status"
        ),
        ProbeOutcome::Unreachable { message } => error!(
            url = %attempt.target,
            error = %message,
            "Keep-alive probe failed"
        ),
    }
}
