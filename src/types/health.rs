//! ヘルスチェック型定義
//!
//! プローブ試行の結果分類と、バックエンドの `/health` レスポンス契約

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// バックエンド `/health` エンドポイントのレスポンスボディ
///
/// バックエンドが正常な場合、ステータス文字列とモデル状態を返す。
/// 契約外のボディは無視されるため、全フィールドを寛容に受ける。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthReport {
    /// サービスステータス（例: "healthy"）
    pub status: String,
    /// バックエンド側のタイムスタンプ（UNIX秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    /// 埋め込みモデルの状態
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_status: Option<ModelStatus>,
}

impl HealthReport {
    /// 埋め込みモデルがロード済みかどうか
    ///
    /// モデル状態が欠けている場合はfalse（ウォーム状態とは見なさない）。
    pub fn model_ready(&self) -> bool {
        self.model_status
            .as_ref()
            .and_then(|m| m.initialized)
            .unwrap_or(false)
    }
}

/// 埋め込みモデルの状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelStatus {
    /// モデル名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// feature fusion有効フラグ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_fusion: Option<bool>,
    /// 実行デバイス（例: "cpu", "cuda:0"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// モデルロード完了フラグ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialized: Option<bool>,
}

/// プローブ結果の分類
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// 2xxレスポンス
    Healthy {
        /// レスポンスまでの所要時間（ミリ秒）
        latency_ms: u32,
        /// デコードできた場合のレスポンスボディ
        report: Option<HealthReport>,
    },
    /// 2xx以外のHTTPステータス
    Degraded {
        /// HTTPステータスコード
        status: u16,
    },
    /// トランスポートレベルの失敗（DNS、接続拒否、タイムアウト）
    Unreachable {
        /// 失敗内容の説明
        message: String,
    },
}

/// 1回のプローブ試行
///
/// tickごとに生成され、ログ出力されたあと破棄される。
/// 試行をまたいだ履歴や連続失敗カウンタは持たない。
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeAttempt {
    /// プローブ対象URL
    pub target: String,
    /// 試行開始時刻
    pub checked_at: DateTime<Utc>,
    /// 結果分類
    pub outcome: ProbeOutcome,
}
