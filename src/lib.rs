//! keepwarm
//!
//! サーバーレスバックエンドのアイドルスリープを防ぐキープアライブプローブ。
//! 一定間隔で `/health` にGETリクエストを送り、結果をログに記録する。

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エラー型定義
pub mod error;

/// キープアライブプローブ
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 型定義
pub mod types;
