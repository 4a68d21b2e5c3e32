//! キープアライブプローブ
//!
//! 固定間隔でバックエンドの `/health` にGETリクエストを送り、
//! ホスティングプラットフォームのアイドルスリープを防ぐ。
//! 結果は成功/ステータス異常/到達不能に分類してログに記録する。

pub mod prober;
pub mod startup;

pub use prober::Prober;
