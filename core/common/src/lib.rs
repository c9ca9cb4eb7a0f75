//! enikki 共通ライブラリ
//!
//! `enikki` コマンドが使う外界とのやり取り（LLM・HTTP・ファイル・時刻・ログ）を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// HTTP 送受信
pub mod http;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
