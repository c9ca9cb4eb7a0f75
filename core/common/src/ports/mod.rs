//! ポート定義（common は outbound のみ）
//!
//! 時刻・環境変数・ファイル・ログへの依存を trait にしておき、
//! enikki の usecase はこの trait だけを見る。

pub mod outbound;
