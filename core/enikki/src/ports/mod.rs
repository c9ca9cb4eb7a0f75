//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（記録先・文章生成・画像生成・パスワード入力）を使うための trait

pub mod inbound;
pub mod outbound;
