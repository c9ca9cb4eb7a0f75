//! 文章生成の Outbound ポート

use common::error::Error;

/// system + user で応答全文を 1 回で取得する
pub trait TextGeneration: Send + Sync {
    fn complete_text(&self, system_instruction: &str, user_message: &str) -> Result<String, Error>;
}
