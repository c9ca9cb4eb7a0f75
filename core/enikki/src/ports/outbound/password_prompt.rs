//! パスワード入力の Outbound ポート

use common::error::Error;

/// usecase はこの trait にのみ依存し、adapter が端末からの読み取りを行う。
pub trait PasswordPrompt: Send + Sync {
    /// プロンプトを表示して 1 行読み取る（末尾の改行は除く）
    fn read_password(&self, prompt: &str) -> Result<String, Error>;
}
