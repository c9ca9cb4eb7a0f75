//! 画像生成の Outbound ポート

use common::error::Error;

/// プロンプトから画像を生成し、参照（URL）を返す
pub trait ImageGeneration: Send + Sync {
    fn generate_image(&self, prompt: &str) -> Result<String, Error>;
}
