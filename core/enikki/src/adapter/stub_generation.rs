//! テスト用: 固定の応答を返す生成アダプタとパスワード入力


#[cfg(test)]
pub use stub::{FixedPasswordPrompt, StubImageGeneration, StubTextGeneration};
