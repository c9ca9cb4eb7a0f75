//! Outbound ポート: アプリが外界（記録先・生成 API・端末入力）を使うための trait

pub mod image_generation;
pub mod password_prompt;
pub mod record_store;
pub mod text_generation;

pub use image_generation::ImageGeneration;
pub use password_prompt::PasswordPrompt;
pub use record_store::RecordStore;
pub use text_generation::TextGeneration;
