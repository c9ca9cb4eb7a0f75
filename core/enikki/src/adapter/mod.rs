//! enikki のアダプタ（記録先・生成 API・設定・端末入力）

pub(crate) mod config;
pub(crate) mod image_generation;
pub(crate) mod llm_text_generation;
pub(crate) mod memory_record_store;
pub(crate) mod sheets_record_store;
pub(crate) mod tty_password_prompt;
pub(crate) mod stub_generation;

pub(crate) use config::load_app_config;
pub(crate) use image_generation::ProviderImageGeneration;
pub(crate) use llm_text_generation::ProviderTextGeneration;
pub(crate) use memory_record_store::MemoryRecordStore;
pub(crate) use sheets_record_store::SheetsRecordStore;
pub(crate) use tty_password_prompt::TtyPasswordPrompt;
#[cfg(test)]
pub(crate) use stub_generation::{FixedPasswordPrompt, StubImageGeneration, StubTextGeneration};
