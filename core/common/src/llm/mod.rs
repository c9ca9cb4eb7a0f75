//! LLMドライバーとプロバイダの実装
//!
//! 異なるプロバイダ（OpenAI、OpenAI互換、Echo）で共通する文章生成・画像生成の処理を提供します。

pub mod config;
pub mod driver;
pub mod echo;
pub mod factory;
pub mod gpt;
pub mod image;
pub mod openai_compat;
pub mod provider;

pub use config::{ProfilesConfig, ProviderProfile};
pub use driver::LlmDriver;
pub use factory::{
    create_image_provider, create_provider, AnyImageProvider, AnyProvider, ProviderType,
};
pub use image::ImageProvider;
pub use provider::LlmProvider;
