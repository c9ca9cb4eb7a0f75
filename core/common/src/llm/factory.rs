//! プロバイダファクトリー
//!
//! プロファイルに基づいて文章生成・画像生成のプロバイダを作成します。

use crate::error::Error;
use crate::http::HttpTransport;
use crate::llm::config::ProviderProfile;
use crate::llm::echo::EchoProvider;
use crate::llm::gpt::GptProvider;
use crate::llm::image::{EchoImageProvider, ImageProvider, OpenAiImageProvider};
use crate::llm::openai_compat::OpenAiCompatProvider;
use crate::llm::provider::LlmProvider;
use crate::ports::outbound::EnvResolver;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProviderType {
    /// OpenAI（GPT）
    #[serde(rename = "openai", alias = "gpt")]
    Gpt,
    /// OpenAI Chat Completions 互換 (/chat/completions)
    #[serde(rename = "openai_compat", alias = "ollama")]
    OpenAiCompat,
    /// Echo（API を呼ばずに入力を返すだけ）
    #[serde(rename = "echo")]
    Echo,
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    Gpt(GptProvider),
    OpenAiCompat(OpenAiCompatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Gpt(p) => p.name(),
            Self::OpenAiCompat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Gpt(p) => p.make_http_request(request_json),
            Self::OpenAiCompat(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Gpt(p) => p.parse_response_text(response_json),
            Self::OpenAiCompat(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        match self {
            Self::Gpt(p) => p.make_request_payload(query, system_instruction),
            Self::OpenAiCompat(p) => p.make_request_payload(query, system_instruction),
            Self::Echo(p) => p.make_request_payload(query, system_instruction),
        }
    }
}

/// 画像プロバイダのenumラッパー
pub enum AnyImageProvider {
    OpenAi(OpenAiImageProvider),
    Echo(EchoImageProvider),
}

impl ImageProvider for AnyImageProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAi(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn generate_image(&self, prompt: &str) -> Result<String, Error> {
        match self {
            Self::OpenAi(p) => p.generate_image(prompt),
            Self::Echo(p) => p.generate_image(prompt),
        }
    }
}

/// プロファイルの api_key_env（既定 OPENAI_API_KEY）から API キーを読む
fn api_key(profile: &ProviderProfile, env: &dyn EnvResolver) -> Option<String> {
    let name = profile.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
    env.var(name)
}

fn required_api_key(profile: &ProviderProfile, env: &dyn EnvResolver) -> Result<String, Error> {
    api_key(profile, env).ok_or_else(|| {
        Error::env(format!(
            "{} environment variable is not set",
            profile.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
        ))
    })
}

/// 文章生成プロバイダを作成する
///
/// # Arguments
/// * `profile` - 解決済みプロファイル
/// * `model` - モデル名の上書き（None のときプロファイル → 各プロバイダのデフォルト）
/// * `env` - API キーを読む環境変数リゾルバ
/// * `timeout` - HTTP タイムアウト
pub fn create_provider(
    profile: &ProviderProfile,
    model: Option<String>,
    env: &dyn EnvResolver,
    timeout: Duration,
) -> Result<AnyProvider, Error> {
    let model = model.or_else(|| profile.model.clone());
    let temperature = profile.temperature.map(f64::from);
    match profile.type_ {
        ProviderType::Gpt => {
            let key = required_api_key(profile, env)?;
            Ok(AnyProvider::Gpt(GptProvider::new(
                model,
                key,
                temperature,
                HttpTransport::new(timeout)?,
            )))
        }
        ProviderType::OpenAiCompat => Ok(AnyProvider::OpenAiCompat(OpenAiCompatProvider::new(
            model,
            profile.base_url.clone(),
            api_key(profile, env),
            temperature,
            HttpTransport::new(timeout)?,
        ))),
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}

/// 画像生成プロバイダを作成する
///
/// * `image_model` - 画像モデル名（None のとき "dall-e-3"）
pub fn create_image_provider(
    profile: &ProviderProfile,
    image_model: Option<String>,
    env: &dyn EnvResolver,
    timeout: Duration,
) -> Result<AnyImageProvider, Error> {
    match profile.type_ {
        ProviderType::Gpt => Ok(AnyImageProvider::OpenAi(OpenAiImageProvider::new(
            image_model,
            None,
            Some(required_api_key(profile, env)?),
            HttpTransport::new(timeout)?,
        ))),
        ProviderType::OpenAiCompat => Ok(AnyImageProvider::OpenAi(OpenAiImageProvider::new(
            image_model,
            profile.base_url.clone(),
            api_key(profile, env),
            HttpTransport::new(timeout)?,
        ))),
        ProviderType::Echo => Ok(AnyImageProvider::Echo(EchoImageProvider)),
    }
}
