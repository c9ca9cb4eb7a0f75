//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイント（ローカル LLM やプロキシ）を指定可能。

use crate::error::Error;
use crate::http::HttpTransport;
use crate::llm::gpt::{chat_payload, chat_response_text};
use crate::llm::provider::LlmProvider;
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    model: String,
    base_url: String,
    api_key: Option<String>,
    temperature: Option<f64>,
    transport: HttpTransport,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき "gpt-4o-mini"）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key` - API キー（None のとき Authorization を付けない）
    /// * `temperature` - 温度（None のときは送らない）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key: Option<String>,
        temperature: Option<f64>,
        transport: HttpTransport,
    ) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            model: model.unwrap_or_else(|| super::gpt::DEFAULT_MODEL.to_string()),
            base_url,
            api_key,
            temperature,
            transport,
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        self.transport.post_json(
            &self.url(),
            self.api_key.as_deref(),
            request_json.to_string(),
            "Chat completions",
        )
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        chat_response_text(response_json, "Chat completions")
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = chat_payload(&self.model, self.temperature, query, system_instruction);
        payload["stream"] = Value::Bool(false);
        Ok(payload)
    }
}
