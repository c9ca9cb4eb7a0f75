//! GPT（OpenAI Chat Completions）プロバイダの実装

use crate::error::Error;
use crate::http::HttpTransport;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// GPTプロバイダ
pub struct GptProvider {
    model: String,
    api_key: String,
    /// None のときは送らず API の既定値に任せる
    temperature: Option<f64>,
    transport: HttpTransport,
}

impl GptProvider {
    /// 新しいGPTプロバイダを作成
    ///
    /// # Arguments
    /// * `model` - モデル名（デフォルト: "gpt-4o-mini"）
    /// * `api_key` - API キー（呼び出し側が環境変数から解決する）
    /// * `temperature` - 温度パラメータ（None なら API の既定値）
    pub fn new(
        model: Option<String>,
        api_key: String,
        temperature: Option<f64>,
        transport: HttpTransport,
    ) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            temperature,
            transport,
        }
    }
}

/// Chat Completions 形式のペイロードを組み立てる（OpenAI 互換プロバイダと共用）
pub(crate) fn chat_payload(
    model: &str,
    temperature: Option<f64>,
    query: &str,
    system_instruction: Option<&str>,
) -> Value {
    let mut messages = Vec::new();

    if let Some(system) = system_instruction {
        messages.push(json!({ "role": "system", "content": system }));
    }
    messages.push(json!({ "role": "user", "content": query }));

    let mut payload = json!({
        "model": model,
        "messages": messages
    });
    if let Some(t) = temperature {
        payload["temperature"] = json!(t);
    }
    payload
}

/// Chat Completions のレスポンスから本文を取り出す（OpenAI 互換プロバイダと共用）
pub(crate) fn chat_response_text(
    response_json: &str,
    label: &str,
) -> Result<Option<String>, Error> {
    let v: Value = serde_json::from_str(response_json)
        .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

    if let Some(error) = v.get("error") {
        let error_msg = error["message"].as_str().unwrap_or("Unknown error");
        return Err(Error::http(format!("{} error: {}", label, error_msg)));
    }

    Ok(v["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string()))
}

impl LlmProvider for GptProvider {
    fn name(&self) -> &str {
        "gpt"
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        self.transport.post_json(
            CHAT_COMPLETIONS_URL,
            Some(&self.api_key),
            request_json.to_string(),
            "OpenAI API",
        )
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        chat_response_text(response_json, "OpenAI API")
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        Ok(chat_payload(
            &self.model,
            self.temperature,
            query,
            system_instruction,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn provider() -> GptProvider {
        GptProvider::new(
            None,
            "test-key".to_string(),
            None,
            HttpTransport::new(Duration::from_secs(1)).unwrap(),
        )
    }

    #[test]
    fn test_gpt_provider_defaults() {
        let p = provider();
        assert_eq!(p.name(), "gpt");
        assert_eq!(p.model, "gpt-4o-mini");
        assert_eq!(p.temperature, None);
    }

    #[test]
    fn test_make_request_payload_simple() {
        let payload = provider().make_request_payload("Hello", None).unwrap();
        assert_eq!(payload["messages"].as_array().unwrap().len(), 1);
        assert_eq!(payload["model"], "gpt-4o-mini");
        // 温度が未設定なら送らない
        assert!(payload.get("temperature").is_none());
    }

    #[test]
    fn test_make_request_payload_with_temperature() {
        let p = GptProvider::new(
            None,
            "test-key".to_string(),
            Some(0.3),
            HttpTransport::new(Duration::from_secs(1)).unwrap(),
        );
        let payload = p.make_request_payload("Hello", None).unwrap();
        assert_eq!(payload["temperature"], 0.3);
    }

    #[test]
    fn test_make_request_payload_with_system() {
        let payload = provider()
            .make_request_payload("疲れた", Some("日記に清書してください"))
            .unwrap();
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2); // system + user
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["content"], "疲れた");
    }

    #[test]
    fn test_parse_response_text() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"【清書された日記】\n晴れ"}}]}"#;
        let text = provider().parse_response_text(json).unwrap();
        assert_eq!(text.as_deref(), Some("【清書された日記】\n晴れ"));
    }

    #[test]
    fn test_parse_response_error_object() {
        let json = r#"{"error":{"message":"Rate limit"}}"#;
        let err = provider().parse_response_text(json).unwrap_err();
        assert!(err.to_string().contains("Rate limit"));
    }
}
