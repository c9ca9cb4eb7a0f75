//! Echoプロバイダの実装
//!
//! 実際にLLM APIを呼び出さず、ユーザー入力をそのまま応答として返します。
//! ネットワーク無しでの動作確認・テスト用に使用します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 実際の API 呼び出しは行わず、リクエストをそのまま返す
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse echo JSON: {}", e)))?;
        Ok(v["query"].as_str().map(|s| s.to_string()))
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut payload = json!({ "query": query });
        if let Some(system) = system_instruction {
            payload["system_instruction"] = json!(system);
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::driver::LlmDriver;

    #[test]
    fn test_echo_provider_name() {
        assert_eq!(EchoProvider::new().name(), "echo");
    }

    #[test]
    fn test_echo_provider_make_request_payload_with_system() {
        let payload = EchoProvider::new()
            .make_request_payload("Hello", Some("You are helpful"))
            .unwrap();
        assert_eq!(payload["query"], "Hello");
        assert_eq!(payload["system_instruction"], "You are helpful");
    }

    #[test]
    fn test_echo_round_trip_through_driver() {
        let driver = LlmDriver::new(EchoProvider::new());
        let text = driver.query("疲れた", Some("清書")).unwrap();
        assert_eq!(text, "疲れた");
    }
}
