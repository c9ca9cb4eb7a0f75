//! HTTP 送受信の共通処理（reqwest blocking）
//!
//! LLM・画像・スプレッドシートの各アダプタが使う。タイムアウトはここで一括して掛ける。

use crate::error::Error;
use serde_json::Value;
use std::time::Duration;

/// 既定のタイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// JSON API 用の同期 HTTP クライアント
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// JSON ボディを POST し、成功時はレスポンス本文を返す
    ///
    /// * `label` - エラーメッセージの接頭辞（例: "OpenAI API"）
    pub fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: String,
        label: &str,
    ) -> Result<String, Error> {
        let mut builder = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body);
        if let Some(token) = bearer {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;
        read_body(response, label)
    }

    /// GET し、成功時はレスポンス本文を返す
    pub fn get(&self, url: &str, bearer: Option<&str>, label: &str) -> Result<String, Error> {
        let mut builder = self.client.get(url);
        if let Some(token) = bearer {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;
        read_body(response, label)
    }
}

fn read_body(response: reqwest::blocking::Response, label: &str) -> Result<String, Error> {
    let status = response.status();
    let response_text = response
        .text()
        .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(Error::http(format!(
            "{} error: {}",
            label,
            api_error_message(status.as_u16(), &response_text)
        )));
    }
    Ok(response_text)
}

/// エラーレスポンスから人間向けメッセージを取り出す（`error.message` があればそれを使う）
pub fn api_error_message(status: u16, response_text: &str) -> String {
    serde_json::from_str::<Value>(response_text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
}
