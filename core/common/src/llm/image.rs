//! 画像生成プロバイダ
//!
//! 日記の挿絵を生成する。OpenAI Images API（DALL-E 3）と、API を呼ばない Echo 実装を持つ。

use crate::error::Error;
use crate::http::HttpTransport;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
const IMAGE_SIZE: &str = "1024x1024";
const IMAGE_QUALITY: &str = "standard";

/// 画像生成プロバイダのトレイト
pub trait ImageProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// プロンプトから画像を 1 枚生成し、その URL を返す
    fn generate_image(&self, prompt: &str) -> Result<String, Error>;
}

/// OpenAI Images API（および互換エンドポイント）プロバイダ
pub struct OpenAiImageProvider {
    model: String,
    base_url: String,
    api_key: Option<String>,
    transport: HttpTransport,
}

impl OpenAiImageProvider {
    /// * `model` - モデル名（None のとき "dall-e-3"）
    /// * `base_url` - ベース URL（None のとき OpenAI 本家）
    /// * `api_key` - API キー（None のとき Authorization を付けない）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key: Option<String>,
        transport: HttpTransport,
    ) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            transport,
        }
    }

    fn url(&self) -> String {
        format!("{}/images/generations", self.base_url)
    }

    fn make_request_payload(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "prompt": prompt,
            "size": IMAGE_SIZE,
            "quality": IMAGE_QUALITY,
            "n": 1
        })
    }
}

/// Images API のレスポンスから先頭画像の URL を取り出す
fn parse_image_url(response_json: &str) -> Result<String, Error> {
    let v: Value = serde_json::from_str(response_json)
        .map_err(|e| Error::json(format!("Failed to parse image response JSON: {}", e)))?;
    if let Some(error) = v.get("error") {
        let msg = error["message"].as_str().unwrap_or("Unknown error");
        return Err(Error::generation(format!("Image API error: {}", msg)));
    }
    v["data"][0]["url"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| Error::generation("No image URL in response"))
}

impl ImageProvider for OpenAiImageProvider {
    fn name(&self) -> &str {
        "openai_image"
    }

    fn generate_image(&self, prompt: &str) -> Result<String, Error> {
        let body = serde_json::to_string(&self.make_request_payload(prompt))?;
        let response = self
            .transport
            .post_json(&self.url(), self.api_key.as_deref(), body, "Image API")?;
        parse_image_url(&response)
    }
}

/// Echo 画像プロバイダ（API を呼ばず、http で始まらない参照を返す）
#[derive(Debug, Clone, Default)]
pub struct EchoImageProvider;

impl ImageProvider for EchoImageProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn generate_image(&self, prompt: &str) -> Result<String, Error> {
        Ok(format!("echo://image/{}", prompt.chars().count()))
    }
}
