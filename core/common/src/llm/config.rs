//! プロバイダプロファイルの設定型
//!
//! config.json の `providers` / `default_provider` を表す。
//! プロファイル名から ProviderType とオプション（base_url / model / api_key_env / temperature）を解決する。

use crate::error::Error;
use crate::llm::factory::ProviderType;
use serde::Deserialize;
use std::collections::HashMap;

/// 既定のプロファイル名（設定が無いときに使う）
pub const DEFAULT_PROFILE: &str = "openai";

/// プロファイル設定のルート
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilesConfig {
    /// 未指定時に使うプロファイル名
    #[serde(default, alias = "default")]
    pub default_provider: Option<String>,
    /// プロファイル名 -> プロファイル
    #[serde(default)]
    pub providers: HashMap<String, ProviderProfile>,
}

/// 1 プロファイル分の設定
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderProfile {
    /// プロバイダ種別: openai | openai_compat | echo
    #[serde(rename = "type", alias = "provider")]
    pub type_: ProviderType,
    /// API のベース URL（省略時は各プロバイダのデフォルト）
    #[serde(default)]
    pub base_url: Option<String>,
    /// モデル名（省略時は各プロバイダのデフォルト）
    #[serde(default, alias = "default_model")]
    pub model: Option<String>,
    /// API キーを読む環境変数名（省略時は各プロバイダのデフォルト）
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// 温度（省略時はデフォルト）
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl ProviderProfile {
    pub fn builtin(type_: ProviderType) -> Self {
        Self {
            type_,
            base_url: None,
            model: None,
            api_key_env: None,
            temperature: None,
        }
    }
}

impl ProfilesConfig {
    /// JSON 文字列からパース（ファイル読みは呼び出し側で行う）
    pub fn parse(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// プロファイル名を解決する
    ///
    /// 優先順位: 引数 → default_provider → "openai"。
    /// providers に無い名前は組み込み（openai / gpt / openai_compat / echo）として扱う。
    pub fn resolve(&self, name: Option<&str>) -> Result<(String, ProviderProfile), Error> {
        let name = name
            .map(|s| s.to_string())
            .or_else(|| self.default_provider.clone())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        if let Some(profile) = self.providers.get(&name) {
            return Ok((name, profile.clone()));
        }
        match serde_json::from_value::<ProviderType>(serde_json::Value::String(name.clone())).ok() {
            Some(t) => Ok((name, ProviderProfile::builtin(t))),
            None => Err(Error::invalid_argument(format!(
                "Unknown profile: {}. Available: {}",
                name,
                self.profile_names().join(", ")
            ))),
        }
    }

    /// 利用可能なプロファイル名（設定 + 組み込み、名前順）
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        for builtin in ["openai", "openai_compat", "echo"] {
            if !names.iter().any(|n| n == builtin) {
                names.push(builtin.to_string());
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_object() {
        let cfg = ProfilesConfig::parse("{}").unwrap();
        assert!(cfg.default_provider.is_none());
        assert!(cfg.providers.is_empty());
    }

    #[test]
    fn test_parse_default_provider_and_providers() {
        let json = r#"
        {
            "default_provider": "local",
            "providers": {
                "my_openai": { "type": "openai", "api_key_env": "OPENAI_KEY" },
                "local": { "type": "openai_compat", "base_url": "http://localhost:8080/v1" },
                "offline": { "type": "echo" }
            }
        }
        "#;
        let cfg = ProfilesConfig::parse(json).unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("local"));
        assert_eq!(cfg.providers.len(), 3);

        let o = cfg.providers.get("my_openai").unwrap();
        assert_eq!(o.type_, ProviderType::Gpt);
        assert_eq!(o.api_key_env.as_deref(), Some("OPENAI_KEY"));

        let l = cfg.providers.get("local").unwrap();
        assert_eq!(l.type_, ProviderType::OpenAiCompat);
        assert_eq!(l.base_url.as_deref(), Some("http://localhost:8080/v1"));

        assert_eq!(cfg.providers["offline"].type_, ProviderType::Echo);
    }

    #[test]
    fn test_parse_aliases() {
        let json = r#"
        {
            "default": "local",
            "providers": {
                "local": { "type": "ollama", "default_model": "llama3.1", "temperature": 0.4 },
                "x": { "provider": "gpt" }
            }
        }
        "#;
        let cfg = ProfilesConfig::parse(json).unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("local"));
        let p = &cfg.providers["local"];
        assert_eq!(p.type_, ProviderType::OpenAiCompat);
        assert_eq!(p.model.as_deref(), Some("llama3.1"));
        assert_eq!(p.temperature, Some(0.4));
        assert_eq!(cfg.providers["x"].type_, ProviderType::Gpt);
    }

    #[test]
    fn test_resolve_order() {
        let cfg = ProfilesConfig::default();
        let (name, p) = cfg.resolve(None).unwrap();
        assert_eq!(name, "openai");
        assert_eq!(p.type_, ProviderType::Gpt);

        let (name, p) = cfg.resolve(Some("echo")).unwrap();
        assert_eq!(name, "echo");
        assert_eq!(p.type_, ProviderType::Echo);

        let cfg = ProfilesConfig::parse(r#"{"default_provider":"echo"}"#).unwrap();
        assert_eq!(cfg.resolve(None).unwrap().1.type_, ProviderType::Echo);
    }

    #[test]
    fn test_resolve_unknown_is_usage_error() {
        let err = ProfilesConfig::default().resolve(Some("nope")).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("echo"));
    }
}
