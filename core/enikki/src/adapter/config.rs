//! 設定ファイル（config.json）の読み込み（adapter 層）
//!
//! ファイルが無ければ既定値で動く。秘密情報（API キー・トークン・パスワード）は
//! ここには書かず、環境変数名だけを持つ。

use crate::domain::MergeSource;
use common::domain::HomeDir;
use common::error::Error;
use common::http::DEFAULT_TIMEOUT_SECS;
use common::llm::ProfilesConfig;
use common::ports::outbound::FileSystem;
use serde::Deserialize;

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_SHEETS_RANGE: &str = "Sheet1";
pub const DEFAULT_SHEETS_TOKEN_ENV: &str = "ENIKKI_SHEETS_TOKEN";
pub const DEFAULT_SESSION_IDLE_MINUTES: i64 = 30;

/// 画像生成の設定
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub enabled: bool,
    /// 未指定ならプロバイダの既定（dall-e-3）
    pub model: Option<String>,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            model: None,
        }
    }
}

/// Google スプレッドシートの設定
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SheetsSettings {
    pub spreadsheet_id: Option<String>,
    /// シート名（A1 記法の範囲でもよい）
    pub range: String,
    /// アクセストークンを読む環境変数名
    pub token_env: String,
    pub base_url: String,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            range: DEFAULT_SHEETS_RANGE.to_string(),
            token_env: DEFAULT_SHEETS_TOKEN_ENV.to_string(),
            base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
        }
    }
}

/// config.json 全体
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// default_provider / providers（common::llm のプロファイル設定）
    #[serde(flatten)]
    pub profiles: ProfilesConfig,
    pub image: ImageSettings,
    pub sheets: SheetsSettings,
    pub merge_source: MergeSource,
    pub session_idle_minutes: i64,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profiles: ProfilesConfig::default(),
            image: ImageSettings::default(),
            sheets: SheetsSettings::default(),
            merge_source: MergeSource::default(),
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn parse(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// HOME/config.json を読み込む。無ければ既定値
pub fn load_app_config(fs: &dyn FileSystem, home: &HomeDir) -> Result<AppConfig, Error> {
    let path = home.config_path();
    if !fs.is_file(&path) {
        return Ok(AppConfig::default());
    }
    let content = fs.read_to_string(&path)?;
    AppConfig::parse(&content)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
}
