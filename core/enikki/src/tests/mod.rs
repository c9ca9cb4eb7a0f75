//! アプリ層のテスト（ポートを差し替えて usecase / wiring / shell を通す）

mod history_tests;

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use common::domain::HomeDir;
use common::error::Error;
use common::ports::outbound::EnvResolver;

/// 固定の環境変数（ホームは一時ディレクトリ）
pub(crate) struct MapEnv {
    home: PathBuf,
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            vars: HashMap::new(),
        }
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvResolver for MapEnv {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        Ok(HomeDir::new(self.home.clone()))
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

pub(crate) fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

/// 3 つのマーカーをすべて含む応答
pub(crate) const TIRED_REPLY: &str = "【清書された日記】
今日はとても疲れた一日でした。早めに休もうと思います。

【分析結果】
📊 ポジティブ度: 30/100
💬 コメント: ゆっくり休んでくださいね。

【IMAGE_PROMPT】
A children's crayon drawing of a tired child lying on a sofa";
