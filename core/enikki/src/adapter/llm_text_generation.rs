//! 文章生成アダプタ（common::llm のプロバイダを使用）
//!
//! プロバイダは呼び出しごとに作る。API キー未設定などの設定エラーは
//! 生成を実際に使うときにだけ表面化する。

use std::sync::Arc;
use std::time::Duration;

use common::error::Error;
use common::llm::{create_provider, LlmDriver, ProfilesConfig};
use common::ports::outbound::EnvResolver;

use crate::ports::outbound::TextGeneration;

pub struct ProviderTextGeneration {
    profiles: ProfilesConfig,
    profile: Option<String>,
    model: Option<String>,
    env: Arc<dyn EnvResolver>,
    timeout: Duration,
}

impl ProviderTextGeneration {
    pub fn new(
        profiles: ProfilesConfig,
        profile: Option<String>,
        model: Option<String>,
        env: Arc<dyn EnvResolver>,
        timeout: Duration,
    ) -> Self {
        Self {
            profiles,
            profile,
            model,
            env,
            timeout,
        }
    }
}

impl TextGeneration for ProviderTextGeneration {
    fn complete_text(&self, system_instruction: &str, user_message: &str) -> Result<String, Error> {
        let (_, profile) = self.profiles.resolve(self.profile.as_deref())?;
        let provider =
            create_provider(&profile, self.model.clone(), self.env.as_ref(), self.timeout)?;
        LlmDriver::new(provider)
            .query(user_message, Some(system_instruction))
            .map_err(|e| Error::generation(e.to_string()))
    }
}
