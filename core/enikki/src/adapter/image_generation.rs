//! 画像生成アダプタ（common::llm::image のプロバイダを使用）

use std::sync::Arc;
use std::time::Duration;

use common::error::Error;
use common::llm::{create_image_provider, ImageProvider, ProfilesConfig};
use common::ports::outbound::EnvResolver;

use crate::ports::outbound::ImageGeneration;

/// 文章生成と同じプロファイルから画像プロバイダを作る（echo なら echo 画像）
pub struct ProviderImageGeneration {
    profiles: ProfilesConfig,
    profile: Option<String>,
    image_model: Option<String>,
    env: Arc<dyn EnvResolver>,
    timeout: Duration,
}

impl ProviderImageGeneration {
    pub fn new(
        profiles: ProfilesConfig,
        profile: Option<String>,
        image_model: Option<String>,
        env: Arc<dyn EnvResolver>,
        timeout: Duration,
    ) -> Self {
        Self {
            profiles,
            profile,
            image_model,
            env,
            timeout,
        }
    }
}

impl ImageGeneration for ProviderImageGeneration {
    fn generate_image(&self, prompt: &str) -> Result<String, Error> {
        let (_, profile) = self.profiles.resolve(self.profile.as_deref())?;
        let provider = create_image_provider(
            &profile,
            self.image_model.clone(),
            self.env.as_ref(),
            self.timeout,
        )?;
        provider
            .generate_image(prompt)
            .map_err(|e| Error::generation(e.to_string()))
    }
}
