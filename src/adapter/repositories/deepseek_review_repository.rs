//! DeepSeek Review Repository Implementation
//!
//! ReviewRepositoryのチャット補完 API 実装

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::deepseek::client::ChatCompletionApi;
use crate::adapter::deepseek::errors::classify;
use crate::adapter::deepseek::models::{ChatCompletionRequest, ChatMessage};
use crate::domain::entities::review::ReviewPrompt;
use crate::domain::errors::{UpstreamError, UpstreamErrorKind};
use crate::domain::repositories::review_repository::ReviewRepository;

/// DeepSeek 審査リポジトリ
pub struct DeepSeekReviewRepository {
    api: Arc<dyn ChatCompletionApi>,
    model: String,
    temperature: f32,
}

impl DeepSeekReviewRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn ChatCompletionApi>, config: &Config) -> Self {
        Self {
            api,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// ReviewPromptを要求ボディに変換
    fn to_request(&self, prompt: &ReviewPrompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompt.system.clone()),
                ChatMessage::user(prompt.user.clone()),
            ],
            temperature: self.temperature,
            stream: false,
        }
    }
}

#[async_trait]
impl ReviewRepository for DeepSeekReviewRepository {
    async fn review(&self, prompt: &ReviewPrompt, credential: &str) -> Result<String, UpstreamError> {
        let api_key = credential.trim();
        let request = self.to_request(prompt);

        debug!(
            "Sending chat completion: model={} messages={}",
            request.model,
            request.messages.len()
        );

        let response = self
            .api
            .create(api_key, &request)
            .await
            .map_err(|e| classify(&e))?;

        let content = response.first_content().ok_or_else(|| {
            UpstreamError::new(
                UpstreamErrorKind::MalformedResponse,
                "response contained no message content",
            )
        })?;

        info!("Received review report ({} chars)", content.chars().count());
        Ok(content.to_string())
    }
}
