//! Chat Completion Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

#[cfg(test)]
use mockall::automock;

use super::errors::ApiStatusError;
use super::models::{ChatCompletionRequest, ChatCompletionResponse};

/// Trait for chat completion calls
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatCompletionApi: Send + Sync {
    /// Send one completion request
    async fn create(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

/// reqwest based client for OpenAI compatible endpoints
pub struct ReqwestChatClient {
    client: Client,
    base_url: String,
}

impl ReqwestChatClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl ChatCompletionApi for ReqwestChatClient {
    async fn create(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", api_key))
            .json(request)
            .send()
            .await
            .context("Failed to send chat completion request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiStatusError { status, body }.into());
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .context("Failed to parse chat completion response")
    }
}
