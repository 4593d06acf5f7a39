//! Completion client seam used by the generator and the tag classifier.

use async_trait::async_trait;
use ghostwriter_core::{Error, Result};
use reqwest::Client;
use tokio_stream::StreamExt;
use tracing::debug;

use crate::config::LLMConfig;
use crate::providers::{self, StreamChunk};
use crate::types::{CompletionRequest, LLMProvider};

/// Text-in/text-out completion service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion and return the full response text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;

    /// Default model for this client.
    fn model(&self) -> &str;
}

/// Hosted provider client that collects a streamed completion.
#[derive(Clone)]
pub struct ProviderClient {
    http: Client,
    provider: LLMProvider,
    model: String,
    api_key: String,
}

impl ProviderClient {
    pub fn new(provider: LLMProvider, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            provider,
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client for a provider from config; fails if its key is missing.
    pub fn from_config(config: &LLMConfig, provider: LLMProvider) -> Result<Self> {
        let (model, api_key) = config.credentials(provider)?;
        Ok(Self::new(provider, model, api_key))
    }

    pub fn provider(&self) -> LLMProvider {
        self.provider
    }
}

#[async_trait]
impl CompletionClient for ProviderClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let stream = providers::stream_llm(&self.http, self.provider, request, &self.api_key);
        tokio::pin!(stream);

        let mut full_response = String::new();
        while let Some(chunk) = stream.next().await {
            match chunk {
                StreamChunk::Token(text) => full_response.push_str(&text),
                StreamChunk::Done { tokens_used } => {
                    debug!("{} completion done ({} tokens)", self.provider, tokens_used);
                }
                StreamChunk::Error(e) => return Err(Error::Http(e)),
            }
        }

        Ok(full_response)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
