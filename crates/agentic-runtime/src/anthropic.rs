//! Anthropic LLM Provider
//!
//! Implementation of `LlmProvider` against the Anthropic Messages API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use agentic_core::error::{AgentError, Result};
use agentic_core::provider::LlmProvider;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const API_VERSION: &str = "2023-06-01";

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2048
}

/// Anthropic provider configuration
#[derive(Clone, Debug)]
pub struct AnthropicConfig {
    /// API key (`ANTHROPIC_API_KEY`)
    pub api_key: String,

    /// API base URL; overridable for proxies and tests
    pub base_url: String,

    /// Model identifier
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }

    /// Read configuration from the environment. `ANTHROPIC_API_KEY` is
    /// required; `ANTHROPIC_MODEL` optionally overrides the default model.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| AgentError::Config("ANTHROPIC_API_KEY is not set".into()))?;

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("ANTHROPIC_MODEL") {
            config.model = model;
        }
        Ok(config)
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Anthropic Messages API provider
pub struct AnthropicProvider {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(AnthropicConfig::from_env()?))
    }

    fn build_request<'a>(&'a self, prompt: &'a str, system_prompt: Option<&'a str>) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: system_prompt.filter(|s| !s.is_empty()),
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        }
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    async fn invoke(&self, prompt: &str, system_prompt: Option<&str>) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(AgentError::EmptyPrompt);
        }

        let body = self.build_request(prompt, system_prompt);
        tracing::debug!(model = %self.config.model, "invoking Anthropic Messages API");

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Provider(e.to_string()))?
            .error_for_status()
            .map_err(|e| AgentError::Provider(e.to_string()))?;

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AgentError::Provider(e.to_string()))?;

        parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| AgentError::Provider("response contained no content".into()))
    }
}
