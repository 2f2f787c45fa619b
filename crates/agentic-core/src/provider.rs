//! LLM Provider Strategy Pattern
//!
//! Defines the single interface the agent uses to talk to an LLM backend
//! (Anthropic, Ollama, a test stub, ...). The agent works exclusively
//! through this trait, so backends can be swapped without touching the
//! orchestration logic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agentic_core::provider::LlmProvider;
//!
//! let provider = AnthropicProvider::from_env()?;
//! let text = provider.invoke("What time is it?", None).await?;
//! ```

use async_trait::async_trait;

use crate::error::Result;

/// Strategy trait for LLM providers
///
/// Contract:
/// - an empty `prompt` must be rejected with [`crate::AgentError::EmptyPrompt`]
///   before any network call is made;
/// - every transport, auth, quota or response-format failure must surface as
///   [`crate::AgentError::Provider`] — callers do not distinguish subtypes;
/// - the call is effectively synchronous: one awaited request, one text
///   response, no streaming.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a text completion for `prompt`, optionally steered by a
    /// separate system prompt.
    async fn invoke(&self, prompt: &str, system_prompt: Option<&str>) -> Result<String>;
}
