//! # agentic-runtime
//!
//! Concrete [`agentic_core::LlmProvider`] implementations. The core crate
//! never depends on a transport; everything here is reachable only through
//! the provider trait.
//!
//! - [`anthropic::AnthropicProvider`] — hosted Claude via the Messages API
//! - [`ollama::OllamaProvider`] — local inference (feature `ollama`, on by
//!   default)

pub mod anthropic;

#[cfg(feature = "ollama")]
pub mod ollama;

pub use anthropic::{AnthropicConfig, AnthropicProvider};

#[cfg(feature = "ollama")]
pub use ollama::{OllamaConfig, OllamaProvider};
