//! Error Types

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent error types
///
/// Only a handful of variants: every provider-side failure collapses into
/// [`AgentError::Provider`], and the orchestrator converts all of these to
/// plain text before they reach the caller of `Agent::run`.
#[derive(Error, Debug)]
pub enum AgentError {
    /// LLM invocation failed, for any underlying transport/auth/format cause
    #[error("LLM invocation failed: {0}")]
    Provider(String),

    /// Empty prompt rejected before any provider call
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// A tool with this name is already registered
    #[error("tool already registered: {0}")]
    DuplicateTool(String),

    /// Tool input failed schema validation
    #[error("invalid tool input: {0}")]
    ToolValidation(String),

    /// Configuration error (missing provider, bad env var, ...)
    #[error("configuration error: {0}")]
    Config(String),
}
