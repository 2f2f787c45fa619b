//! # agentic-core
//!
//! Single-agent ReAct orchestration with a provider-agnostic LLM abstraction
//! and an extensible tool system.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Agent                                 │
//! │  ┌────────────┐  ┌────────────┐  ┌────────────────────────┐  │
//! │  │   ReAct    │  │   Tool     │  │   LlmProvider          │  │
//! │  │   Loop     │──│  Registry  │  │   (Strategy)           │  │
//! │  └─────┬──────┘  └────────────┘  └────────────────────────┘  │
//! │        │                                                     │
//! │  ┌─────┴──────┐  ┌────────────┐                              │
//! │  │   Action   │  │ Transcript │                              │
//! │  │   Parser   │  │            │                              │
//! │  └────────────┘  └────────────┘                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! An [`Agent`] owns one user query, a set of [`Tool`] capabilities and an
//! [`LlmProvider`] handle. With no tools it answers in a single model call;
//! with tools it drives a bounded Reason-Act-Observe loop, feeding tool
//! observations back into the prompt until the model emits a final answer
//! or the iteration budget runs out. `Agent::run` always returns text,
//! never an error: every failure mode is folded into the returned string.

pub mod agent;
pub mod error;
pub mod parser;
pub mod provider;
pub mod tool;
pub mod transcript;

pub use agent::{Agent, AgentBuilder};
pub use error::{AgentError, Result};
pub use parser::{ActionRequest, ParsedResponse, parse_response};
pub use provider::LlmProvider;
pub use tool::{CurrentTimeTool, Outcome, Tool, ToolInput, ToolRegistry, ToolSchema};
pub use transcript::Transcript;
