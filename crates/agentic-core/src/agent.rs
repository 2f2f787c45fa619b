//! Agent Orchestrator
//!
//! Owns one user query, the registered tools and the LLM provider handle.
//! With no tools registered, `run` answers in a single provider call; with
//! tools it drives the ReAct (Reason + Act) loop: prompt, parse, dispatch,
//! append the observation, repeat — bounded by `max_loops`.
//!
//! `run` always returns text. The only two failure modes that end a loop
//! run abnormally are a response with no recognizable action and iteration
//! exhaustion; everything else (unknown tool, malformed payload, tool
//! failure) is folded back into the transcript so the model can
//! self-correct within the budget.

use std::sync::Arc;

use crate::error::{AgentError, Result};
use crate::parser::{ParsedResponse, parse_response};
use crate::provider::LlmProvider;
use crate::tool::{Outcome, Tool, ToolRegistry};
use crate::transcript::Transcript;

/// Hard ceiling on ReAct iterations per run
pub const DEFAULT_MAX_LOOPS: usize = 5;

/// Returned when a response carries neither a final answer nor an action
pub const ERR_NO_ACTION: &str = "Error: model did not produce a valid action";

/// Returned when the loop exhausts its iteration budget
pub const ERR_MAX_ITERATIONS: &str = "Error: maximum iterations exceeded";

const ERR_EMPTY_QUERY: &str = "Error: user query must not be empty";

const REACT_PROMPT: &str = r#"Answer the following question as best you can. You have access to these tools:

{tools}

Use this exact format:

Thought: reason about what to do next
Action:
```json
{"tool_name": "<name of the tool>", "tool_input": {"<argument>": "<value>"}}
```
Observation: the result of the action
... (Thought/Action/Observation can repeat)
Thought: I now know the final answer
Final Answer: the answer to the original question

Question: {question}"#;

/// The main Agent struct
///
/// Constructed once per query via [`Agent::builder`], immutable after
/// construction, and consumed by [`Agent::run`].
pub struct Agent {
    user_query: String,
    system_prompt: Option<String>,
    tools: ToolRegistry,
    provider: Arc<dyn LlmProvider>,
    max_loops: usize,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("user_query", &self.user_query)
            .field("system_prompt", &self.system_prompt)
            .field("max_loops", &self.max_loops)
            .finish_non_exhaustive()
    }
}

impl Agent {
    pub fn builder(user_query: impl Into<String>) -> AgentBuilder {
        AgentBuilder::new(user_query)
    }

    /// Answer the query. Always returns text; every failure mode is
    /// encoded as an error-prefixed string, never a panic or an `Err`.
    pub async fn run(self) -> String {
        if self.user_query.trim().is_empty() {
            return ERR_EMPTY_QUERY.to_string();
        }

        if self.tools.is_empty() {
            return self.run_direct().await;
        }
        self.run_react().await
    }

    /// Direct-answer mode: one provider call, its text verbatim
    async fn run_direct(&self) -> String {
        match self
            .provider
            .invoke(&self.user_query, self.system_prompt.as_deref())
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "direct answer failed");
                format!("Error: {e}")
            }
        }
    }

    /// ReAct-loop mode
    async fn run_react(&self) -> String {
        let base_prompt = self.build_prompt();
        let mut transcript = Transcript::new();

        for iteration in 1..=self.max_loops {
            let prompt = format!("{base_prompt}{}", transcript.render());
            let response = match self
                .provider
                .invoke(&prompt, self.system_prompt.as_deref())
                .await
            {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(iteration, error = %e, "provider call failed");
                    return format!("Error: {e}");
                }
            };

            match parse_response(&response) {
                ParsedResponse::FinalAnswer(answer) => {
                    tracing::debug!(iteration, "final answer reached");
                    return answer;
                }
                ParsedResponse::Action(request) => {
                    let outcome = self.tools.dispatch(&request).await;
                    transcript.push(response, outcome.render());
                }
                ParsedResponse::MalformedAction(message) => {
                    // Absorbed like a dispatch error; the model may recover.
                    transcript.push(response, Outcome::error(message).render());
                }
                ParsedResponse::NoAction => {
                    tracing::warn!(iteration, "no actionable content in response");
                    return ERR_NO_ACTION.to_string();
                }
            }
        }

        tracing::warn!(max_loops = self.max_loops, "iteration budget exhausted");
        ERR_MAX_ITERATIONS.to_string()
    }

    /// Fill the ReAct template with the tool catalog and the user query
    fn build_prompt(&self) -> String {
        REACT_PROMPT
            .replace("{tools}", &self.tools.catalog())
            .replace("{question}", &self.user_query)
    }
}

/// Builder for [`Agent`]
///
/// Every builder starts from a fresh, empty [`ToolRegistry`]; tool sets are
/// never shared between agents.
pub struct AgentBuilder {
    user_query: String,
    system_prompt: Option<String>,
    tools: ToolRegistry,
    provider: Option<Arc<dyn LlmProvider>>,
    max_loops: usize,
}

impl AgentBuilder {
    pub fn new(user_query: impl Into<String>) -> Self {
        Self {
            user_query: user_query.into(),
            system_prompt: None,
            tools: ToolRegistry::new(),
            provider: None,
            max_loops: DEFAULT_MAX_LOOPS,
        }
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Register a tool; fails on a duplicate name
    pub fn tool<T: Tool + 'static>(mut self, tool: T) -> Result<Self> {
        self.tools.register(tool)?;
        Ok(self)
    }

    /// Replace the whole tool set with a pre-built registry
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn max_loops(mut self, max: usize) -> Self {
        self.max_loops = max;
        self
    }

    pub fn build(self) -> Result<Agent> {
        let provider = self
            .provider
            .ok_or_else(|| AgentError::Config("provider is required".into()))?;

        Ok(Agent {
            user_query: self.user_query,
            system_prompt: self.system_prompt,
            tools: self.tools,
            provider,
            max_loops: self.max_loops,
        })
    }
}
