//! Tool System
//!
//! Extensible tool framework for agent capabilities. Tools are registered
//! at agent construction and invoked by name from the ReAct loop.
//!
//! The [`Tool::execute`] boundary never fails: validation errors and
//! arbitrary failures from the tool's own logic are all converted into an
//! error [`Outcome`] that the loop feeds back to the model as an
//! observation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AgentError, Result};
use crate::parser::ActionRequest;

/// Arguments passed to a tool, keyed by parameter name
pub type ToolInput = HashMap<String, Value>;

/// Tagged result of executing a tool
///
/// Serializes as `{"status":"success","result":...}` or
/// `{"status":"error","message":...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success { result: Value },
    Error { message: String },
}

impl Outcome {
    pub fn success(result: impl Into<Value>) -> Self {
        Self::Success {
            result: result.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Render as the observation text appended to the transcript
    pub fn render(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"status":"error","message":"unserializable outcome"}"#.into())
    }
}

/// Parameter definition for tool schema
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// Parameter name
    pub name: String,

    /// JSON type (string, number, boolean, object, array)
    #[serde(rename = "type")]
    pub param_type: String,

    /// Human-readable description
    pub description: String,

    /// Whether this parameter is required
    #[serde(default)]
    pub required: bool,
}

/// Tool metadata shown to the LLM in the tool catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Unique tool identifier
    pub name: String,

    /// Human-readable description (the LLM's basis for choosing the tool)
    pub description: String,

    /// Parameter definitions; empty means the tool takes no input
    #[serde(default)]
    pub parameters: Vec<ParameterSchema>,
}

/// Tool trait - implement to add new capabilities
#[async_trait]
pub trait Tool: Send + Sync {
    /// Static metadata; must not depend on prior calls
    fn describe(&self) -> ToolSchema;

    /// The tool's actual logic. May fail arbitrarily; `execute` catches it.
    async fn call(&self, input: &ToolInput) -> anyhow::Result<Value>;

    /// Check declared required parameters are present
    fn validate(&self, input: &ToolInput) -> Result<()> {
        for param in &self.describe().parameters {
            if param.required && !input.contains_key(&param.name) {
                return Err(AgentError::ToolValidation(format!(
                    "missing required parameter: {}",
                    param.name
                )));
            }
        }
        Ok(())
    }

    /// Validate then run the tool, converting every failure into an error
    /// [`Outcome`]. Validation failure short-circuits without invoking
    /// [`Tool::call`]. This method never panics or returns an error.
    async fn execute(&self, input: &ToolInput) -> Outcome {
        if let Err(e) = self.validate(input) {
            return Outcome::error(e.to_string());
        }
        match self.call(input).await {
            Ok(result) => Outcome::Success { result },
            Err(e) => Outcome::error(e.to_string()),
        }
    }
}

/// Registry of available tools, in registration order
///
/// Each agent owns its own registry; there is no shared default set.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a new tool. Names must be unique within one registry.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> Result<()> {
        self.register_arc(Arc::new(tool))
    }

    /// Register a shared tool handle
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let name = tool.describe().name;
        if self.get(&name).is_some() {
            return Err(AgentError::DuplicateTool(name));
        }
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by exact name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.describe().name == name)
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.describe().name).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Render the tool catalog embedded in the ReAct prompt, one
    /// `- name: description` line per tool in registration order
    pub fn catalog(&self) -> String {
        self.tools
            .iter()
            .map(|t| {
                let schema = t.describe();
                format!("- {}: {}", schema.name, schema.description)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolve an action request and execute the matching tool.
    ///
    /// An unknown name yields an error [`Outcome`] rather than a failure;
    /// the loop feeds it back so the model can self-correct.
    pub async fn dispatch(&self, request: &ActionRequest) -> Outcome {
        match self.get(&request.tool_name) {
            Some(tool) => {
                tracing::debug!(tool = %request.tool_name, "executing tool");
                tool.execute(&request.tool_input).await
            }
            None => Outcome::error(format!("tool not found: {}", request.tool_name)),
        }
    }
}

// ============================================================================
// Built-in Tools
// ============================================================================

/// Clock tool - returns the current time
///
/// Declares no input and therefore succeeds when called with an empty
/// argument map.
pub struct CurrentTimeTool;

#[async_trait]
impl Tool for CurrentTimeTool {
    fn describe(&self) -> ToolSchema {
        ToolSchema {
            name: "current_time".into(),
            description: "Returns the current date and time".into(),
            parameters: Vec::new(),
        }
    }

    async fn call(&self, _input: &ToolInput) -> anyhow::Result<Value> {
        let now = chrono::Utc::now();
        Ok(serde_json::json!({ "current_time": now.to_rfc3339() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn describe(&self) -> ToolSchema {
            ToolSchema {
                name: "echo".into(),
                description: "Echoes back its message argument".into(),
                parameters: vec![ParameterSchema {
                    name: "message".into(),
                    param_type: "string".into(),
                    description: "Text to echo".into(),
                    required: true,
                }],
            }
        }

        async fn call(&self, input: &ToolInput) -> anyhow::Result<Value> {
            Ok(input.get("message").cloned().unwrap_or(Value::Null))
        }
    }

    struct FailingTool {
        called: AtomicBool,
    }

    #[async_trait]
    impl Tool for FailingTool {
        fn describe(&self) -> ToolSchema {
            ToolSchema {
                name: "broken".into(),
                description: "Always fails".into(),
                parameters: vec![ParameterSchema {
                    name: "target".into(),
                    param_type: "string".into(),
                    description: "Ignored".into(),
                    required: true,
                }],
            }
        }

        async fn call(&self, _input: &ToolInput) -> anyhow::Result<Value> {
            self.called.store(true, Ordering::SeqCst);
            anyhow::bail!("disk on fire")
        }
    }

    fn request(name: &str, input: ToolInput) -> ActionRequest {
        ActionRequest {
            tool_name: name.into(),
            tool_input: input,
        }
    }

    #[tokio::test]
    async fn empty_input_tool_succeeds_on_empty_input() {
        let outcome = CurrentTimeTool.execute(&ToolInput::new()).await;
        assert!(outcome.is_success());
        match outcome {
            Outcome::Success { result } => {
                assert!(result.get("current_time").is_some());
            }
            Outcome::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[tokio::test]
    async fn missing_required_parameter_short_circuits() {
        let tool = FailingTool {
            called: AtomicBool::new(false),
        };
        let outcome = tool.execute(&ToolInput::new()).await;
        match outcome {
            Outcome::Error { message } => {
                assert!(message.contains("missing required parameter: target"));
            }
            Outcome::Success { .. } => panic!("validation should have failed"),
        }
        assert!(!tool.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn tool_failure_is_caught_as_error_outcome() {
        let tool = FailingTool {
            called: AtomicBool::new(false),
        };
        let mut input = ToolInput::new();
        input.insert("target".into(), Value::String("anything".into()));
        let outcome = tool.execute(&input).await;
        match outcome {
            Outcome::Error { message } => assert!(message.contains("disk on fire")),
            Outcome::Success { .. } => panic!("tool should have failed"),
        }
    }

    #[tokio::test]
    async fn dispatch_unknown_tool_yields_error_outcome() {
        let registry = ToolRegistry::new();
        let outcome = registry.dispatch(&request("nope", ToolInput::new())).await;
        match outcome {
            Outcome::Error { message } => assert_eq!(message, "tool not found: nope"),
            Outcome::Success { .. } => panic!("unknown tool must not succeed"),
        }
    }

    #[tokio::test]
    async fn dispatch_executes_matching_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool).unwrap();
        let mut input = ToolInput::new();
        input.insert("message".into(), Value::String("hi".into()));
        let outcome = registry.dispatch(&request("echo", input)).await;
        assert_eq!(outcome, Outcome::success("hi"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(CurrentTimeTool).unwrap();
        let err = registry.register(CurrentTimeTool).unwrap_err();
        assert!(matches!(err, AgentError::DuplicateTool(name) if name == "current_time"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn catalog_preserves_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool).unwrap();
        registry.register(CurrentTimeTool).unwrap();
        let catalog = registry.catalog();
        let echo_pos = catalog.find("- echo:").unwrap();
        let time_pos = catalog.find("- current_time:").unwrap();
        assert!(echo_pos < time_pos);
    }

    #[test]
    fn outcome_render_shape() {
        let ok = Outcome::success(serde_json::json!({"n": 1}));
        assert_eq!(ok.render(), r#"{"status":"success","result":{"n":1}}"#);
        let err = Outcome::error("boom");
        assert_eq!(err.render(), r#"{"status":"error","message":"boom"}"#);
    }
}
