//! Action Parser
//!
//! Extracts a structured decision from one raw LLM response. A response is
//! in exactly one of two modes: a final answer introduced by the
//! `Final Answer:` marker, or a tool action carried in a ```json fence
//! after an `Action:` marker.
//!
//! Precedence rules:
//! - final-answer mode wins: if both a `Final Answer:` marker and an action
//!   fence are present, the action is ignored;
//! - with multiple `Final Answer:` markers only the last one is
//!   authoritative (a model that second-guesses itself);
//! - a present fence with undecodable content is a malformed action, which
//!   is distinct from a response carrying no recognizable marker at all.

use serde::{Deserialize, Serialize};

use crate::tool::ToolInput;

/// Marker introducing the final answer
pub const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// Marker introducing a tool action
pub const ACTION_MARKER: &str = "Action:";

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// A tool invocation request parsed from model text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Name of the tool to invoke
    pub tool_name: String,

    /// Arguments for the tool; may be an empty object
    pub tool_input: ToolInput,
}

/// Decision extracted from one model response
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedResponse {
    /// The model produced its final answer (whitespace-trimmed)
    FinalAnswer(String),

    /// The model requested a tool invocation
    Action(ActionRequest),

    /// An action fence was found but its payload did not decode
    MalformedAction(String),

    /// Neither marker recognized; terminal for the run
    NoAction,
}

/// Classify one raw model response.
pub fn parse_response(response: &str) -> ParsedResponse {
    // Final answer takes priority over any action block. Everything after
    // the last marker occurrence is the answer.
    if let Some(idx) = response.rfind(FINAL_ANSWER_MARKER) {
        let answer = response[idx + FINAL_ANSWER_MARKER.len()..].trim();
        return ParsedResponse::FinalAnswer(answer.to_string());
    }

    let Some(marker_idx) = response.find(ACTION_MARKER) else {
        return ParsedResponse::NoAction;
    };
    let after_marker = &response[marker_idx + ACTION_MARKER.len()..];

    // First closing fence after the first opening fence; content in between
    // may span newlines.
    let Some(open_idx) = after_marker.find(FENCE_OPEN) else {
        return ParsedResponse::NoAction;
    };
    let body = &after_marker[open_idx + FENCE_OPEN.len()..];
    let Some(close_idx) = body.find(FENCE_CLOSE) else {
        return ParsedResponse::NoAction;
    };
    let payload = body[..close_idx].trim();

    match serde_json::from_str::<ActionRequest>(payload) {
        Ok(request) => ParsedResponse::Action(request),
        Err(e) => ParsedResponse::MalformedAction(format!("malformed action payload: {e}")),
    }
}
