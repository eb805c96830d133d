//! Wire types for the tutoring backend's chat endpoints.
//!
//! The backend owns all conversation reasoning; the contract is a plain
//! request/response exchange: `{message, state, system_prompt, history?}`
//! in, `{ai_message, state}` out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Who authored a chat turn. The backend labels assistant turns `"ai"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "ai")]
    Assistant,
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Session state owned by the backend agent.
///
/// The front-end only seeds the defaults and, for the tutor endpoint,
/// appends the pending user turn to `history` before sending. Fields the
/// backend adds later round-trip untouched through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub checklist: Value,
    pub phase: String,
    pub history: Vec<ChatMessage>,
    pub report: String,
    pub virtual_patient: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            checklist: Value::Object(Map::new()),
            phase: "summary".to_string(),
            history: Vec::new(),
            report: String::new(),
            virtual_patient: String::new(),
            extra: Map::new(),
        }
    }
}

/// Request body for `POST /chat` and `POST /chat/simple`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub state: SessionState,
    pub system_prompt: String,
    /// Full transcript, sent only by the role-play screen. The tutor agent
    /// reads history from `state` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<ChatMessage>>,
}

/// Response body for the chat endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub ai_message: String,
    pub state: SessionState,
}

/// API error types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    Network(String),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assistant_role_serializes_as_ai() {
        let msg = ChatMessage::assistant("hello");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "ai", "content": "hello"})
        );
        let back: ChatMessage = serde_json::from_value(json!({
            "role": "user",
            "content": "hi"
        }))
        .unwrap();
        assert_eq!(back.role, Role::User);
    }

    #[test]
    fn default_state_matches_backend_seed() {
        let state = serde_json::to_value(SessionState::default()).unwrap();
        assert_eq!(
            state,
            json!({
                "checklist": {},
                "phase": "summary",
                "history": [],
                "report": "",
                "virtual_patient": "",
            })
        );
    }

    #[test]
    fn tutor_request_omits_absent_history() {
        let request = ChatRequest {
            message: "hi".to_string(),
            state: SessionState::default(),
            system_prompt: "You are a helpful medical assistant.".to_string(),
            history: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("history").is_none());
        assert_eq!(body["system_prompt"], "You are a helpful medical assistant.");
    }

    #[test]
    fn unknown_state_fields_round_trip() {
        let body = json!({
            "ai_message": "ok",
            "state": {
                "checklist": {"respiratory": {}},
                "phase": "outputs",
                "history": [{"role": "user", "content": "hi"}],
                "report": "r",
                "virtual_patient": "vp",
                "step_index": 3,
            }
        });
        let response: ChatResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(response.state.phase, "outputs");
        assert_eq!(response.state.extra.get("step_index"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
    }

    #[test]
    fn partial_state_fills_defaults() {
        let state: SessionState = serde_json::from_value(json!({"phase": "summary"})).unwrap();
        assert_eq!(state, SessionState::default());
    }
}
