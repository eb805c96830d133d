//! HTTP client for the backend chat endpoints.

use gloo_net::http::Request;
use shared::{ApiError, ChatRequest, ChatResponse};

use crate::utils;

/// Chat endpoint driven by the full tutoring agent.
pub const CHAT_ENDPOINT: &str = "/chat";
/// Stateless chat endpoint used for role-play conversations.
pub const SIMPLE_CHAT_ENDPOINT: &str = "/chat/simple";

/// POST a chat turn to the backend and decode the reply.
pub async fn send_chat(endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    let response = Request::post(&utils::api_url(endpoint))
        .json(request)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
            message: response.status_text(),
        });
    }

    response
        .json::<ChatResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
