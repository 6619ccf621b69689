use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "apiKey", default)]
    pub api_key: String,
}

/// Successful proxy response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatFailure {
    pub error: String,
}

/// A single entry in the widget's transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub from_user: bool,
    pub text: String,
}

/// Connectivity state reported alongside each reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantStatus {
    pub offline: bool,
    pub consecutive_failures: u32,
}
