//! OpenAI API request and response types.
//!
//! These map directly to the Chat Completions wire format and are internal
//! to the client.

use serde::{Deserialize, Serialize};

use crate::usage::Usage;

/// OpenAI chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAIChatRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
    pub stream: bool,
}

/// OpenAI message format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIMessage {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// OpenAI chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChatResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<OpenAIChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// OpenAI response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
    pub finish_reason: Option<String>,
}

/// OpenAI response message.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponseMessage {
    pub content: Option<String>,
    /// Refusal message if the model declined to respond.
    #[serde(default)]
    pub refusal: Option<String>,
}

/// OpenAI error response.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIErrorResponse {
    pub error: OpenAIError,
}

/// OpenAI error details.
///
/// Groq omits `type` on some errors, so it defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIError {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let msg = OpenAIMessage {
            role: "user".to_owned(),
            content: Some("2+2=".to_owned()),
        };

        let json = serde_json::to_string(&msg).expect("serialization should succeed");
        assert_eq!(json, r#"{"role":"user","content":"2+2="}"#);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1677858242,
            "model": "llama-3.3-70b-versatile",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "2 + 2 = 4"
                },
                "logprobs": null,
                "finish_reason": "stop"
            }],
            "usage": {
                "queue_time": 0.02,
                "prompt_tokens": 44,
                "completion_tokens": 8,
                "total_tokens": 52
            },
            "system_fingerprint": "fp_1",
            "x_groq": { "id": "req_01" }
        }"#;

        let response: OpenAIChatResponse =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(response.model, "llama-3.3-70b-versatile");
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.usage, Some(Usage::new(44, 8)));
    }

    #[test]
    fn test_error_without_type() {
        let json = r#"{"error": {"message": "Invalid API Key", "code": "invalid_api_key"}}"#;
        let err: OpenAIErrorResponse =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(err.error.error_type, "");
        assert_eq!(err.error.code.as_deref(), Some("invalid_api_key"));
    }
}
