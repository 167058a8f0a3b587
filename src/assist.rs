use std::fmt;

use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config::{ASSIST_ENDPOINT, ASSIST_MODEL};

/// Fixed instruction sent ahead of the user's prompt
pub const SYSTEM_INSTRUCTION: &str = "You extend photo-editing prompts. Rewrite the user's \
     prompt into a richer version of the same request and reply with the rewritten prompt only.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

/// Trimmed text of the first returned choice, if there is a usable one
pub fn completion_text(response: CompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssistError {
    Status(u16),
    Network(String),
    /// Completion service answered 2xx but returned nothing usable
    EmptyCompletion,
}

impl fmt::Display for AssistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistError::Status(code) => write!(f, "assist responded with status {code}"),
            AssistError::Network(reason) => write!(f, "assist request failed: {reason}"),
            AssistError::EmptyCompletion => write!(f, "assist returned an empty completion"),
        }
    }
}

/// Ask the completion service for an extended version of `prompt`. The
/// returned text replaces the prompt wholesale.
pub async fn autocomplete(prompt: &str, credential: &str) -> Result<String, AssistError> {
    let body = CompletionRequest {
        model: ASSIST_MODEL,
        messages: vec![
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(prompt),
        ],
    };

    let response = Request::post(ASSIST_ENDPOINT)
        .header("Authorization", &format!("Bearer {credential}"))
        .json(&body)
        .map_err(|e| AssistError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AssistError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AssistError::Status(response.status()));
    }

    let parsed: CompletionResponse = response
        .json()
        .await
        .map_err(|e| AssistError::Network(e.to_string()))?;

    completion_text(parsed).ok_or(AssistError::EmptyCompletion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_text_takes_first_choice() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{
                "choices": [
                    {"message": {"role": "assistant", "content": "  a red balloon at dusk  "}},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            completion_text(response),
            Some("a red balloon at dusk".to_string())
        );
    }

    #[test]
    fn test_completion_text_rejects_empty_payloads() {
        let no_choices: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(completion_text(no_choices), None);

        let blank: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "   "}}]}"#,
        )
        .unwrap();
        assert_eq!(completion_text(blank), None);
    }

    #[test]
    fn test_request_body_shape() {
        let body = CompletionRequest {
            model: ASSIST_MODEL,
            messages: vec![
                ChatMessage::system(SYSTEM_INSTRUCTION),
                ChatMessage::user("a red balloon"),
            ],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], ASSIST_MODEL);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "a red balloon");
    }
}
