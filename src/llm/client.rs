//! OpenRouter chat-completion client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::Config;

use super::ApiError;

/// Client for a `/chat/completions` endpoint with bearer authentication.
///
/// Constructed once at startup, then cheaply cloned into generation tasks
/// because `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Send `prompt` as a single user message and return the model's reply
    /// text. One round-trip, no retries. `title` goes into the `X-Title`
    /// attribution header, naming the generator making the request.
    pub async fn complete(&self, prompt: &str, title: &str) -> Result<String, ApiError> {
        let payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user",
                content: vec![ContentPart {
                    kind: "text",
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(model = %payload.model, prompt_len = prompt.len(), "sending chat-completion request");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            // OpenRouter attribution headers.
            .header("HTTP-Referer", "http://localhost:8080")
            .header("X-Title", title)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.api_url, error = %e, "chat-completion request failed (transport)");
                ApiError::Request(e.to_string())
            })?;

        let response = check_status(response).await?;

        let parsed = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| {
                error!(error = %e, "failed to deserialize chat-completion response");
                ApiError::Request(format!("failed to parse response body: {e}"))
            })?;

        debug!(choices = parsed.choices.len(), "received chat-completion response");

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::EmptyContent)
    }
}

// Wire types. The request carries the content as a one-element parts array,
// matching what OpenRouter accepts for multimodal-capable models.

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// Error envelope used by OpenAI-compatible APIs.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    code: Option<serde_json::Value>,
}

/// Consume the response and return it if successful, or a structured error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());

    let message = if let Ok(env) = serde_json::from_str::<ErrorEnvelope>(&body) {
        let code = env
            .error
            .code
            .map(|v| match v {
                serde_json::Value::String(s) => format!(" [code={s}]"),
                other => format!(" [code={other}]"),
            })
            .unwrap_or_default();
        format!("HTTP {status}{code}: {}", env.error.message)
    } else {
        format!("HTTP {status}: {body}")
    };

    error!(%status, %message, "chat-completion request returned HTTP error");
    Err(ApiError::Request(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let payload = ChatCompletionRequest {
            model: "google/gemini-2.0-flash-exp:free".to_string(),
            messages: vec![Message {
                role: "user",
                content: vec![ContentPart {
                    kind: "text",
                    text: "hello".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][0]["text"], "hello");
    }

    #[test]
    fn test_response_content_extraction() {
        let body = r#"{"choices":[{"message":{"content":"  reply text  "}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .unwrap();
        assert_eq!(text, "reply text");
    }

    #[test]
    fn test_response_tolerates_missing_content() {
        let body = r#"{"choices":[{"message":{}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
