//! OpenAI chat-completions adapter.
//!
//! Calls `{base_url}/chat/completions` once per request. No retries: a
//! failed call is surfaced to the caller, who may resubmit.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatMessage, Completer, CompletionError, build_messages};

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for the OpenAI adapter.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API credential. Requests fail with a config error when absent.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

/// Take the first choice's content, trimmed; reject an empty reply.
fn first_reply(response: OpenAiResponse) -> Result<String, CompletionError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::Parse("OpenAI returned no choices".to_string()))?
        .message
        .content
        .unwrap_or_default();

    let reply = content.trim();
    if reply.is_empty() {
        return Err(CompletionError::EmptyReply);
    }
    Ok(reply.to_string())
}

/// [`Completer`] backed by the OpenAI HTTP API.
#[derive(Debug, Clone)]
pub struct OpenAiCompleter {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiCompleter {
    /// Build the adapter with an HTTP client honouring `config.timeout`.
    pub fn new(config: OpenAiConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Config(format!("HTTP client build failed: {e}")))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Completer for OpenAiCompleter {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| CompletionError::Config("OPENAI_API_KEY is not set".to_string()))?;

        let body = OpenAiRequest {
            model: &self.config.model,
            messages: build_messages(system_prompt, user_prompt),
            max_tokens,
        };

        debug!(model = %self.config.model, max_tokens, "requesting completion");

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout(self.config.timeout)
                } else {
                    CompletionError::Request(e.to_string())
                }
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(CompletionError::Api { status, body });
        }

        let data: OpenAiResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::Parse(format!("OpenAI response parse error: {e}")))?;

        first_reply(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> OpenAiResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn request_body_has_two_messages_and_ceiling() {
        let body = OpenAiRequest {
            model: DEFAULT_MODEL,
            messages: build_messages("persona", "prompt"),
            max_tokens: 100,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "prompt");
    }

    #[test]
    fn first_reply_is_trimmed() {
        let resp = parse(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "  SESMag is...\n"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }));
        assert_eq!(first_reply(resp).unwrap(), "SESMag is...");
    }

    #[test]
    fn no_choices_is_parse_error() {
        let resp = parse(serde_json::json!({"choices": []}));
        assert!(matches!(first_reply(resp), Err(CompletionError::Parse(_))));
    }

    #[test]
    fn blank_or_null_content_is_empty_reply() {
        let blank = parse(serde_json::json!({"choices": [{"message": {"content": "   "}}]}));
        assert!(matches!(first_reply(blank), Err(CompletionError::EmptyReply)));

        let null = parse(serde_json::json!({"choices": [{"message": {"content": null}}]}));
        assert!(matches!(first_reply(null), Err(CompletionError::EmptyReply)));
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let completer = OpenAiCompleter::new(OpenAiConfig {
            base_url: "http://localhost:8080/v1/".into(),
            ..OpenAiConfig::default()
        })
        .unwrap();
        assert_eq!(completer.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let completer = OpenAiCompleter::new(OpenAiConfig::default()).unwrap();
        let err = completer.complete("s", "u", 10).await.unwrap_err();
        assert!(matches!(err, CompletionError::Config(_)));
    }
}
