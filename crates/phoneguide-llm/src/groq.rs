//! Groq client for the OpenAI-compatible chat-completions API.
//!
//! Configuration comes from [`LlmConfig`]; the API key is read from the
//! environment variable the config names, never from the config file itself.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use phoneguide_core::config::LlmConfig;

use crate::client::{CompletionClient, LlmError};

/// Completion client backed by the Groq HTTP API.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    intent_max_tokens: u32,
    reply_max_tokens: u32,
    reply_temperature: f32,
}

impl GroqClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: impl Into<String>, config: &LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| LlmError::Request(err.to_string()))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            intent_max_tokens: config.intent_max_tokens,
            reply_max_tokens: config.reply_max_tokens,
            reply_temperature: config.reply_temperature,
        })
    }

    /// Create a client reading the API key from the environment variable
    /// named in the config (`GROQ_API_KEY` by default).
    pub fn from_env(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = env::var(&config.api_key_env)
            .map_err(|_| LlmError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(api_key, config)
    }

    async fn send(&self, request: &ChatCompletionRequest<'_>) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %request.model, json_mode = request.response_format.is_some(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|err| LlmError::Request(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(LlmError::Status { status, body });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| LlmError::Parse(err.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(LlmError::EmptyCompletion)
    }

    fn request<'a>(
        &'a self,
        system: &'a str,
        user: &'a str,
        temperature: f32,
        max_tokens: u32,
        json_mode: bool,
    ) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: system,
                },
                WireMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
            response_format: json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        }
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete_json(
        &self,
        system: &str,
        user: &str,
    ) -> Result<serde_json::Value, LlmError> {
        // Temperature 0: intent extraction must be deterministic.
        let request = self.request(system, user, 0.0, self.intent_max_tokens, true);
        let raw = self.send(&request).await?;
        serde_json::from_str(&raw).map_err(|err| LlmError::Parse(err.to_string()))
    }

    async fn complete_text(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request = self.request(
            system,
            user,
            self.reply_temperature,
            self.reply_max_tokens,
            false,
        );
        let text = self.send(&request).await?;
        Ok(text.trim().to_string())
    }
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
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
    content: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> LlmConfig {
        LlmConfig {
            api_key_env: "PHONEGUIDE_TEST_MISSING_KEY".to_string(),
            ..LlmConfig::default()
        }
    }

    // ---- Construction ----

    #[test]
    fn test_from_env_missing_key() {
        let config = test_config();
        let result = GroqClient::from_env(&config);
        assert!(matches!(result, Err(LlmError::MissingApiKey(ref var)) if var == &config.api_key_env));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = LlmConfig {
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            ..LlmConfig::default()
        };
        let client = GroqClient::new("key", &config).unwrap();
        assert_eq!(client.base_url, "https://api.groq.com/openai/v1");
    }

    // ---- Request body shape ----

    #[test]
    fn test_json_request_body() {
        let client = GroqClient::new("key", &LlmConfig::default()).unwrap();
        let request = client.request("sys", "user text", 0.0, 400, true);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "llama-3.3-70b-versatile");
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["max_tokens"], 400);
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "sys");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "user text");
    }

    #[test]
    fn test_text_request_omits_response_format() {
        let client = GroqClient::new("key", &LlmConfig::default()).unwrap();
        let request = client.request("sys", "user text", 0.6, 280, false);
        let body = serde_json::to_value(&request).unwrap();

        assert!(body.get("response_format").is_none());
        assert_eq!(body["max_tokens"], 280);
    }

    // ---- Response parsing ----

    #[test]
    fn test_response_content_extraction() {
        let raw = r#"{"choices": [{"message": {"content": "hello"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_response_no_choices() {
        let raw = r#"{"choices": []}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn test_response_null_content() {
        let raw = r#"{"choices": [{"message": {"content": null}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert!(content.is_none());
    }
}
