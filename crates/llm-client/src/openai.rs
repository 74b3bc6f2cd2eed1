//! OpenAI chat completions client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use llm_core::{Completion, CompletionRequest, Llm, LlmError};

/// Configuration for [`OpenAiClient`].
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API base URL.
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model name to use.
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl OpenAiConfig {
    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `OPENAI_API_KEY` - API key for authentication
    ///
    /// Optional:
    /// - `OPENAI_API_URL` - API base URL (default: https://api.openai.com)
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::Configuration("OPENAI_API_KEY not set".to_string()))?;
        let api_url = std::env::var("OPENAI_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());

        Ok(Self {
            api_url,
            api_key,
            model: model.into(),
        })
    }
}

/// A chat message on the OpenAI wire.
#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Chat completion request body.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Chat completion response body.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// API error response.
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetails {
    message: String,
}

/// An [`Llm`] implementation backed by the OpenAI chat completions API.
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

#[async_trait]
impl Llm for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let mut messages = Vec::new();
        if let Some(system) = request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: request.prompt,
        });

        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!("Sending request to OpenAI API: model={}", body.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedOutput(format!("Failed to parse response: {}", e)))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::MalformedOutput("No content in response".to_string()))?;

        Ok(Completion { text })
    }

    fn name(&self) -> &str {
        "OpenAiClient"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenAiConfig::default();
        assert_eq!(config.api_url, "https://api.openai.com");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "gpt-4o-mini");
    }

    #[test]
    fn test_client_name() {
        let client = OpenAiClient::new(OpenAiConfig::default()).unwrap();
        assert_eq!(client.name(), "OpenAiClient");
    }
}
