//! Anthropic messages client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use llm_core::{Completion, CompletionRequest, Llm, LlmError};

/// Messages API version header value.
const API_VERSION: &str = "2023-06-01";

/// Default max tokens; the messages API requires the field.
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Configuration for [`AnthropicClient`].
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API base URL.
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model name to use.
    pub model: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.anthropic.com".to_string(),
            api_key: String::new(),
            model: "claude-3-5-haiku-latest".to_string(),
        }
    }
}

impl AnthropicConfig {
    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `ANTHROPIC_API_KEY` - API key for authentication
    ///
    /// Optional:
    /// - `ANTHROPIC_API_URL` - API base URL (default: https://api.anthropic.com)
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| LlmError::Configuration("ANTHROPIC_API_KEY not set".to_string()))?;
        let api_url = std::env::var("ANTHROPIC_API_URL")
            .unwrap_or_else(|_| "https://api.anthropic.com".to_string());

        Ok(Self {
            api_url,
            api_key,
            model: model.into(),
        })
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetails {
    message: String,
}

/// An [`Llm`] implementation backed by the Anthropic messages API.
pub struct AnthropicClient {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AnthropicConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }
}

#[async_trait]
impl Llm for AnthropicClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        let url = format!("{}/v1/messages", self.config.api_url);

        let body = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            messages: vec![Message {
                role: "user",
                content: request.prompt,
            }],
            system: request.system,
            temperature: request.temperature,
        };

        debug!("Sending request to Anthropic API: model={}", body.model);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
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

        let completion: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedOutput(format!("Failed to parse response: {}", e)))?;

        let text = completion
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or_else(|| LlmError::MalformedOutput("No text content in response".to_string()))?;

        Ok(Completion { text })
    }

    fn name(&self) -> &str {
        "AnthropicClient"
    }
}
