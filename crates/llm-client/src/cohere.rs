//! Cohere chat client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use llm_core::{Completion, CompletionRequest, Llm, LlmError};

/// Configuration for [`CohereClient`].
#[derive(Debug, Clone)]
pub struct CohereConfig {
    /// API base URL.
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model name to use.
    pub model: String,
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.cohere.com".to_string(),
            api_key: String::new(),
            model: "command-r-plus".to_string(),
        }
    }
}

impl CohereConfig {
    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `COHERE_API_KEY` - API key for authentication
    ///
    /// Optional:
    /// - `COHERE_API_URL` - API base URL (default: https://api.cohere.com)
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = std::env::var("COHERE_API_KEY")
            .map_err(|_| LlmError::Configuration("COHERE_API_KEY not set".to_string()))?;
        let api_url =
            std::env::var("COHERE_API_URL").unwrap_or_else(|_| "https://api.cohere.com".to_string());

        Ok(Self {
            api_url,
            api_key,
            model: model.into(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    preamble: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// An [`Llm`] implementation backed by the Cohere chat API.
pub struct CohereClient {
    client: Client,
    config: CohereConfig,
}

impl CohereClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CohereConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &CohereConfig {
        &self.config
    }
}

#[async_trait]
impl Llm for CohereClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        let url = format!("{}/v1/chat", self.config.api_url);

        let body = ChatRequest {
            model: self.config.model.clone(),
            message: request.prompt,
            preamble: request.system,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!("Sending request to Cohere API: model={}", body.model);

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
                .map(|e| e.message)
                .unwrap_or(error_text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedOutput(format!("Failed to parse response: {}", e)))?;

        Ok(Completion {
            text: completion.text,
        })
    }

    fn name(&self) -> &str {
        "CohereClient"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CohereConfig::default();
        assert_eq!(config.api_url, "https://api.cohere.com");
        assert_eq!(config.model, "command-r-plus");
    }

    #[test]
    fn test_client_name() {
        let client = CohereClient::new(CohereConfig::default()).unwrap();
        assert_eq!(client.name(), "CohereClient");
    }
}
