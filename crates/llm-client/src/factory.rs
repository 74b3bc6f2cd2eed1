//! Client construction from configuration.

use std::sync::Arc;

use tracing::{info, warn};

use llm_core::{Llm, LlmError};

use crate::anthropic::{AnthropicClient, AnthropicConfig};
use crate::cohere::{CohereClient, CohereConfig};
use crate::config::{AssistantConfig, Provider};
use crate::fallback::FallbackLlm;
use crate::openai::{OpenAiClient, OpenAiConfig};

/// Build a client for a single provider.
///
/// Reads the provider's API key from the environment and fails with
/// [`LlmError::Configuration`] when it is missing.
pub fn build_client(provider: Provider, model: &str) -> Result<Arc<dyn Llm>, LlmError> {
    let client: Arc<dyn Llm> = match provider {
        Provider::OpenAi => Arc::new(OpenAiClient::new(OpenAiConfig::from_env(model)?)?),
        Provider::Anthropic => Arc::new(AnthropicClient::new(AnthropicConfig::from_env(model)?)?),
        Provider::Cohere => Arc::new(CohereClient::new(CohereConfig::from_env(model)?)?),
    };
    Ok(client)
}

/// Build the client described by an [`AssistantConfig`].
///
/// The primary provider must be buildable. When a fallback provider is
/// configured it is wrapped around the primary with [`FallbackLlm`]; a
/// fallback that cannot be built (usually a missing API key) is skipped
/// with a warning rather than failing startup.
pub fn build_from_config(config: &AssistantConfig) -> Result<Arc<dyn Llm>, LlmError> {
    let primary = build_client(config.primary_provider, &config.primary_model)?;
    info!(
        "Built primary client {} ({})",
        config.primary_provider, config.primary_model
    );

    let Some((provider, model)) = config.fallback() else {
        return Ok(primary);
    };

    match build_client(provider, model) {
        Ok(fallback) => {
            info!("Built fallback client {} ({})", provider, model);
            Ok(Arc::new(FallbackLlm::new(primary, fallback)))
        }
        Err(e) => {
            warn!("Fallback client {} unavailable, continuing without: {}", provider, e);
            Ok(primary)
        }
    }
}
