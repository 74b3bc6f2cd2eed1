//! Provider clients and configuration for the email draft assistant.
//!
//! This crate implements the [`Llm`](llm_core::Llm) trait for the three
//! supported providers and wires them to configuration:
//!
//! - [`OpenAiClient`] / [`AnthropicClient`] / [`CohereClient`] - HTTP clients
//! - [`Provider`] - closed provider enumeration, resolved once at load time
//! - [`AssistantConfig`] - TOML file + environment overrides, with defaults
//! - [`build_from_config`] - factory producing the primary client, wrapped
//!   in [`FallbackLlm`] when a fallback provider is configured
//!
//! API keys are read from the environment when a client is constructed;
//! a missing key for the selected primary provider is a fatal
//! configuration error.
//!
//! # Example
//!
//! ```rust,no_run
//! use llm_client::{build_from_config, AssistantConfig};
//!
//! # fn main() -> Result<(), llm_core::LlmError> {
//! let config = AssistantConfig::load();
//! let llm = build_from_config(&config)?;
//! # Ok(())
//! # }
//! ```

mod anthropic;
mod cohere;
mod config;
mod factory;
mod fallback;
mod openai;

pub use anthropic::{AnthropicClient, AnthropicConfig};
pub use cohere::{CohereClient, CohereConfig};
pub use config::{AssistantConfig, Provider, DEFAULT_CONFIG_FILE};
pub use factory::{build_client, build_from_config};
pub use fallback::FallbackLlm;
pub use openai::{OpenAiClient, OpenAiConfig};

// Re-export llm-core types for convenience
pub use llm_core::{async_trait, Completion, CompletionRequest, Llm, LlmError};
