//! Assistant configuration: provider/model selection and retry limit.

use std::env;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "assistant.toml";

/// Supported model providers.
///
/// The set is closed: provider selection happens once at configuration
/// load time, and the factory dispatches on this enum rather than on raw
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// OpenAI chat completions API.
    OpenAi,
    /// Anthropic messages API.
    Anthropic,
    /// Cohere chat API.
    Cohere,
}

impl Provider {
    /// Get the canonical label for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Cohere => "cohere",
        }
    }

    /// Parse a provider label from configuration input.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Some(Provider::OpenAi),
            "anthropic" => Some(Provider::Anthropic),
            "cohere" => Some(Provider::Cohere),
            _ => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assistant configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Primary provider.
    pub primary_provider: Provider,
    /// Primary model name.
    pub primary_model: String,
    /// Optional fallback provider, tried when the primary call fails.
    pub fallback_provider: Option<Provider>,
    /// Model name for the fallback provider.
    pub fallback_model: Option<String>,
    /// Maximum number of draft retries after a failed review.
    pub max_retries: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            primary_provider: Provider::OpenAi,
            primary_model: "gpt-4o-mini".to_string(),
            fallback_provider: None,
            fallback_model: None,
            max_retries: 2,
        }
    }
}

/// On-disk configuration shape; every field optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    primary_provider: Option<String>,
    primary_model: Option<String>,
    fallback_provider: Option<String>,
    fallback_model: Option<String>,
    max_retries: Option<u32>,
}

impl AssistantConfig {
    /// Load configuration from file and environment.
    ///
    /// Starts from defaults, merges the TOML file (path from
    /// `ASSISTANT_CONFIG`, default `assistant.toml`; a missing file is not
    /// an error), then applies environment overrides:
    ///
    /// - `PRIMARY_PROVIDER` / `PRIMARY_MODEL`
    /// - `FALLBACK_PROVIDER` / `FALLBACK_MODEL`
    /// - `MAX_RETRIES`
    pub fn load() -> Self {
        let path = env::var("ASSISTANT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(path)
    }

    /// Load configuration from a specific file path plus environment
    /// overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let mut config = Self::from_file(path);
        config.merge_env();
        config
    }

    /// Load configuration from a file only, without environment
    /// overrides. Defaults apply for anything the file leaves out.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let mut config = Self::default();
        config.merge_file(path.as_ref());
        config
    }

    fn merge_file(&mut self, path: &Path) {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            // Absent file is fine; defaults apply.
            Err(_) => return,
        };

        let file: FileConfig = match toml::from_str(&raw) {
            Ok(file) => file,
            Err(e) => {
                warn!("Ignoring unparseable config file {}: {}", path.display(), e);
                return;
            }
        };

        info!("Loaded assistant config from {}", path.display());

        if let Some(label) = file.primary_provider {
            self.set_primary_provider(&label);
        }
        if let Some(model) = file.primary_model {
            self.primary_model = model;
        }
        if let Some(label) = file.fallback_provider {
            self.set_fallback_provider(&label);
        }
        if let Some(model) = file.fallback_model {
            self.fallback_model = Some(model);
        }
        if let Some(max_retries) = file.max_retries {
            self.max_retries = max_retries;
        }
    }

    fn merge_env(&mut self) {
        if let Ok(label) = env::var("PRIMARY_PROVIDER") {
            self.set_primary_provider(&label);
        }
        if let Ok(model) = env::var("PRIMARY_MODEL") {
            self.primary_model = model;
        }
        if let Ok(label) = env::var("FALLBACK_PROVIDER") {
            self.set_fallback_provider(&label);
        }
        if let Ok(model) = env::var("FALLBACK_MODEL") {
            self.fallback_model = Some(model);
        }
        if let Ok(raw) = env::var("MAX_RETRIES") {
            match raw.parse() {
                Ok(max_retries) => self.max_retries = max_retries,
                Err(_) => warn!("Ignoring non-numeric MAX_RETRIES: {}", raw),
            }
        }
    }

    fn set_primary_provider(&mut self, label: &str) {
        match Provider::from_str(label) {
            Some(provider) => self.primary_provider = provider,
            None => warn!(
                "Unknown primary provider '{}', keeping {}",
                label, self.primary_provider
            ),
        }
    }

    fn set_fallback_provider(&mut self, label: &str) {
        match Provider::from_str(label) {
            Some(provider) => self.fallback_provider = Some(provider),
            None => warn!("Unknown fallback provider '{}', ignoring", label),
        }
    }

    /// The configured fallback pair, when both provider and model are set.
    pub fn fallback(&self) -> Option<(Provider, &str)> {
        match (self.fallback_provider, self.fallback_model.as_deref()) {
            (Some(provider), Some(model)) => Some((provider, model)),
            _ => None,
        }
    }
}
