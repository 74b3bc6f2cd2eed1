//! Fallback wrapper: retry a failed completion on a second client.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use llm_core::{Completion, CompletionRequest, Llm, LlmError};

/// An [`Llm`] that retries a failed completion on a fallback client.
///
/// The primary client handles every request first; only when it fails is
/// the same request replayed on the fallback. The fallback's error is
/// returned when both fail.
pub struct FallbackLlm {
    primary: Arc<dyn Llm>,
    fallback: Arc<dyn Llm>,
    name: String,
}

impl FallbackLlm {
    /// Create a new wrapper over a primary and a fallback client.
    pub fn new(primary: Arc<dyn Llm>, fallback: Arc<dyn Llm>) -> Self {
        let name = format!("{}+{}", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

#[async_trait]
impl Llm for FallbackLlm {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        match self.primary.complete(request.clone()).await {
            Ok(completion) => Ok(completion),
            Err(e) => {
                warn!(
                    "Primary client {} failed ({}), trying fallback {}",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );
                self.fallback.complete(request).await
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
