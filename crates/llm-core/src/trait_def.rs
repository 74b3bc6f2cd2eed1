//! The Llm trait definition.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::request::{Completion, CompletionRequest};

/// A trait for blocking language model invocations.
///
/// Implementations range from HTTP provider clients to scripted test
/// doubles. The trait is object-safe and used as `Arc<dyn Llm>` throughout
/// the pipeline. There is no cancellation support; callers wanting
/// timeouts must wrap the call externally.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Run a completion request and return the generated text.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError>;

    /// Get a human-readable name for this client.
    fn name(&self) -> &str;
}
