//! Static mock - always returns the same reply.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use llm_core::{Completion, CompletionRequest, Llm, LlmError};

/// A mock that returns the same reply for every request.
#[derive(Debug, Default)]
pub struct StaticLlm {
    reply: String,
    calls: AtomicUsize,
}

impl StaticLlm {
    /// Create a mock that always replies with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completed requests.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Llm for StaticLlm {
    async fn complete(&self, _request: CompletionRequest) -> Result<Completion, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Completion {
            text: self.reply.clone(),
        })
    }

    fn name(&self) -> &str {
        "StaticLlm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_reply() {
        let llm = StaticLlm::new("fixed");

        let first = llm.complete(CompletionRequest::new("a")).await.unwrap();
        let second = llm.complete(CompletionRequest::new("b")).await.unwrap();

        assert_eq!(first.text, "fixed");
        assert_eq!(second.text, "fixed");
        assert_eq!(llm.calls(), 2);
    }
}
