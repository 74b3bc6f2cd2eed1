//! Failing mock - every request errors.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use llm_core::{Completion, CompletionRequest, Llm, LlmError};

/// A mock that fails every request.
///
/// Used to exercise the fallback policy of each pipeline stage. Counts
/// requests so short-circuit paths can assert the model was never called.
#[derive(Debug)]
pub struct FailingLlm {
    message: String,
    calls: AtomicUsize,
}

impl Default for FailingLlm {
    fn default() -> Self {
        Self::new("synthetic failure")
    }
}

impl FailingLlm {
    /// Create a mock failing with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of failed requests.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Llm for FailingLlm {
    async fn complete(&self, _request: CompletionRequest) -> Result<Completion, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(LlmError::Unavailable(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingLlm"
    }
}
