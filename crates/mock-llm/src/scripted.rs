//! Scripted mock - fixed reply sequence with recorded prompts.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use llm_core::{Completion, CompletionRequest, Llm, LlmError};

/// A mock that replays a fixed sequence of replies.
///
/// Replies are consumed front-to-back; a request made after the script is
/// exhausted fails with [`LlmError::Unavailable`]. Every received prompt
/// is recorded so tests can assert what each stage sent.
#[derive(Debug, Default)]
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    /// Create a mock with the given reply sequence.
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Append a reply to the end of the script.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.replies
            .lock()
            .expect("script lock poisoned")
            .push_back(reply.into());
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt lock poisoned").clone()
    }

    /// Number of requests received.
    pub fn calls(&self) -> usize {
        self.prompts.lock().expect("prompt lock poisoned").len()
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.lock().expect("script lock poisoned").len()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        self.prompts
            .lock()
            .expect("prompt lock poisoned")
            .push(request.prompt);

        let next = self
            .replies
            .lock()
            .expect("script lock poisoned")
            .pop_front();

        match next {
            Some(text) => Ok(Completion { text }),
            None => Err(LlmError::Unavailable("script exhausted".to_string())),
        }
    }

    fn name(&self) -> &str {
        "ScriptedLlm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order() {
        let llm = ScriptedLlm::new(["one", "two"]);

        let first = llm.complete(CompletionRequest::new("a")).await.unwrap();
        let second = llm.complete(CompletionRequest::new("b")).await.unwrap();

        assert_eq!(first.text, "one");
        assert_eq!(second.text, "two");
        assert_eq!(llm.remaining(), 0);
    }

    #[tokio::test]
    async fn test_exhausted_script_fails() {
        let llm = ScriptedLlm::new(["only"]);

        llm.complete(CompletionRequest::new("a")).await.unwrap();
        let result = llm.complete(CompletionRequest::new("b")).await;

        assert!(matches!(result, Err(LlmError::Unavailable(_))));
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_prompts_recorded() {
        let llm = ScriptedLlm::new(["one", "two"]);

        llm.complete(CompletionRequest::new("first prompt"))
            .await
            .unwrap();
        llm.complete(CompletionRequest::new("second prompt"))
            .await
            .unwrap();

        assert_eq!(llm.prompts(), vec!["first prompt", "second prompt"]);
    }

    #[tokio::test]
    async fn test_push_reply_extends_script() {
        let llm = ScriptedLlm::new(Vec::<String>::new());
        llm.push_reply("late");

        let completion = llm.complete(CompletionRequest::new("a")).await.unwrap();
        assert_eq!(completion.text, "late");
    }
}
