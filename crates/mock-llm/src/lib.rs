//! Mock [`Llm`] implementations for testing.
//!
//! This crate provides test doubles for the `Llm` trait:
//! - `StaticLlm` - Always returns the same reply
//! - `ScriptedLlm` - Returns a fixed sequence of replies and records prompts
//! - `FailingLlm` - Always fails
//!
//! All mocks count their invocations, which lets tests assert both that a
//! stage called the model and that a short-circuit path did not.
//!
//! # Example
//!
//! ```rust
//! use mock_llm::{CompletionRequest, Llm, ScriptedLlm};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), mock_llm::LlmError> {
//!     let llm = ScriptedLlm::new(["first reply", "second reply"]);
//!
//!     let completion = llm.complete(CompletionRequest::new("hello")).await?;
//!     assert_eq!(completion.text, "first reply");
//!     assert_eq!(llm.calls(), 1);
//!     Ok(())
//! }
//! ```

mod failing;
mod fixed;
mod scripted;

// Re-export llm-core types for convenience
pub use llm_core::{async_trait, Completion, CompletionRequest, Llm, LlmError};

pub use failing::FailingLlm;
pub use fixed::StaticLlm;
pub use scripted::ScriptedLlm;
