//! Core trait and types for language model clients.
//!
//! This crate provides the shared interface every model client in the
//! email draft assistant implements. It defines:
//!
//! - [`Llm`] - The trait all model clients must implement
//! - [`CompletionRequest`] / [`Completion`] - Request and response types
//! - [`LlmError`] - Error types for model invocations
//! - [`complete_json`] - Structured-output helper that parses a JSON reply
//!
//! # Example
//!
//! ```rust
//! use llm_core::{async_trait, Completion, CompletionRequest, Llm, LlmError};
//!
//! struct UppercaseLlm;
//!
//! #[async_trait]
//! impl Llm for UppercaseLlm {
//!     async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
//!         Ok(Completion {
//!             text: request.prompt.to_uppercase(),
//!         })
//!     }
//!
//!     fn name(&self) -> &str {
//!         "UppercaseLlm"
//!     }
//! }
//! ```

mod error;
mod request;
mod structured;
mod trait_def;

pub use error::LlmError;
pub use request::{Completion, CompletionRequest};
pub use structured::{complete_json, extract_json};
pub use trait_def::Llm;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
