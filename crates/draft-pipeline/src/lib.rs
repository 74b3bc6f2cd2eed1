//! Multi-stage email draft pipeline.
//!
//! This crate provides the [`Pipeline`] type which turns a raw request
//! into a reviewed, personalized email draft using a sequence of model
//! and pure-text stages.
//!
//! # Architecture
//!
//! ```text
//! DraftRequest
//!      ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        PIPELINE                             │
//! │                                                             │
//! │  1. Parse input (validate prompt, extract recipient/tone)   │
//! │         ↓                                                   │
//! │  2. Classify intent (or honor an exact override)            │
//! │         ↓                                                   │
//! │  3. Build tone context (directive + optional sample)        │
//! │         ↓                                                   │
//! │  4. Generate draft (with profile + recent history)     ◄──┐ │
//! │         ↓                                                 │ │
//! │  5. Personalize (replace placeholders, append signature)  │ │
//! │         ↓                                                 │ │
//! │  6. Review (grammar, tone alignment, coherence)           │ │
//! │         ↓                                                 │ │
//! │  7. Log to history, then retry on failed review ──────────┘ │
//! │     (bounded by max_retries)                                │
//! └─────────────────────────────────────────────────────────────┘
//!      ↓
//! PipelineState (final draft, review verdict, errors)
//! ```
//!
//! Stage failures never abort a run: each stage degrades to a usable
//! fallback and notes the problem in the state's error list.
//!
//! # Example
//!
//! ```rust,ignore
//! use draft_pipeline::{DraftRequest, Pipeline};
//! use llm_client::AssistantConfig;
//! use profile_store::ProfileStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AssistantConfig::load();
//!     let store = ProfileStore::new("profiles.json");
//!     let pipeline = Pipeline::from_config(&config, store)?;
//!
//!     let request = DraftRequest::new("ask dana for the q3 report")
//!         .with_tone("formal")
//!         .with_user_id("u1");
//!     let state = pipeline.run(request).await;
//!
//!     if let Some(draft) = state.final_draft() {
//!         println!("{}\n\n{}", draft.subject, draft.body);
//!     }
//!     Ok(())
//! }
//! ```

mod drafter;
mod intent;
mod parser;
mod personalize;
mod pipeline;
mod review;
mod state;
mod text;
mod tone;

pub use drafter::{ERROR_SUBJECT, PLACEHOLDER_SUBJECT};
pub use pipeline::Pipeline;
pub use state::{DraftRequest, PipelineState};
pub use tone::{directive_for, ToneLibrary, DEFAULT_SAMPLES_DIR};
