//! Shared data model for the email draft assistant.
//!
//! This crate defines the types that flow through the draft pipeline and
//! the profile store:
//!
//! - [`Tone`] / [`Intent`] - closed vocabularies with safe fallbacks
//! - [`ParsedInput`] / [`DraftResult`] / [`ReviewResult`] - stage outputs
//! - [`UserProfile`] and its bounded history entries
//!
//! All types are serde-serializable; [`UserProfile`] is the on-disk layout
//! used by the `profile-store` crate.

mod intent;
mod models;
mod profile;
mod tone;

pub use intent::Intent;
pub use models::{Constraints, DraftResult, ParsedInput, ReviewResult};
pub use profile::{
    ConversationTurn, PriorDraftSummary, StylePreferences, UserProfile, MAX_CONVERSATION_TURNS,
    MAX_PRIOR_DRAFTS,
};
pub use tone::Tone;
