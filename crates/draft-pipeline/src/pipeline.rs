//! Pipeline controller: runs the stages in order with one retry edge.

use std::sync::Arc;

use tracing::{debug, info, warn};

use llm_client::{build_from_config, AssistantConfig};
use llm_core::{Llm, LlmError};
use profile_store::ProfileStore;

use crate::drafter::generate_draft;
use crate::intent::classify_intent;
use crate::parser::parse_input;
use crate::personalize::personalize;
use crate::review::review_draft;
use crate::state::{DraftRequest, PipelineState};
use crate::tone::ToneLibrary;

/// Number of review issues quoted in a retry reason.
const RETRY_REASON_ISSUES: usize = 3;

/// Coordinates the draft stages for one request at a time.
pub struct Pipeline {
    llm: Arc<dyn Llm>,
    store: ProfileStore,
    tones: ToneLibrary,
    max_retries: u32,
}

impl Pipeline {
    /// Create a pipeline over a model client and profile store.
    pub fn new(llm: Arc<dyn Llm>, store: ProfileStore, max_retries: u32) -> Self {
        Self {
            llm,
            store,
            tones: ToneLibrary::default(),
            max_retries,
        }
    }

    /// Build the model client described by the configuration.
    pub fn from_config(config: &AssistantConfig, store: ProfileStore) -> Result<Self, LlmError> {
        let llm = build_from_config(config)?;
        Ok(Self::new(llm, store, config.max_retries))
    }

    /// Replace the tone library, e.g. to point at a samples directory.
    pub fn with_tone_library(mut self, tones: ToneLibrary) -> Self {
        self.tones = tones;
        self
    }

    /// Run the full pipeline for one request.
    ///
    /// Always returns a final state; stage failures degrade the output
    /// and are collected in `state.errors` instead of aborting.
    pub async fn run(&self, request: DraftRequest) -> PipelineState {
        info!("Drafting for user {}", request.user_id);
        let mut state = PipelineState::new(request);

        let (parsed, parse_error) = parse_input(self.llm.as_ref(), &state.request).await;
        if let Some(error) = parse_error {
            warn!("Input parser: {}", error);
            state.errors.push(error);
        }
        state.parsed_input = parsed;

        let (intent, intent_error) = classify_intent(
            self.llm.as_ref(),
            state.parsed_input.as_ref(),
            state.request.user_intent_override.as_deref(),
        )
        .await;
        if let Some(error) = intent_error {
            warn!("Intent classifier: {}", error);
            state.errors.push(error);
        }
        state.intent = intent;
        debug!("Classified intent: {}", state.intent);

        state.tone_context = self
            .tones
            .context_for(state.parsed_input.as_ref(), state.intent);

        loop {
            let profile = match self.store.load(&state.request.user_id).await {
                Ok(profile) => profile,
                Err(e) => {
                    warn!("Profile load failed, drafting without profile: {}", e);
                    None
                }
            };

            let (draft, draft_error) = generate_draft(
                self.llm.as_ref(),
                state.parsed_input.as_ref(),
                state.intent,
                &state.tone_context,
                profile.as_ref(),
            )
            .await;
            if let Some(error) = draft_error {
                warn!("Draft generator: {}", error);
                state.errors.push(error);
            }

            let personalized = personalize(&draft, profile.as_ref());
            let (review, review_error) =
                review_draft(self.llm.as_ref(), Some(&personalized), &state.tone_context).await;
            if let Some(error) = review_error {
                warn!("Reviewer: {}", error);
                state.errors.push(error);
            }

            self.record_turn(&mut state, &personalized).await;

            state.draft = Some(draft);
            state.personalized_draft = Some(personalized);

            let retry = !review.passed && state.retry_count < self.max_retries;
            if retry {
                state.retry_count += 1;
                let reason = review
                    .issues
                    .iter()
                    .take(RETRY_REASON_ISSUES)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join("; ");
                info!(
                    "Review failed, retrying ({}/{}): {}",
                    state.retry_count, self.max_retries, reason
                );
                state.retry_reason = Some(reason);
            }
            state.review = Some(review);

            if !retry {
                break;
            }
        }

        state
    }

    /// Log the attempt to the user's history. Store failures are
    /// non-fatal and recorded in the state's error list.
    async fn record_turn(&self, state: &mut PipelineState, draft: &draft_core::DraftResult) {
        let intent = draft
            .intent
            .map(|i| i.as_str())
            .unwrap_or("other")
            .to_string();
        let tone = draft
            .tone
            .map(|t| t.as_str())
            .unwrap_or("professional")
            .to_string();
        let user_id = state.request.user_id.clone();

        if let Err(e) = self
            .store
            .append_draft(&user_id, &draft.subject, &intent, &tone)
            .await
        {
            warn!("Failed to log draft summary: {}", e);
            state.errors.push(format!("History write failed: {e}"));
            return;
        }
        if let Err(e) = self
            .store
            .append_conversation(
                &user_id,
                &state.request.raw_prompt,
                &draft.subject,
                &draft.body,
                &intent,
                &tone,
            )
            .await
        {
            warn!("Failed to log conversation turn: {}", e);
            state.errors.push(format!("History write failed: {e}"));
        }
    }
}
