//! Pipeline request and accumulated state.

use draft_core::{DraftResult, Intent, ParsedInput, ReviewResult, Tone};

/// What the caller asks the pipeline for.
#[derive(Debug, Clone)]
pub struct DraftRequest {
    /// Raw request text.
    pub raw_prompt: String,
    /// Stated tone preference label; defaults to professional.
    pub user_tone: String,
    /// Stated recipient, if any.
    pub user_recipient: Option<String>,
    /// Explicit intent label; skips classification when it matches
    /// a known intent exactly.
    pub user_intent_override: Option<String>,
    /// User id for profile lookups and history logging.
    pub user_id: String,
}

impl DraftRequest {
    /// A request with defaults for everything but the prompt.
    pub fn new(raw_prompt: impl Into<String>) -> Self {
        Self {
            raw_prompt: raw_prompt.into(),
            user_tone: Tone::default().as_str().to_string(),
            user_recipient: None,
            user_intent_override: None,
            user_id: "default".to_string(),
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.user_tone = tone.into();
        self
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.user_recipient = Some(recipient.into());
        self
    }

    pub fn with_intent_override(mut self, intent: impl Into<String>) -> Self {
        self.user_intent_override = Some(intent.into());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }
}

/// Everything the pipeline produced for one request.
///
/// Stage outputs accumulate here; a retry overwrites the draft,
/// personalized draft and review but keeps the parse and intent.
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// The originating request.
    pub request: DraftRequest,
    /// Parser output; `None` when the prompt was empty.
    pub parsed_input: Option<ParsedInput>,
    /// Classified intent.
    pub intent: Intent,
    /// Tone directive text handed to the draft generator.
    pub tone_context: String,
    /// Raw generated draft from the latest attempt.
    pub draft: Option<DraftResult>,
    /// Personalized draft from the latest attempt.
    pub personalized_draft: Option<DraftResult>,
    /// Review verdict for the latest attempt.
    pub review: Option<ReviewResult>,
    /// Non-fatal errors accumulated across all stages and attempts.
    pub errors: Vec<String>,
    /// Number of retries consumed.
    pub retry_count: u32,
    /// Why the last retry was triggered, when one was.
    pub retry_reason: Option<String>,
}

impl PipelineState {
    pub(crate) fn new(request: DraftRequest) -> Self {
        Self {
            request,
            parsed_input: None,
            intent: Intent::default(),
            tone_context: String::new(),
            draft: None,
            personalized_draft: None,
            review: None,
            errors: Vec::new(),
            retry_count: 0,
            retry_reason: None,
        }
    }

    /// The draft to present: personalized when available, raw otherwise.
    pub fn final_draft(&self) -> Option<&DraftResult> {
        self.personalized_draft.as_ref().or(self.draft.as_ref())
    }
}
