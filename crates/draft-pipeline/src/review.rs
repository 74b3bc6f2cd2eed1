//! Reviewer stage: grammar, tone alignment and coherence check.

use serde::Deserialize;
use tracing::debug;

use draft_core::{DraftResult, ReviewResult};
use llm_core::{complete_json, CompletionRequest, Llm};

use crate::text::truncate_chars;

#[derive(Debug, Deserialize)]
struct ReviewOutput {
    passed: bool,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    issues: Vec<String>,
}

/// Review a draft against the expected tone.
///
/// A missing draft fails outright; a model failure passes the draft so
/// an unreliable reviewer cannot block output, and yields a note for
/// the shared error list.
pub(crate) async fn review_draft(
    llm: &dyn Llm,
    draft: Option<&DraftResult>,
    tone_context: &str,
) -> (ReviewResult, Option<String>) {
    let Some(draft) = draft else {
        return (ReviewResult::failed("No draft to review"), None);
    };

    let expected_tone = if tone_context.is_empty() {
        "professional".to_string()
    } else {
        truncate_chars(tone_context, 200)
    };

    let prompt = format!(
        "Review this email draft for:\n\
         1. Grammar and spelling\n\
         2. Tone alignment (expected: {expected_tone})\n\
         3. Contextual coherence and clarity\n\n\
         Subject: {}\n\n\
         Body:\n{}\n\n\
         Return JSON with fields: passed (bool), suggestions (list of strings), \
         issues (list of strings). Respond with JSON only.\n\
         Be lenient - only fail for clear grammar errors or major tone mismatch.",
        draft.subject, draft.body,
    );

    let request = CompletionRequest::new(prompt).with_temperature(0.0);
    match complete_json::<ReviewOutput>(llm, request).await {
        Ok(out) => (
            ReviewResult {
                passed: out.passed,
                suggestions: out.suggestions,
                issues: out.issues,
            },
            None,
        ),
        Err(e) => {
            debug!("Review failed, passing draft through: {}", e);
            (
                ReviewResult::pass(),
                Some(format!("Review fallback used: {e}")),
            )
        }
    }
}
