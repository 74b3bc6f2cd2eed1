//! Intent classifier stage.

use serde::Deserialize;
use tracing::debug;

use draft_core::{Intent, ParsedInput};
use llm_core::{complete_json, CompletionRequest, Llm};

#[derive(Debug, Deserialize)]
struct IntentOutput {
    intent: String,
}

/// Classify the request into one of the known intents.
///
/// An override matching a known intent label exactly skips the model
/// entirely. Classification never fails the pipeline: with no parsed
/// input, an unknown label or a model error the result is
/// [`Intent::Other`]. A model error additionally yields a note for the
/// shared error list.
pub(crate) async fn classify_intent(
    llm: &dyn Llm,
    parsed: Option<&ParsedInput>,
    user_intent_override: Option<&str>,
) -> (Intent, Option<String>) {
    if let Some(label) = user_intent_override {
        if let Some(intent) = Intent::from_str(label) {
            debug!("Intent override: {}", intent);
            return (intent, None);
        }
    }

    let Some(parsed) = parsed else {
        return (Intent::Other, None);
    };

    let vocabulary = Intent::ALL
        .iter()
        .map(|i| i.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let prompt = format!(
        "Classify the intent of this email request into exactly one of: {vocabulary}.\n\n\
         Request: {}\n\n\
         Respond with JSON only: {{\"intent\": \"<value>\"}}",
        parsed.prompt,
    );

    let request = CompletionRequest::new(prompt).with_temperature(0.0);
    match complete_json::<IntentOutput>(llm, request).await {
        Ok(out) => (Intent::from_label(&out.intent), None),
        Err(e) => {
            debug!("Intent classification failed, using other: {}", e);
            (Intent::Other, Some(format!("Intent fallback used: {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_core::{Constraints, Tone};
    use mock_llm::{FailingLlm, StaticLlm};

    fn parsed(prompt: &str) -> ParsedInput {
        ParsedInput {
            prompt: prompt.to_string(),
            recipient: None,
            tone: Tone::Professional,
            constraints: Constraints::default(),
        }
    }

    #[tokio::test]
    async fn test_valid_override_skips_model() {
        let llm = FailingLlm::default();

        let (intent, note) =
            classify_intent(&llm, Some(&parsed("sorry about that")), Some("apology")).await;

        assert_eq!(intent, Intent::Apology);
        assert!(note.is_none());
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_override_falls_through_to_model() {
        let llm = StaticLlm::new(r#"{"intent": "outreach"}"#);

        let (intent, _) = classify_intent(&llm, Some(&parsed("hello")), Some("sales_pitch")).await;

        assert_eq!(intent, Intent::Outreach);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_no_parsed_input_is_other() {
        let llm = FailingLlm::default();

        let (intent, note) = classify_intent(&llm, None, None).await;

        assert_eq!(intent, Intent::Other);
        assert!(note.is_none());
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_lenient_label_normalization() {
        let llm = StaticLlm::new(r#"{"intent": "Follow-Up"}"#);

        let (intent, _) = classify_intent(&llm, Some(&parsed("checking in")), None).await;

        assert_eq!(intent, Intent::FollowUp);
    }

    #[tokio::test]
    async fn test_model_failure_is_other_with_note() {
        let llm = FailingLlm::new("model offline");

        let (intent, note) = classify_intent(&llm, Some(&parsed("hello")), None).await;

        assert_eq!(intent, Intent::Other);
        let note = note.unwrap();
        assert!(note.starts_with("Intent fallback used:"));
        assert!(note.contains("model offline"));
    }
}
