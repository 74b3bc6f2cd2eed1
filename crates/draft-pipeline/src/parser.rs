//! Input parser stage: validates the prompt and normalizes tone,
//! recipient and constraints.

use serde::Deserialize;
use tracing::debug;

use draft_core::{Constraints, ParsedInput, Tone};
use llm_core::{complete_json, CompletionRequest, Llm};

use crate::state::DraftRequest;

/// Structured output the model returns for a parse request.
#[derive(Debug, Deserialize)]
struct ParsedOutput {
    prompt: String,
    #[serde(default)]
    recipient: Option<String>,
    #[serde(default)]
    tone: Option<String>,
    #[serde(default)]
    max_length: Option<u32>,
    #[serde(default)]
    language: Option<String>,
}

/// Parse and validate the raw request.
///
/// An empty prompt yields no parsed input plus an error note. A model
/// failure falls back to the caller's stated inputs so the pipeline can
/// still produce a draft.
pub(crate) async fn parse_input(
    llm: &dyn Llm,
    request: &DraftRequest,
) -> (Option<ParsedInput>, Option<String>) {
    if request.raw_prompt.trim().is_empty() {
        return (None, Some("Prompt cannot be empty".to_string()));
    }

    let prompt = format!(
        "Parse and normalize this email request. Extract recipient (if mentioned), tone, \
         and any constraints (length, language).\n\n\
         User's stated tone preference: {}\n\
         User's stated recipient (if any): {}\n\n\
         Raw prompt:\n{}\n\n\
         Return JSON with fields: prompt, recipient, tone, max_length, language. \
         For tone, use one of: formal, casual, assertive, friendly, professional.\n\
         Use the user's stated tone if they provided one and the prompt doesn't override it. \
         Respond with JSON only.",
        request.user_tone,
        request.user_recipient.as_deref().unwrap_or("not provided"),
        request.raw_prompt,
    );

    let completion_request = CompletionRequest::new(prompt).with_temperature(0.1);
    match complete_json::<ParsedOutput>(llm, completion_request).await {
        Ok(out) => {
            let tone = match out.tone.as_deref() {
                Some(label) => Tone::from_label(label),
                None => Tone::from_label(&request.user_tone),
            };
            debug!("Parsed input with tone {}", tone);
            let parsed = ParsedInput {
                prompt: out.prompt,
                recipient: out.recipient.or_else(|| request.user_recipient.clone()),
                tone,
                constraints: Constraints {
                    max_length: out.max_length,
                    language: out.language.unwrap_or_else(|| "en".to_string()),
                },
            };
            (Some(parsed), None)
        }
        Err(e) => {
            // Fall back to the caller's inputs directly
            let parsed = ParsedInput {
                prompt: request.raw_prompt.trim().to_string(),
                recipient: request.user_recipient.clone(),
                tone: Tone::from_label(&request.user_tone),
                constraints: Constraints::default(),
            };
            (Some(parsed), Some(format!("Parse fallback used: {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_llm::{FailingLlm, StaticLlm};

    #[tokio::test]
    async fn test_empty_prompt_rejected_without_model_call() {
        let llm = StaticLlm::new("{}");

        let (parsed, error) = parse_input(&llm, &DraftRequest::new("   ")).await;

        assert!(parsed.is_none());
        assert_eq!(error.as_deref(), Some("Prompt cannot be empty"));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_parses_structured_output() {
        let llm = StaticLlm::new(
            r#"{"prompt": "Ask Dana for the Q3 report", "recipient": "Dana", "tone": "formal", "max_length": 150, "language": "en"}"#,
        );

        let request = DraftRequest::new("ask dana for the q3 report").with_tone("casual");
        let (parsed, error) = parse_input(&llm, &request).await;

        let parsed = parsed.unwrap();
        assert!(error.is_none());
        assert_eq!(parsed.prompt, "Ask Dana for the Q3 report");
        assert_eq!(parsed.recipient.as_deref(), Some("Dana"));
        assert_eq!(parsed.tone, Tone::Formal);
        assert_eq!(parsed.constraints.max_length, Some(150));
    }

    #[tokio::test]
    async fn test_unknown_tone_label_defaults_to_professional() {
        let llm =
            StaticLlm::new(r#"{"prompt": "hello", "tone": "sarcastic"}"#);

        let (parsed, _) = parse_input(&llm, &DraftRequest::new("hello")).await;

        assert_eq!(parsed.unwrap().tone, Tone::Professional);
    }

    #[tokio::test]
    async fn test_missing_recipient_falls_back_to_stated() {
        let llm = StaticLlm::new(r#"{"prompt": "hello"}"#);

        let request = DraftRequest::new("hello").with_recipient("Sam");
        let (parsed, _) = parse_input(&llm, &request).await;

        assert_eq!(parsed.unwrap().recipient.as_deref(), Some("Sam"));
    }

    #[tokio::test]
    async fn test_model_failure_falls_back_to_raw_inputs() {
        let llm = FailingLlm::default();

        let request = DraftRequest::new("  ask for the report  ")
            .with_tone("assertive")
            .with_recipient("Dana");
        let (parsed, error) = parse_input(&llm, &request).await;

        let parsed = parsed.unwrap();
        assert_eq!(parsed.prompt, "ask for the report");
        assert_eq!(parsed.recipient.as_deref(), Some("Dana"));
        assert_eq!(parsed.tone, Tone::Assertive);
        assert!(error.unwrap().starts_with("Parse fallback used:"));
    }
}
