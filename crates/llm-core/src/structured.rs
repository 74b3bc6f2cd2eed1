//! Structured-output helpers.
//!
//! The pipeline asks models to respond with JSON only. Models still
//! occasionally wrap the payload in markdown code fences or prose, so the
//! helpers here locate the JSON document before deserializing.

use serde::de::DeserializeOwned;

use crate::error::LlmError;
use crate::request::CompletionRequest;
use crate::trait_def::Llm;

/// Extract the JSON document from a model reply.
///
/// Strips surrounding markdown code fences and, failing that, falls back
/// to the span between the first `{` and the last `}`. Returns the trimmed
/// input unchanged when no narrowing applies.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix("```") {
        // Skip the fence line ("```json" or bare "```")
        let body = match rest.find('\n') {
            Some(idx) => &rest[idx + 1..],
            None => rest,
        };
        let body = body.strip_suffix("```").unwrap_or(body);
        return body.trim();
    }

    if !trimmed.starts_with('{') {
        if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
            if start < end {
                return &trimmed[start..=end];
            }
        }
    }

    trimmed
}

/// Run a completion and deserialize the reply as JSON.
///
/// The request's prompt is expected to instruct the model to respond with
/// JSON only. A reply that cannot be parsed yields
/// [`LlmError::MalformedOutput`].
pub async fn complete_json<T: DeserializeOwned>(
    llm: &dyn Llm,
    request: CompletionRequest,
) -> Result<T, LlmError> {
    let completion = llm.complete(request).await?;
    let payload = extract_json(&completion.text);

    serde_json::from_str(payload).map_err(|e| LlmError::MalformedOutput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{async_trait, Completion};
    use serde::Deserialize;

    #[test]
    fn test_extract_json_plain() {
        assert_eq!(extract_json(r#"{"a": 1}"#), r#"{"a": 1}"#);
        assert_eq!(extract_json("  {\"a\": 1}\n"), r#"{"a": 1}"#);
    }

    #[test]
    fn test_extract_json_fenced() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(fenced), r#"{"a": 1}"#);

        let bare_fence = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(bare_fence), r#"{"a": 1}"#);
    }

    #[test]
    fn test_extract_json_embedded_in_prose() {
        let reply = "Sure! Here you go: {\"a\": 1} Hope that helps.";
        assert_eq!(extract_json(reply), r#"{"a": 1}"#);
    }

    struct CannedLlm(&'static str);

    #[async_trait]
    impl Llm for CannedLlm {
        async fn complete(&self, _request: CompletionRequest) -> Result<Completion, LlmError> {
            Ok(Completion {
                text: self.0.to_string(),
            })
        }

        fn name(&self) -> &str {
            "CannedLlm"
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Out {
        value: u32,
    }

    #[tokio::test]
    async fn test_complete_json_parses() {
        let llm = CannedLlm("```json\n{\"value\": 7}\n```");
        let out: Out = complete_json(&llm, CompletionRequest::new("x")).await.unwrap();
        assert_eq!(out, Out { value: 7 });
    }

    #[tokio::test]
    async fn test_complete_json_malformed() {
        let llm = CannedLlm("not json at all");
        let result: Result<Out, _> = complete_json(&llm, CompletionRequest::new("x")).await;
        assert!(matches!(result, Err(LlmError::MalformedOutput(_))));
    }
}
