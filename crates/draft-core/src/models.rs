//! Pipeline stage outputs.

use serde::{Deserialize, Serialize};

use crate::{Intent, Tone};

/// Generation constraints attached to a parsed request.
///
/// Immutable once attached to a [`ParsedInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    /// Maximum word length hint, if the request mentioned one.
    #[serde(default)]
    pub max_length: Option<u32>,
    /// Language code for the email.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_length: None,
            language: default_language(),
        }
    }
}

/// Normalized output of the input parser.
///
/// Created once per pipeline invocation and never mutated; retries reuse
/// the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInput {
    /// Normalized request text.
    pub prompt: String,
    /// Recipient name or address, if known.
    pub recipient: Option<String>,
    /// Requested tone.
    pub tone: Tone,
    /// Generation constraints.
    #[serde(default)]
    pub constraints: Constraints,
}

/// A generated email draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftResult {
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
    /// Classified intent, if known.
    pub intent: Option<Intent>,
    /// Applied tone, if known.
    pub tone: Option<Tone>,
}

/// Verdict from the review stage.
///
/// Overwritten whole on every review pass; verdicts are not merged across
/// retries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    /// Whether the draft passed review.
    pub passed: bool,
    /// Suggested edits.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Detected issues.
    #[serde(default)]
    pub issues: Vec<String>,
}

impl ReviewResult {
    /// A passing verdict with no notes.
    pub fn pass() -> Self {
        Self {
            passed: true,
            ..Self::default()
        }
    }

    /// A failing verdict with a single issue.
    pub fn failed(issue: impl Into<String>) -> Self {
        Self {
            passed: false,
            suggestions: Vec::new(),
            issues: vec![issue.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_default_language() {
        let constraints = Constraints::default();
        assert_eq!(constraints.language, "en");
        assert!(constraints.max_length.is_none());
    }

    #[test]
    fn test_constraints_deserialize_missing_fields() {
        let constraints: Constraints = serde_json::from_str("{}").unwrap();
        assert_eq!(constraints, Constraints::default());
    }

    #[test]
    fn test_review_result_constructors() {
        let pass = ReviewResult::pass();
        assert!(pass.passed);
        assert!(pass.issues.is_empty());

        let fail = ReviewResult::failed("No draft to review");
        assert!(!fail.passed);
        assert_eq!(fail.issues, vec!["No draft to review".to_string()]);
    }

    #[test]
    fn test_parsed_input_roundtrip() {
        let parsed = ParsedInput {
            prompt: "ask for the report".to_string(),
            recipient: Some("Dana".to_string()),
            tone: Tone::Formal,
            constraints: Constraints {
                max_length: Some(150),
                language: "en".to_string(),
            },
        };

        let json = serde_json::to_string(&parsed).unwrap();
        let back: ParsedInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed);
    }
}
