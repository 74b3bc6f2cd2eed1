//! User profile and bounded interaction history.

use serde::{Deserialize, Serialize};

use crate::Tone;

/// Maximum number of prior draft summaries kept per profile.
pub const MAX_PRIOR_DRAFTS: usize = 20;

/// Maximum number of conversation turns kept per profile.
pub const MAX_CONVERSATION_TURNS: usize = 10;

/// User style preferences applied during personalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePreferences {
    /// Preferred tone, if declared.
    #[serde(default)]
    pub preferred_tone: Option<Tone>,
    /// Custom signature; preferred over the bare name when set.
    #[serde(default)]
    pub signature: Option<String>,
    /// Phrases to avoid.
    #[serde(default)]
    pub avoid_phrases: Vec<String>,
    /// Phrases to prefer.
    #[serde(default)]
    pub preferred_phrases: Vec<String>,
}

impl StylePreferences {
    /// Whether no preference data is set at all.
    pub fn is_empty(&self) -> bool {
        self.preferred_tone.is_none()
            && self.signature.is_none()
            && self.avoid_phrases.is_empty()
            && self.preferred_phrases.is_empty()
    }
}

/// Summary of a previously generated draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorDraftSummary {
    /// Draft subject line.
    pub subject: String,
    /// Classified intent label.
    pub intent: String,
    /// Applied tone label.
    pub tone: String,
}

/// A full request/draft exchange kept for generation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Original raw request text.
    pub prompt: String,
    /// Final draft subject.
    pub subject: String,
    /// Final draft body.
    pub body: String,
    /// Classified intent label.
    pub intent: String,
    /// Applied tone label.
    pub tone: String,
}

/// Durable per-user preference and history record.
///
/// Created lazily on the first history append for an unknown id. Both
/// history sequences are bounded; appends drop the oldest entries first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: String,
    /// Display name, if known.
    #[serde(default)]
    pub name: Option<String>,
    /// Company name, if known.
    #[serde(default)]
    pub company: Option<String>,
    /// Style preferences for personalization.
    #[serde(default)]
    pub style_preferences: StylePreferences,
    /// Summaries of prior drafts, oldest first (bounded).
    #[serde(default)]
    pub prior_drafts: Vec<PriorDraftSummary>,
    /// Recent full exchanges, oldest first (bounded).
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

impl UserProfile {
    /// Create an empty profile for the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            company: None,
            style_preferences: StylePreferences::default(),
            prior_drafts: Vec::new(),
            conversation_history: Vec::new(),
        }
    }

    /// Resolve the signoff signature: custom signature over bare name.
    pub fn signature(&self) -> Option<&str> {
        self.style_preferences
            .signature
            .as_deref()
            .or(self.name.as_deref())
    }

    /// Whether the profile carries any identity or style data worth
    /// applying during personalization.
    pub fn has_identity(&self) -> bool {
        self.name.is_some() || self.company.is_some() || !self.style_preferences.is_empty()
    }

    /// Append a draft summary, truncating to the last
    /// [`MAX_PRIOR_DRAFTS`] entries.
    pub fn push_draft(&mut self, summary: PriorDraftSummary) {
        self.prior_drafts.push(summary);
        trim_front(&mut self.prior_drafts, MAX_PRIOR_DRAFTS);
    }

    /// Append a conversation turn, truncating to the last
    /// [`MAX_CONVERSATION_TURNS`] entries.
    pub fn push_conversation(&mut self, turn: ConversationTurn) {
        self.conversation_history.push(turn);
        trim_front(&mut self.conversation_history, MAX_CONVERSATION_TURNS);
    }

    /// Reset both history sequences to empty.
    pub fn clear_history(&mut self) {
        self.prior_drafts.clear();
        self.conversation_history.clear();
    }
}

/// Drop entries from the front until `items` fits within `max`.
fn trim_front<T>(items: &mut Vec<T>, max: usize) {
    if items.len() > max {
        let excess = items.len() - max;
        items.drain(0..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(subject: &str) -> PriorDraftSummary {
        PriorDraftSummary {
            subject: subject.to_string(),
            intent: "other".to_string(),
            tone: "professional".to_string(),
        }
    }

    fn turn(prompt: &str) -> ConversationTurn {
        ConversationTurn {
            prompt: prompt.to_string(),
            subject: "Subject".to_string(),
            body: "Body".to_string(),
            intent: "other".to_string(),
            tone: "professional".to_string(),
        }
    }

    #[test]
    fn test_prior_drafts_bounded_oldest_dropped() {
        let mut profile = UserProfile::new("u1");
        for i in 0..25 {
            profile.push_draft(summary(&format!("draft {i}")));
        }

        assert_eq!(profile.prior_drafts.len(), MAX_PRIOR_DRAFTS);
        assert_eq!(profile.prior_drafts[0].subject, "draft 5");
        assert_eq!(profile.prior_drafts.last().unwrap().subject, "draft 24");
    }

    #[test]
    fn test_conversation_history_bounded() {
        let mut profile = UserProfile::new("u1");
        for i in 0..15 {
            profile.push_conversation(turn(&format!("prompt {i}")));
        }

        assert_eq!(profile.conversation_history.len(), MAX_CONVERSATION_TURNS);
        assert_eq!(profile.conversation_history[0].prompt, "prompt 5");
        assert_eq!(
            profile.conversation_history.last().unwrap().prompt,
            "prompt 14"
        );
    }

    #[test]
    fn test_signature_prefers_custom_over_name() {
        let mut profile = UserProfile::new("u1");
        profile.name = Some("Charlie".to_string());
        assert_eq!(profile.signature(), Some("Charlie"));

        profile.style_preferences.signature = Some("Charlie @ Acme".to_string());
        assert_eq!(profile.signature(), Some("Charlie @ Acme"));
    }

    #[test]
    fn test_has_identity() {
        let mut profile = UserProfile::new("u1");
        assert!(!profile.has_identity());

        profile.company = Some("Acme".to_string());
        assert!(profile.has_identity());

        let mut profile = UserProfile::new("u2");
        profile.style_preferences.avoid_phrases = vec!["touch base".to_string()];
        assert!(profile.has_identity());
    }

    #[test]
    fn test_clear_history() {
        let mut profile = UserProfile::new("u1");
        profile.push_draft(summary("a"));
        profile.push_conversation(turn("b"));

        profile.clear_history();

        assert!(profile.prior_drafts.is_empty());
        assert!(profile.conversation_history.is_empty());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        // Older records may carry only the id
        let profile: UserProfile = serde_json::from_str(r#"{"id": "u1"}"#).unwrap();
        assert_eq!(profile.id, "u1");
        assert!(profile.prior_drafts.is_empty());
        assert!(profile.style_preferences.is_empty());
    }
}
