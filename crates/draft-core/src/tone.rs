//! Tone vocabulary for generated emails.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested stylistic register for an email.
///
/// The set is closed; any label outside it maps to [`Tone::Professional`]
/// via [`Tone::from_label`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Formal, respectful register.
    Formal,
    /// Casual, conversational register.
    Casual,
    /// Assertive, direct register.
    Assertive,
    /// Warm, friendly register.
    Friendly,
    /// Professional, balanced register (the safe default).
    #[default]
    Professional,
}

impl Tone {
    /// All members of the vocabulary, in declaration order.
    pub const ALL: [Tone; 5] = [
        Tone::Formal,
        Tone::Casual,
        Tone::Assertive,
        Tone::Friendly,
        Tone::Professional,
    ];

    /// Get the canonical label for this tone.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Assertive => "assertive",
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
        }
    }

    /// Map a free-form label to a tone.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unrecognized labels map to [`Tone::Professional`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "formal" => Tone::Formal,
            "casual" => Tone::Casual,
            "assertive" => Tone::Assertive,
            "friendly" => Tone::Friendly,
            "professional" => Tone::Professional,
            _ => Tone::Professional,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known() {
        assert_eq!(Tone::from_label("formal"), Tone::Formal);
        assert_eq!(Tone::from_label("Casual"), Tone::Casual);
        assert_eq!(Tone::from_label("  friendly "), Tone::Friendly);
        assert_eq!(Tone::from_label("ASSERTIVE"), Tone::Assertive);
    }

    #[test]
    fn test_from_label_unknown_defaults_professional() {
        assert_eq!(Tone::from_label("sarcastic"), Tone::Professional);
        assert_eq!(Tone::from_label(""), Tone::Professional);
    }

    #[test]
    fn test_serde_roundtrip() {
        for tone in Tone::ALL {
            let json = serde_json::to_string(&tone).unwrap();
            assert_eq!(json, format!("\"{}\"", tone.as_str()));
            let back: Tone = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tone);
        }
    }
}
