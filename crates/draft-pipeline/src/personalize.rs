//! Personalizer stage: pure text rewriting from profile data.

use draft_core::{DraftResult, UserProfile};

/// Placeholder tokens models emit for the sender's name.
const NAME_PLACEHOLDERS: [&str; 7] = [
    "[Your Name]",
    "[Name]",
    "[Sender Name]",
    "[Sender]",
    "[Your Full Name]",
    "[Full Name]",
    "[Insert Name]",
];

/// Apply profile data (name, company, signature) to a draft.
///
/// No model call; deterministic text substitution only. A missing
/// profile, or one without identity or style data, passes the draft
/// through untouched.
pub(crate) fn personalize(draft: &DraftResult, profile: Option<&UserProfile>) -> DraftResult {
    let Some(profile) = profile else {
        return draft.clone();
    };
    if !profile.has_identity() {
        return draft.clone();
    }

    let mut body = draft.body.clone();
    let signature = profile.signature();

    if let Some(company) = profile.company.as_deref() {
        if body.contains("[Company]") {
            body = body.replace("[Company]", company);
        }
    }

    for placeholder in NAME_PLACEHOLDERS {
        if body.contains(placeholder) {
            body = body.replace(placeholder, signature.unwrap_or(""));
        }
    }

    if let Some(signature) = signature {
        let stripped = body.trim_end();
        if stripped.ends_with(signature) {
            body = stripped.to_string();
        } else {
            body = format!("{stripped}\n\n{signature}");
        }
    }

    DraftResult {
        subject: draft.subject.clone(),
        body,
        intent: draft.intent,
        tone: draft.tone,
    }
}
