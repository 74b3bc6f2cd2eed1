//! Draft generator stage.

use serde::Deserialize;

use draft_core::{DraftResult, Intent, ParsedInput, UserProfile};
use llm_core::{complete_json, CompletionRequest, Llm};

use crate::text::truncate_chars;

/// Subject used when there is nothing to draft from.
pub const PLACEHOLDER_SUBJECT: &str = "(No subject)";

/// Subject used when generation itself failed.
pub const ERROR_SUBJECT: &str = "(Error)";

#[derive(Debug, Deserialize)]
struct DraftOutput {
    subject: String,
    body: String,
}

fn conversation_context(profile: Option<&UserProfile>) -> String {
    let Some(profile) = profile else {
        return String::new();
    };
    if profile.conversation_history.is_empty() {
        return String::new();
    }

    let start = profile.conversation_history.len().saturating_sub(3);
    let lines: Vec<String> = profile.conversation_history[start..]
        .iter()
        .map(|turn| {
            format!(
                "- Prompt: {}... | Subject: {}... | Intent: {} | Tone: {}",
                truncate_chars(&turn.prompt, 120),
                truncate_chars(&turn.subject, 80),
                turn.intent,
                turn.tone,
            )
        })
        .collect();
    format!(
        "Here are some of this user's recent email interactions. \
         Keep tone and style consistent where appropriate:\n{}\n\n",
        lines.join("\n"),
    )
}

fn sender_preamble(profile: Option<&UserProfile>) -> String {
    let Some(profile) = profile else {
        return String::new();
    };

    let mut preamble = String::new();
    if let Some(name) = profile.signature() {
        preamble.push_str(&format!(
            "\nThe sender's name is: {name}. Use this name in the signoff -- \
             do NOT use placeholders like [Your Name]."
        ));
    }
    if let Some(company) = profile.company.as_deref() {
        preamble.push_str(&format!(
            "\nThe sender's company is: {company}. Use this instead of any [Company] placeholder."
        ));
    }
    preamble
}

/// Generate an email draft for the parsed request.
///
/// With no parsed input this returns a placeholder draft instead of
/// calling the model. A model failure yields an error draft plus a note
/// for the caller's error list; the pipeline keeps going either way.
pub(crate) async fn generate_draft(
    llm: &dyn Llm,
    parsed: Option<&ParsedInput>,
    intent: Intent,
    tone_context: &str,
    profile: Option<&UserProfile>,
) -> (DraftResult, Option<String>) {
    let Some(parsed) = parsed else {
        return (
            DraftResult {
                subject: PLACEHOLDER_SUBJECT.to_string(),
                body: "Please provide a prompt.".to_string(),
                intent: Some(intent),
                tone: None,
            },
            None,
        );
    };

    let recipient = match parsed.recipient.as_deref() {
        Some(recipient) => format!(" Recipient: {recipient}"),
        None => String::new(),
    };
    let length_hint = match parsed.constraints.max_length {
        Some(max) => format!(" Keep the email under {max} words."),
        None => String::new(),
    };

    let prompt = format!(
        "Write a complete email based on this request.\n\n\
         {}{recipient}\n\n\
         {tone_context}{length_hint}\n\
         {}\n\n\
         {}Output a subject line and full body. Use proper email format (greeting, body, closing).\n\
         Do NOT include any placeholder text like [Your Name], [Name], [Sender Name], [Company], etc.\n\
         Return JSON with fields: subject, body. Respond with JSON only.",
        parsed.prompt,
        sender_preamble(profile),
        conversation_context(profile),
    );

    let request = CompletionRequest::new(prompt).with_temperature(0.7);
    match complete_json::<DraftOutput>(llm, request).await {
        Ok(out) => (
            DraftResult {
                subject: out.subject,
                body: out.body,
                intent: Some(intent),
                tone: Some(parsed.tone),
            },
            None,
        ),
        Err(e) => (
            DraftResult {
                subject: ERROR_SUBJECT.to_string(),
                body: format!("Failed to generate draft: {e}"),
                intent: Some(intent),
                tone: Some(parsed.tone),
            },
            Some(e.to_string()),
        ),
    }
}
