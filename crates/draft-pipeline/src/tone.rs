//! Tone directives and sample-backed tone context.

use std::path::PathBuf;

use tracing::debug;

use draft_core::{Intent, ParsedInput, Tone};

use crate::text::truncate_chars;

/// Maximum number of sample characters included in the tone context.
const MAX_SAMPLE_CHARS: usize = 500;

/// Default directory scanned for `<tone>.txt` sample files.
pub const DEFAULT_SAMPLES_DIR: &str = "tone_samples";

/// Fixed writing directive for each tone.
pub fn directive_for(tone: Tone) -> &'static str {
    match tone {
        Tone::Formal => {
            "Use a formal, respectful tone. Avoid contractions. Use complete sentences and proper salutations."
        }
        Tone::Casual => {
            "Use a casual, conversational tone. Contractions and informal phrases are fine."
        }
        Tone::Assertive => {
            "Use an assertive, confident tone. Be direct and clear. Avoid hedging language."
        }
        Tone::Friendly => "Use a warm, friendly tone. Be approachable and personable.",
        Tone::Professional => "Use a professional, balanced tone. Polite but efficient.",
    }
}

/// Builds the tone context block for the draft generator.
///
/// Directives are compiled in; per-tone example snippets are loaded from
/// `<samples_dir>/<tone>.txt` when present and silently omitted when not.
#[derive(Debug, Clone)]
pub struct ToneLibrary {
    samples_dir: PathBuf,
}

impl Default for ToneLibrary {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES_DIR)
    }
}

impl ToneLibrary {
    /// A library reading samples from the given directory.
    pub fn new(samples_dir: impl Into<PathBuf>) -> Self {
        Self {
            samples_dir: samples_dir.into(),
        }
    }

    fn load_sample(&self, tone: Tone) -> Option<String> {
        let path = self.samples_dir.join(format!("{}.txt", tone.as_str()));
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let text = text.trim().to_string();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            Err(_) => {
                debug!("No tone sample at {}", path.display());
                None
            }
        }
    }

    /// Build the tone context for a parsed request, or an empty string
    /// when parsing produced nothing.
    pub fn context_for(&self, parsed: Option<&ParsedInput>, intent: Intent) -> String {
        let Some(parsed) = parsed else {
            return String::new();
        };

        let mut directive = directive_for(parsed.tone).to_string();
        if let Some(sample) = self.load_sample(parsed.tone) {
            directive.push_str("\n\nExample of this tone:\n");
            directive.push_str(&truncate_chars(&sample, MAX_SAMPLE_CHARS));
        }
        format!("Tone: {}\nIntent: {}", directive, intent.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draft_core::Constraints;
    use tempfile::TempDir;

    fn parsed(tone: Tone) -> ParsedInput {
        ParsedInput {
            prompt: "ask for the report".to_string(),
            recipient: None,
            tone,
            constraints: Constraints::default(),
        }
    }

    #[test]
    fn test_context_empty_without_parsed_input() {
        let library = ToneLibrary::default();
        assert_eq!(library.context_for(None, Intent::Other), "");
    }

    #[test]
    fn test_context_without_sample() {
        let dir = TempDir::new().unwrap();
        let library = ToneLibrary::new(dir.path());

        let context = library.context_for(Some(&parsed(Tone::Formal)), Intent::InfoRequest);

        assert!(context.starts_with("Tone: Use a formal, respectful tone."));
        assert!(context.ends_with("Intent: info_request"));
        assert!(!context.contains("Example of this tone:"));
    }

    #[test]
    fn test_context_includes_truncated_sample() {
        let dir = TempDir::new().unwrap();
        let sample = "x".repeat(600);
        std::fs::write(dir.path().join("casual.txt"), &sample).unwrap();
        let library = ToneLibrary::new(dir.path());

        let context = library.context_for(Some(&parsed(Tone::Casual)), Intent::Outreach);

        assert!(context.contains("Example of this tone:"));
        assert!(context.contains(&"x".repeat(500)));
        assert!(!context.contains(&"x".repeat(501)));
    }

    #[test]
    fn test_blank_sample_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("friendly.txt"), "   \n").unwrap();
        let library = ToneLibrary::new(dir.path());

        let context = library.context_for(Some(&parsed(Tone::Friendly)), Intent::Other);
        assert!(!context.contains("Example of this tone:"));
    }
}
