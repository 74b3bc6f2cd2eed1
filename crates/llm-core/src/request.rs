//! Completion request and response types.

/// A single blocking completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The user prompt.
    pub prompt: String,
    /// Optional system instruction.
    pub system: Option<String>,
    /// Sampling temperature, if the stage wants to override the default.
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a request with just a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the system instruction.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A completion returned by a model client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The generated text.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = CompletionRequest::new("hello")
            .with_system("be brief")
            .with_temperature(0.1)
            .with_max_tokens(256);

        assert_eq!(request.prompt, "hello");
        assert_eq!(request.system.as_deref(), Some("be brief"));
        assert_eq!(request.temperature, Some(0.1));
        assert_eq!(request.max_tokens, Some(256));
    }
}
