//! LLM completion port for the quote generator.
//!
//! Defines a generic interface for structured-output completion requests.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// A single structured completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Fixed instruction describing what to produce.
    pub instruction: String,
    /// Prior outputs, oldest first, given to the model as context.
    pub context: Vec<String>,
    /// JSON schema the response should conform to.
    pub response_schema: Value,
}

impl CompletionRequest {
    /// Render instruction and context as a single prompt.
    ///
    /// Providers without a separate context channel send this text as the
    /// user turn.
    #[must_use]
    pub fn prompt(&self) -> String {
        if self.context.is_empty() {
            return self.instruction.clone();
        }

        let history = serde_json::to_string(&self.context).unwrap_or_default();
        format!(
            "{}\n\nPreviously generated quotes (oldest first), do not repeat them:\n{}",
            self.instruction, history
        )
    }
}

/// Client for large language model text completion.
///
/// Implementations wrap specific LLM providers and handle authentication
/// and transport. They return the raw response text; validating it against
/// the requested schema is the caller's job.
///
/// # Errors
///
/// The [`complete`](Self::complete) method returns an error for API failures
/// or transport problems. A well-formed HTTP response whose text does not
/// match the schema is **not** an error at this layer.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a completion request and return the generated text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_without_context_is_instruction() {
        let request = CompletionRequest {
            instruction: "Write a quote.".into(),
            context: vec![],
            response_schema: json!({}),
        };
        assert_eq!(request.prompt(), "Write a quote.");
    }

    #[test]
    fn prompt_serializes_context_oldest_first() {
        let request = CompletionRequest {
            instruction: "Write a quote.".into(),
            context: vec!["first".into(), "second \"quoted\"".into()],
            response_schema: json!({}),
        };
        let prompt = request.prompt();
        assert!(prompt.starts_with("Write a quote."));
        assert!(prompt.ends_with(r#"["first","second \"quoted\""]"#));
    }
}
