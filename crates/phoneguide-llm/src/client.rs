//! The completion capability: the one external collaborator per turn.

use async_trait::async_trait;

use phoneguide_core::error::GuideError;

/// Errors from the completion service.
///
/// These never cross the chat-core boundary: the classifier, composer, and
/// explanation resolver each catch them and substitute a default. Timeouts
/// surface as [`LlmError::Request`] and are terminal for the call, never
/// retried, to keep per-turn latency bounded.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("API key environment variable {0} is not set")]
    MissingApiKey(String),
    #[error("completion request failed: {0}")]
    Request(String),
    #[error("completion service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse completion output: {0}")]
    Parse(String),
    #[error("completion returned no content")]
    EmptyCompletion,
}

impl From<LlmError> for GuideError {
    fn from(err: LlmError) -> Self {
        GuideError::Completion(err.to_string())
    }
}

/// An opaque text- and JSON-completion service.
///
/// Injected into the turn engine as a trait object so the ranking and
/// context logic stays testable without a live service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Structured completion: asks the model for a single JSON object
    /// shaped by `system` and returns it parsed.
    ///
    /// Runs at temperature 0 so extraction is deterministic.
    async fn complete_json(
        &self,
        system: &str,
        user: &str,
    ) -> Result<serde_json::Value, LlmError>;

    /// Free-text completion: returns the model's reply text.
    async fn complete_text(&self, system: &str, user: &str) -> Result<String, LlmError>;
}
