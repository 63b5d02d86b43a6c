//! Error types for the chat core.
//!
//! Deliberately small: completion-service failures are handled inside each
//! resolver by degrading to a default, so only request-validation problems
//! ever surface to the caller.

use phoneguide_core::error::GuideError;

/// Errors from the turn engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("request contains no user message")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
}

impl From<ChatError> for GuideError {
    fn from(err: ChatError) -> Self {
        GuideError::Chat(err.to_string())
    }
}
