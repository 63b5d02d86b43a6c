//! Completion-service capability for PhoneGuide.
//!
//! Defines the [`CompletionClient`] trait the chat core depends on, a Groq
//! implementation over the OpenAI-compatible chat-completions API, and a
//! scripted mock for tests. Callers above this crate never see a raw HTTP
//! failure: every consumer degrades to a default value per its own contract.

pub mod client;
pub mod groq;
pub mod mock;

pub use client::{CompletionClient, LlmError};
pub use groq::GroqClient;
pub use mock::MockCompletion;
