//! Conversational core for PhoneGuide.
//!
//! Provides intent classification, catalog ranking, follow-up and
//! explanation resolution, reply composition, and the per-turn state
//! machine that wires them together. Every turn is a pure function of
//! (message, context, catalog) apart from the injected completion calls.

pub mod classifier;
pub mod composer;
pub mod engine;
pub mod error;
pub mod explain;
pub mod followup;
pub mod ranking;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use classifier::IntentClassifier;
pub use composer::ReplyComposer;
pub use engine::TurnEngine;
pub use error::ChatError;
pub use explain::ExplanationResolver;
pub use followup::FollowUpResolver;
pub use ranking::{rank, score_item};
pub use types::{ChatContext, ChatMessage, ChatRequest, Intent, Role, Task, TurnReply};
