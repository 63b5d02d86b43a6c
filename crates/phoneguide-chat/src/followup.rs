//! Follow-up resolution for turns that refer back to a shown item.
//!
//! Runs before the intent classifier so referential follow-ups are never
//! misclassified as a fresh search (and never pay for a classification
//! call at all).

use std::sync::LazyLock;

use regex::Regex;

use phoneguide_core::types::CatalogItem;

use crate::composer::ReplyComposer;
use crate::types::{Intent, Task, TurnReply};

/// Phrases that refer back to a previously shown phone.
///
/// Matched as case-insensitive substrings. The original list also carried
/// "explain", which would shadow every explanation query once an item had
/// been shown; it is deliberately absent here.
static REFERENTIAL_PHRASES: &[&str] = &[
    "this phone",
    "that phone",
    "the phone",
    "tell me more",
    "details",
    "about it",
    "brief",
    "describe",
    "more info",
    "like this",
];

static REFERENTIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alts: Vec<String> = REFERENTIAL_PHRASES
        .iter()
        .map(|p| regex::escape(p))
        .collect();
    Regex::new(&format!("(?i){}", alts.join("|"))).expect("Invalid follow-up regex")
});

/// Detects and answers follow-up turns about the last-shown item.
pub struct FollowUpResolver;

impl FollowUpResolver {
    /// Whether the message uses referential phrasing.
    pub fn matches(message: &str) -> bool {
        REFERENTIAL_RE.is_match(message)
    }

    /// Resolve a follow-up turn, short-circuiting classification and
    /// ranking entirely.
    ///
    /// Returns `None` when there is no last-shown item or the message does
    /// not refer back to it. On a match the reply carries exactly that one
    /// item and leaves the context unchanged.
    pub async fn resolve(
        &self,
        message: &str,
        last_shown: Option<&CatalogItem>,
        composer: &ReplyComposer,
    ) -> Option<TurnReply> {
        let item = last_shown?;
        if !Self::matches(message) {
            return None;
        }

        let text = composer.focused_reply(message, item).await;
        Some(TurnReply {
            text,
            items: vec![item.clone()],
            intent: Intent {
                task: Task::Details,
                target_phone_id: Some(item.id.clone()),
                ..Intent::default()
            },
            context: None,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
