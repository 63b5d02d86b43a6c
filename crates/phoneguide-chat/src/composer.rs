//! Reply composition: turns a resolved intent and selected records into
//! natural-language text via the free-text completion service.
//!
//! Every prompt pins the model to the records provided in it; any
//! completion failure degrades to a fixed placeholder so a reply is
//! always well formed.

use std::sync::Arc;

use tracing::warn;

use phoneguide_core::types::CatalogItem;
use phoneguide_llm::CompletionClient;

use crate::types::Intent;

/// Assistant persona shared by every free-text completion.
pub(crate) const SYSTEM_PROMPT: &str = "You are 'PhoneGuide', an expert smartphone assistant for India. \
Only refer to phones that are explicitly provided in the prompt. \
Be factual, clear, and under 150 words.";

/// Placeholder used when the completion service is unavailable.
pub(crate) const FALLBACK_REPLY: &str = "Sorry, I couldn't fetch a response.";

/// Composes user-facing reply text.
pub struct ReplyComposer {
    completion: Arc<dyn CompletionClient>,
}

impl ReplyComposer {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    /// Multi-item reply for a search or compare turn.
    pub async fn recommendation_reply(
        &self,
        message: &str,
        intent: &Intent,
        picks: &[CatalogItem],
    ) -> String {
        let summaries: Vec<String> = picks.iter().map(summary_line).collect();
        let intent_json = serde_json::to_string(intent).unwrap_or_else(|_| "{}".to_string());

        let prompt = format!(
            "User message: {}\n\
             Intent parsed: {}\n\
             Phones in dataset: {:?}\n\n\
             Write a short, under-150-word PhoneGuide reply suggesting only these phones.",
            message, intent_json, summaries
        );

        self.complete_or(&prompt, FALLBACK_REPLY.to_string()).await
    }

    /// Focused reply about the last-shown item, for follow-up turns.
    ///
    /// Falls back to an item-specific canned line rather than the generic
    /// placeholder so the follow-up still names the phone it is about.
    pub async fn focused_reply(&self, message: &str, item: &CatalogItem) -> String {
        let prompt = format!(
            "User asked: {}\n\
             About this phone: {} by {} - \u{20b9}{}\n\
             Key specs: {}\" {}, {}MP camera, {}mAh battery, {} processor\n\n\
             Write a friendly, detailed explanation about this specific phone focusing on:\n\
             - Key features and strengths\n\
             - Who it's best for\n\
             - What makes it stand out\n\
             Keep it under 150 words and only talk about this phone.",
            message,
            item.name,
            item.brand,
            item.price_inr,
            item.display.size_inches,
            item.display.kind,
            item.cameras.main_mp,
            item.battery_mah,
            item.soc
        );

        let fallback = format!(
            "The {} is a great choice with excellent features.",
            item.name
        );
        self.complete_or(&prompt, fallback).await
    }

    /// Detail reply for an explicitly selected item.
    pub async fn detail_reply(&self, message: &str, item: &CatalogItem) -> String {
        let record = serde_json::to_string(item).unwrap_or_else(|_| item.name.clone());
        let prompt = format!(
            "User asked: {}\n\
             Selected phone details (from dataset): {}\n\
             Write a friendly and factual summary under 150 words.\n\
             Focus only on this phone \u{2014} key highlights, ideal audience, and unique strengths.\n\
             Do not mention or suggest other models.",
            message, record
        );

        self.complete_or(&prompt, FALLBACK_REPLY.to_string()).await
    }

    async fn complete_or(&self, prompt: &str, fallback: String) -> String {
        match self.completion.complete_text(SYSTEM_PROMPT, prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => fallback,
            Err(e) => {
                warn!(error = %e, "Reply composition failed; using fallback");
                fallback
            }
        }
    }
}

/// One-line spec summary embedded in recommendation prompts.
fn summary_line(item: &CatalogItem) -> String {
    format!(
        "{} \u{2014} \u{20b9}{}: {}\" {}, {}MP main, {}mAh",
        item.name,
        item.price_inr,
        item.display.size_inches,
        item.display.kind,
        item.cameras.main_mp,
        item.battery_mah
    )
}

// =============================================================================
// Tests
// =============================================================================
