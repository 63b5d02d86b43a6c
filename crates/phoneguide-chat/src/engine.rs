//! The per-turn state machine wiring resolvers, classifier, ranking, and
//! composition.
//!
//! Each turn is handled independently against the read-only catalog; the
//! only state that survives a turn is the context object round-tripped by
//! the caller.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use phoneguide_catalog::CatalogStore;
use phoneguide_llm::CompletionClient;

use crate::classifier::IntentClassifier;
use crate::composer::ReplyComposer;
use crate::error::ChatError;
use crate::explain::ExplanationResolver;
use crate::followup::FollowUpResolver;
use crate::ranking::rank;
use crate::types::{ChatContext, ChatRequest, Intent, Role, Task, TurnReply};

/// Maximum message length in characters.
const MAX_MESSAGE_LENGTH: usize = 2000;

/// Keywords that mark a turn as asking for detail on the selected item.
static DETAIL_KEYWORDS: &[&str] = &["detail", "spec", "more", "about", "tell me"];

static DETAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alts: Vec<String> = DETAIL_KEYWORDS.iter().map(|p| regex::escape(p)).collect();
    Regex::new(&format!("(?i){}", alts.join("|"))).expect("Invalid detail regex")
});

/// Central turn handler coordinating follow-up, selection, classification,
/// ranking, and reply composition.
pub struct TurnEngine {
    catalog: Arc<CatalogStore>,
    classifier: IntentClassifier,
    follow_up: FollowUpResolver,
    explainer: ExplanationResolver,
    composer: ReplyComposer,
}

impl TurnEngine {
    /// Build an engine over a catalog and an injected completion service.
    pub fn new(catalog: Arc<CatalogStore>, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            catalog,
            classifier: IntentClassifier::new(Arc::clone(&completion)),
            follow_up: FollowUpResolver,
            explainer: ExplanationResolver::new(Arc::clone(&completion)),
            composer: ReplyComposer::new(completion),
        }
    }

    /// Handle one inbound turn.
    ///
    /// States are evaluated in strict order, first match wins:
    /// follow-up, selected-item detail, explain, default search/compare.
    /// The follow-up and selection checks run before any classification
    /// call so referential turns are never misrouted as a fresh search.
    pub async fn handle_turn(&self, request: &ChatRequest) -> Result<TurnReply, ChatError> {
        let message = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.trim())
            .unwrap_or("");

        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(ChatError::MessageTooLong(MAX_MESSAGE_LENGTH));
        }

        let context = request.context.clone().unwrap_or_default();
        debug!(message, ?context, "Handling turn");

        // Follow-up about the most recently shown item.
        let last_shown = context
            .last_item_ids
            .as_ref()
            .and_then(|ids| ids.first())
            .and_then(|id| self.catalog.get(id));
        if let Some(reply) = self.follow_up.resolve(message, last_shown, &self.composer).await {
            return Ok(reply);
        }

        // Detail request for an explicitly selected item.
        if let Some(selected) = context.selected_phone_id.as_deref() {
            if DETAIL_RE.is_match(message) {
                return Ok(self.selected_detail(message, selected).await);
            }
        }

        // Classify, then route explanation queries.
        let intent = self.classifier.classify(message, self.catalog.brands()).await;
        debug!(?intent, "Classified intent");

        if intent.task == Task::Explain {
            if let Some(topic) = intent.explain_topic.clone() {
                let text = self.explainer.explain(&topic).await;
                return Ok(TurnReply {
                    text,
                    items: vec![],
                    intent,
                    context: None,
                });
            }
        }

        // Default search/compare: rank and compose.
        self.recommend(message, intent, &context).await
    }

    async fn selected_detail(&self, message: &str, selected_id: &str) -> TurnReply {
        match self.catalog.get(selected_id) {
            None => TurnReply {
                text: "Sorry, I couldn't find that phone.".to_string(),
                items: vec![],
                intent: Intent {
                    task: Task::Details,
                    ..Intent::default()
                },
                context: None,
            },
            Some(item) => TurnReply {
                text: self.composer.detail_reply(message, item).await,
                items: vec![item.clone()],
                intent: Intent {
                    task: Task::Details,
                    target_phone_id: Some(item.id.clone()),
                    ..Intent::default()
                },
                context: None,
            },
        }
    }

    async fn recommend(
        &self,
        message: &str,
        intent: Intent,
        context: &ChatContext,
    ) -> Result<TurnReply, ChatError> {
        let picks = rank(&intent, self.catalog.items());
        let text = self
            .composer
            .recommendation_reply(message, &intent, &picks)
            .await;

        // Selection is sticky: a search turn never clears it.
        let new_context = ChatContext {
            last_item_ids: Some(picks.iter().map(|p| p.id.clone()).collect()),
            selected_phone_id: context.selected_phone_id.clone(),
        };

        Ok(TurnReply {
            text,
            items: picks,
            intent,
            context: Some(new_context),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
