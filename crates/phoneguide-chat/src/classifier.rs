//! Intent classification via the structured-completion service.
//!
//! The model proposes; this module normalizes and never trusts. Malformed
//! or missing output degrades to a plain search intent; classification
//! failures never surface into the turn handler.

use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use phoneguide_llm::CompletionClient;

use crate::types::{Intent, Task};

/// Fixed instruction describing the JSON shape the extractor must emit.
const INTENT_SYSTEM_PROMPT: &str = "You are a precise natural-language parser that converts user questions about \
smartphones into structured JSON intents. The JSON must strictly follow: \
{'task': one of ['search','compare','explain','details'], \
'brands': list of brand names from provided list, \
'budgetMin': int or null, 'budgetMax': int or null, \
'features': list of user priorities (camera, battery, performance, etc.), \
'compareNames': optional list of model names, \
'explainTopic': optional string, 'targetPhoneId': optional string, \
'hardBrandOnly': boolean}";

/// Classifies a user turn into a structured [`Intent`].
pub struct IntentClassifier {
    completion: Arc<dyn CompletionClient>,
}

/// Lenient shadow of the raw model output. Every field defaults so a
/// partially shaped object still normalizes instead of failing the turn.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawIntent {
    task: String,
    brands: Vec<String>,
    budget_min: Option<u32>,
    budget_max: Option<u32>,
    features: Vec<String>,
    compare_names: Vec<String>,
    explain_topic: Option<String>,
    target_phone_id: Option<String>,
}

impl IntentClassifier {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    /// Classify a message against the known brand list.
    ///
    /// Always returns an intent: any completion or parse failure yields the
    /// default search intent with all optional fields absent.
    pub async fn classify(&self, text: &str, brands: &[String]) -> Intent {
        let user = format!("User query: {}\nDataset brands: {}", text, brands.join(", "));

        let raw = match self.completion.complete_json(INTENT_SYSTEM_PROMPT, &user).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Intent extraction failed; defaulting to search");
                return Intent::default();
            }
        };

        let raw: RawIntent = match serde_json::from_value(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Intent output malformed; defaulting to search");
                return Intent::default();
            }
        };

        normalize(raw)
    }
}

/// Turn the raw model output into a trusted [`Intent`].
///
/// Empty lists normalize to absent ("no preference" is not an empty
/// preference), and `hard_brand_only` is derived from the raw brand list
/// rather than read from the model.
fn normalize(raw: RawIntent) -> Intent {
    let task = match raw.task.as_str() {
        "search" => Task::Search,
        "compare" => Task::Compare,
        "explain" => Task::Explain,
        "details" => Task::Details,
        other => {
            if !other.is_empty() {
                warn!(task = other, "Unknown task from classifier; using search");
            }
            Task::Search
        }
    };

    let hard_brand_only = !raw.brands.is_empty();

    Intent {
        task,
        brands: none_if_empty(raw.brands),
        budget_min: raw.budget_min,
        budget_max: raw.budget_max,
        features: none_if_empty(raw.features),
        compare_names: none_if_empty(raw.compare_names),
        explain_topic: raw.explain_topic.filter(|t| !t.trim().is_empty()),
        target_phone_id: raw.target_phone_id,
        hard_brand_only,
    }
}

fn none_if_empty(list: Vec<String>) -> Option<Vec<String>> {
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

// =============================================================================
// Tests
// =============================================================================
