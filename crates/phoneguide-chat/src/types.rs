//! Request, reply, intent, and context types for the chat core.
//!
//! Wire casing follows the frontend contract (`lastItemIds`,
//! `hardBrandOnly`, ...); Rust fields stay snake_case behind serde renames.

use serde::{Deserialize, Serialize};

use phoneguide_core::types::CatalogItem;

// =============================================================================
// Request side
// =============================================================================

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Conversational state carried between turns by the caller.
///
/// Both fields reference catalog ids that existed at write time; the store
/// is static, so they stay valid for the process lifetime. Mutated only by
/// the turn engine at the end of a default search turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    /// Ids shown in the previous turn's result, most recent first.
    #[serde(default)]
    pub last_item_ids: Option<Vec<String>>,
    /// Explicitly selected item, sticky until replaced.
    #[serde(default)]
    pub selected_phone_id: Option<String>,
}

/// An inbound turn: the transcript plus the prior context, round-tripped
/// verbatim by the caller.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub context: Option<ChatContext>,
}

// =============================================================================
// Intent
// =============================================================================

/// What the user is trying to do this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    #[default]
    Search,
    Compare,
    Explain,
    Details,
}

/// Structured classification of a user turn, produced once per turn.
///
/// `hard_brand_only` is derived locally (a non-empty brand list was
/// explicitly supplied), never trusted from the classifier output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub task: Task,
    #[serde(default)]
    pub brands: Option<Vec<String>>,
    #[serde(default)]
    pub budget_min: Option<u32>,
    #[serde(default)]
    pub budget_max: Option<u32>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub compare_names: Option<Vec<String>>,
    #[serde(default)]
    pub explain_topic: Option<String>,
    #[serde(default)]
    pub target_phone_id: Option<String>,
    #[serde(default)]
    pub hard_brand_only: bool,
}

// =============================================================================
// Reply side
// =============================================================================

/// The outcome of one turn: reply text, up to three catalog items, the
/// serialized intent, and (for search turns) the context to carry forward.
///
/// `context: None` means "unchanged": the caller keeps whatever it sent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnReply {
    pub text: String,
    pub items: Vec<CatalogItem>,
    pub intent: Intent,
    pub context: Option<ChatContext>,
}

// =============================================================================
// Tests
// =============================================================================
