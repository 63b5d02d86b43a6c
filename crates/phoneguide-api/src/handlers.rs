//! Route handler functions for the API endpoints.
//!
//! Each handler extracts its input via axum extractors, calls into the
//! turn engine, and returns JSON responses.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use phoneguide_chat::{ChatRequest, TurnReply};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// GET /healthz - liveness check.
pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// POST /chat - handle one conversational turn.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<TurnReply>, ApiError> {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        messages = request.messages.len(),
        has_context = request.context.is_some(),
        "Chat turn received"
    );

    let reply = state.engine.handle_turn(&request).await?;

    info!(
        %request_id,
        task = ?reply.intent.task,
        items = reply.items.len(),
        "Chat turn handled"
    );
    Ok(Json(reply))
}
