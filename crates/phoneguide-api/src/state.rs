//! Application state shared across all route handlers.
//!
//! AppState holds references to the turn engine and configuration.
//! It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use phoneguide_chat::TurnEngine;
use phoneguide_core::config::GuideConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks. Nothing
/// here is mutable: the catalog is read-only and turn state round-trips
/// through the request, so no locks are needed.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<GuideConfig>,
    /// The per-turn chat engine.
    pub engine: Arc<TurnEngine>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the given components.
    pub fn new(config: GuideConfig, engine: TurnEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            start_time: Instant::now(),
        }
    }
}
