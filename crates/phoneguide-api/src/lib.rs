//! PhoneGuide API crate - axum HTTP server and route handlers.
//!
//! Exposes the chat turn handler and a health check over REST, with CORS
//! for the browser frontend and per-request tracing.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
