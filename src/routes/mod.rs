//! Router assembly.

mod users;

pub use users::user_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 4 * 1024 * 1024;

/// Full application: user routes plus request tracing and the body limit.
pub fn app(state: AppState) -> Router {
    user_routes(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
