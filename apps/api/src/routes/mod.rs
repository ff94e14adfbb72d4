pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::history::handlers as history;
use crate::state::AppState;
use crate::upload::handlers as upload;

/// Transport-level cap, deliberately far above the 10 MiB domain ceiling so
/// oversized files reach validation and get a reasoned rejection instead of
/// an opaque 413.
const BODY_LIMIT_BYTES: usize = 64 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyses",
            post(upload::handle_upload).get(history::handle_list),
        )
        .route(
            "/api/v1/analyses/:id",
            get(history::handle_detail).delete(history::handle_delete),
        )
        .route("/api/v1/uploads/status", get(upload::handle_upload_status))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
