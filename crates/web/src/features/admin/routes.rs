use axum::{
    Router, middleware,
    routing::{delete, get, patch},
};

use super::handlers::{browse, create_record, delete_record, list_entities, update_match_result};
use crate::middleware::auth::{require_auth, require_superuser};
use crate::state::AppState;

/// Every admin route requires a logged-in superuser
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_entities))
        .route("/:entity", get(browse).post(create_record))
        .route("/:entity/:id", delete(delete_record))
        .route("/matches/:id/result", patch(update_match_result))
        .route_layer(middleware::from_fn(require_superuser))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
