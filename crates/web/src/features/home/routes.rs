use axum::{Router, routing::get};

use super::handlers::{home, stats};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(home))
        .route("/stats", get(stats))
}
