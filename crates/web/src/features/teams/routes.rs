use axum::{Router, routing::get};

use super::handlers::get_team;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/:id", get(get_team))
}
