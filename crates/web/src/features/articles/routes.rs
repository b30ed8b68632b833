use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{create_article, delete_article, get_article, list_articles, update_article};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_article))
        .route("/:slug", put(update_article).delete(delete_article))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/", get(list_articles))
        .route("/:slug", get(get_article))
        .merge(protected)
}
