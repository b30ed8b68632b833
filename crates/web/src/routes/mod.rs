use axum::Router;

use crate::features::{admin, articles, auth, home, teams};
use crate::state::AppState;

pub fn configure(state: AppState) -> Router<AppState> {
    let api = Router::new()
        .merge(home::routes::routes())
        .nest("/articles", articles::routes::routes(state.clone()))
        .nest("/teams", teams::routes::routes())
        .nest("/auth", auth::routes::routes(state.clone()))
        .nest("/admin", admin::routes::routes(state));

    Router::new().nest("/api", api)
}
