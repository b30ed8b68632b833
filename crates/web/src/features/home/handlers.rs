use axum::{Json, extract::State};
use storage::{
    Database,
    dto::home::{HomeResponse, StatsResponse},
};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/home",
    responses(
        (status = 200, description = "Upcoming matches, home score total and latest news", body = HomeResponse)
    ),
    tag = "pages"
)]
pub async fn home(State(db): State<Database>) -> WebResult<Json<HomeResponse>> {
    let home = services::home(db.pool()).await?;

    Ok(Json(home))
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Match statuses in use and team cities", body = StatsResponse)
    ),
    tag = "pages"
)]
pub async fn stats(State(db): State<Database>) -> WebResult<Json<StatsResponse>> {
    let stats = services::stats(db.pool()).await?;

    Ok(Json(stats))
}
